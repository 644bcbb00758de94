//! Path utilities for KeyDeck directory resolution.

use anyhow::Result;
use std::path::PathBuf;

const KEYDECK_DIR: &str = ".keydeck";
const DB_FILE: &str = "keydeck.db";

/// Environment variable to override the KeyDeck directory.
const KEYDECK_DIR_ENV: &str = "KEYDECK_DIR";

/// Resolve the KeyDeck data directory.
/// Priority: KEYDECK_DIR env var > ~/.keydeck/
pub fn resolve_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(KEYDECK_DIR_ENV)
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|h| h.join(KEYDECK_DIR))
        .ok_or_else(|| anyhow::anyhow!("Failed to determine home directory"))
}

/// Ensure the KeyDeck directory exists and return its path.
pub fn ensure_data_dir() -> Result<PathBuf> {
    let dir = resolve_data_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the database path: ~/.keydeck/keydeck.db
pub fn database_path() -> Result<PathBuf> {
    Ok(ensure_data_dir()?.join(DB_FILE))
}
