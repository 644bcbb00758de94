//! CLI configuration file support
//!
//! Loads configuration from ~/.config/keydeck/config.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Remote backend settings
    #[serde(default)]
    pub remote: RemoteSection,
}

/// Remote backend configuration values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteSection {
    /// Base URL of the remote database
    pub database_url: Option<String>,
    /// API key used to authenticate against it
    pub api_key: Option<String>,
    /// Project identifier
    pub project_id: Option<String>,
}

impl CliConfig {
    /// Load configuration from the default path
    pub fn load() -> Self {
        Self::load_from_path(Self::default_path())
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: Option<PathBuf>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Get the default configuration file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("keydeck").join("config.toml"))
    }

    /// Apply remote settings to the KEYDECK_* environment variables the
    /// core crate probes. Explicit environment variables win.
    ///
    /// # Safety
    /// This modifies environment variables which can cause issues in
    /// multi-threaded contexts. Should only be called early in main()
    /// before spawning threads.
    pub fn apply_remote_env(&self) {
        apply_env("KEYDECK_DATABASE_URL", self.remote.database_url.as_deref());
        apply_env("KEYDECK_API_KEY", self.remote.api_key.as_deref());
        apply_env("KEYDECK_PROJECT_ID", self.remote.project_id.as_deref());
    }
}

fn apply_env(name: &str, value: Option<&str>) {
    if let Some(value) = value
        && std::env::var(name).is_err()
    {
        // SAFETY: Called early in main() before spawning threads
        unsafe { std::env::set_var(name, value) };
    }
}
