use anyhow::{Result, bail};
use std::sync::Arc;

use keydeck_core::Vault;

use crate::output::{OutputFormat, print_json};

pub async fn run(vault: Arc<Vault>, id: &str, format: OutputFormat) -> Result<()> {
    if !vault.delete(id).await {
        bail!("API key not found: {id}");
    }

    if format.is_json() {
        return print_json(&serde_json::json!({ "deleted": true, "id": id }));
    }

    println!("Removed {id}");
    Ok(())
}
