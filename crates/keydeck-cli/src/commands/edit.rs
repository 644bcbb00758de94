use anyhow::{Result, bail};
use std::sync::Arc;

use keydeck_core::{ApiKeyPatch, Vault};

use crate::cli::EditArgs;
use crate::output::{OutputFormat, print_json};

pub async fn run(vault: Arc<Vault>, args: EditArgs, format: OutputFormat) -> Result<()> {
    let patch = ApiKeyPatch {
        name: args.name,
        key: args.key,
        url: args.url,
        expires_at: if args.clear_expiry {
            Some(None)
        } else {
            args.expires.map(Some)
        },
        category: args.category,
        description: args.description,
    };

    if patch.is_empty() {
        bail!("Nothing to update");
    }

    let Some(record) = vault.update(&args.id, patch).await else {
        bail!("API key not found: {}", args.id);
    };

    if format.is_json() {
        return print_json(&record);
    }

    println!("Updated {} ({})", record.name, record.id);
    Ok(())
}
