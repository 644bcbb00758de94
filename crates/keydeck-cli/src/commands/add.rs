use anyhow::{Result, bail};
use std::sync::Arc;

use keydeck_core::{ApiKeyInput, Vault};

use crate::cli::AddArgs;
use crate::output::{OutputFormat, print_json};

pub async fn run(vault: Arc<Vault>, args: AddArgs, format: OutputFormat) -> Result<()> {
    let input = ApiKeyInput {
        name: args.name,
        key: args.key,
        url: args.url,
        expires_at: args.expires,
        category: args.category,
        description: args.description,
    };

    let Some(record) = vault.add(input).await else {
        bail!("Failed to store the key in any backend");
    };

    if format.is_json() {
        return print_json(&record);
    }

    println!("Added {} ({})", record.name, record.id);
    Ok(())
}
