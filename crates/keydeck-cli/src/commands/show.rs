use anyhow::{Result, bail};
use std::sync::Arc;

use keydeck_core::Vault;

use crate::output::{OutputFormat, print_json};

pub async fn run(vault: Arc<Vault>, id: &str, format: OutputFormat) -> Result<()> {
    let Some(record) = vault.get(id).await else {
        bail!("API key not found: {id}");
    };

    if format.is_json() {
        return print_json(&record);
    }

    println!("ID:          {}", record.id);
    println!("Name:        {}", record.name);
    println!("Key:         {}", record.key);
    if let Some(url) = &record.url {
        println!("URL:         {url}");
    }
    if let Some(category) = record.category {
        println!("Category:    {category}");
    }
    if let Some(description) = &record.description {
        println!("Description: {description}");
    }
    if let Some(expires_at) = &record.expires_at {
        println!("Expires:     {expires_at}");
    }
    println!("Created:     {}", record.created_at);

    Ok(())
}
