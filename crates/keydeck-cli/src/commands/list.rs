use anyhow::Result;
use std::sync::Arc;

use keydeck_core::Vault;

use crate::output::{OutputFormat, print_json, print_records};

pub async fn run(vault: Arc<Vault>, format: OutputFormat) -> Result<()> {
    let records = vault.list_all().await;

    if format.is_json() {
        return print_json(&records);
    }

    print_records(&records)
}
