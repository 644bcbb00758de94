use anyhow::Result;
use std::sync::Arc;

use keydeck_core::{SearchFilter, Vault};

use crate::cli::SearchArgs;
use crate::output::{OutputFormat, print_json, print_records};

pub async fn run(vault: Arc<Vault>, args: SearchArgs, format: OutputFormat) -> Result<()> {
    let filter = SearchFilter::new(args.query, args.category);
    let records = vault.search(&filter).await;

    if format.is_json() {
        return print_json(&records);
    }

    print_records(&records)
}
