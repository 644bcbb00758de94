use anyhow::Result;
use clap::ValueEnum;
use comfy_table::Table;
use serde::Serialize;

use keydeck_traits::ApiKey;

/// Output format for CLI commands
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value)?;
    println!("{output}");
    Ok(())
}

/// Render a record listing; the secret itself is shown by `show`, not here.
pub fn print_records(records: &[ApiKey]) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Category", "URL", "Expires", "Created"]);

    for record in records {
        table.add_row(vec![
            record.id.clone(),
            record.name.clone(),
            record
                .category
                .map(|c| c.to_string())
                .unwrap_or_default(),
            record.url.clone().unwrap_or_default(),
            record.expires_at.clone().unwrap_or_default(),
            record.created_at.clone(),
        ]);
    }

    println!("{table}");
    Ok(())
}
