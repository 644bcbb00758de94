use clap::{Args, Parser, Subcommand};

use keydeck_traits::Category;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "keydeck")]
#[command(version, about = "KeyDeck - API key manager")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database path (defaults to ~/.keydeck/keydeck.db)
    #[arg(long, global = true, env = "KEYDECK_DB_PATH")]
    pub db_path: Option<String>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Store a new API key
    Add(AddArgs),

    /// List all stored API keys
    List,

    /// Show one API key
    Show {
        /// Record id
        id: String,
    },

    /// Edit fields of a stored API key
    Edit(EditArgs),

    /// Remove an API key
    Remove {
        /// Record id
        id: String,
    },

    /// Search API keys by text and category
    Search(SearchArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Human-readable label
    pub name: String,

    /// The secret value
    pub key: String,

    /// Service URL
    #[arg(long)]
    pub url: Option<String>,

    /// Category: ai, payment, storage, analytics, communication, other
    #[arg(long)]
    pub category: Option<Category>,

    /// Free-form description
    #[arg(long)]
    pub description: Option<String>,

    /// Expiry date (ISO 8601)
    #[arg(long)]
    pub expires: Option<String>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Record id
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub key: Option<String>,

    #[arg(long)]
    pub url: Option<String>,

    /// Category: ai, payment, storage, analytics, communication, other
    #[arg(long)]
    pub category: Option<Category>,

    #[arg(long)]
    pub description: Option<String>,

    /// New expiry date (ISO 8601)
    #[arg(long, conflicts_with = "clear_expiry")]
    pub expires: Option<String>,

    /// Drop the expiry date
    #[arg(long)]
    pub clear_expiry: bool,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Text matched against name, description and URL
    #[arg(default_value = "")]
    pub query: String,

    /// Category filter ("all" matches everything)
    #[arg(long)]
    pub category: Option<String>,
}
