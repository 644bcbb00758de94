mod cli;
mod commands;
mod config;
mod output;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use keydeck_core::{Vault, paths};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::CliConfig::load();
    config.apply_remote_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let db_path = match &cli.db_path {
        Some(path) => PathBuf::from(path),
        None => paths::database_path()?,
    };
    let vault = Arc::new(Vault::open(&db_path)?);

    match cli.command {
        Commands::Add(args) => commands::add::run(vault, args, cli.format).await,
        Commands::List => commands::list::run(vault, cli.format).await,
        Commands::Show { id } => commands::show::run(vault, &id, cli.format).await,
        Commands::Edit(args) => commands::edit::run(vault, args, cli.format).await,
        Commands::Remove { id } => commands::remove::run(vault, &id, cli.format).await,
        Commands::Search(args) => commands::search::run(vault, args, cli.format).await,
    }
}
