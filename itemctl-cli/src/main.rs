//! itemctl CLI - dated item records service
//!
//! Entry point for the itemctl command-line tool:
//! - `serve`: run the HTTP API over a SQLite file
//! - `migrate`: create the schema and exit

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "itemctl",
    author,
    version,
    about = "Record, sum and filter dated item counts over HTTP"
)]
struct Cli {
    /// Debug logging (when RUST_LOG is not set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Initialize the database schema and exit
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Variables already in the environment take precedence
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
    }

    Ok(())
}
