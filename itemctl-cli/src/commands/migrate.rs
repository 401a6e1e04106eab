//! Schema initialization without serving

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use itemctl_server::db::{create_pool, migrations};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// SQLite database file (created if missing)
    #[arg(long, env = "ITEMCTL_DB_PATH", default_value = "app.db")]
    pub db_path: PathBuf,
}

/// Create the item table if it does not exist
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool(&args.db_path)
        .await
        .with_context(|| format!("Failed to open database at {}", args.db_path.display()))?;

    migrations::run(&pool)
        .await
        .context("Failed to initialize database schema")?;

    pool.close().await;
    println!("Database ready: {}", args.db_path.display());
    Ok(())
}
