//! HTTP server command
//!
//! Opens the database, runs migrations, then serves until shutdown.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use itemctl_server::db::{create_pool_with_options, migrations};
use itemctl_server::http::{run_server, ServerConfig};
use itemctl_server::models::PresenceRule;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "ITEMCTL_BIND", default_value = "0.0.0.0:9000")]
    pub bind: SocketAddr,

    /// SQLite database file (created if missing)
    #[arg(long, env = "ITEMCTL_DB_PATH", default_value = "app.db")]
    pub db_path: PathBuf,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = 5)]
    pub max_connections: u32,

    /// Treat only null/absent fields as missing on item creation (zero is accepted)
    #[arg(long, env = "ITEMCTL_EXPLICIT_PRESENCE")]
    pub explicit_presence: bool,
}

impl ServeArgs {
    fn presence(&self) -> PresenceRule {
        if self.explicit_presence {
            PresenceRule::Explicit
        } else {
            PresenceRule::Truthy
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!(db = %args.db_path.display(), "Starting itemctl server on {}", args.bind);

    let pool = create_pool_with_options(&args.db_path, args.max_connections)
        .await
        .with_context(|| format!("Failed to open database at {}", args.db_path.display()))?;

    migrations::run(&pool)
        .await
        .context("Failed to initialize database schema")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        presence: args.presence(),
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_service() {
        let args = ServeArgs::try_parse_from(["serve"]).unwrap();
        assert_eq!(args.bind, "0.0.0.0:9000".parse().unwrap());
        assert_eq!(args.db_path, PathBuf::from("app.db"));
        assert_eq!(args.presence(), PresenceRule::Truthy);
    }

    #[test]
    fn explicit_presence_flag() {
        let args = ServeArgs::try_parse_from(["serve", "--explicit-presence"]).unwrap();
        assert_eq!(args.presence(), PresenceRule::Explicit);
    }
}
