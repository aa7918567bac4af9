//! `clients-api` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`   — start the API server.
//! - `migrate` — run pending database migrations.

mod config;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => {
            let database = &args.database;
            let pool = db::pool::create_pool(&database.database_url, database.max_connections)
                .await
                .context("failed to connect to database")?;

            if args.migrate {
                db::pool::run_migrations(&pool).await.context("migration failed")?;
            }

            info!("Starting API server on {} (locale={})", args.bind, args.locale);
            let store = Arc::new(db::PgClientStore::new(pool.clone()));
            let state = api::AppState::new(store, args.locale);
            let served = api::serve(&args.bind, state).await;

            pool.close().await;
            info!("Database pool closed");
            served.with_context(|| format!("server on {} failed", args.bind))?;
        }
        Command::Migrate { database } => {
            info!("Running migrations");
            let pool = db::pool::create_pool(&database.database_url, database.max_connections)
                .await
                .context("failed to connect to database")?;
            db::pool::run_migrations(&pool).await.context("migration failed")?;
            pool.close().await;
            info!("Migrations applied successfully");
        }
    }

    Ok(())
}
