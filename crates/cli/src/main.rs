use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use voyage_http::AppState;
use voyage_storage::StorageBackend;

mod commands;

#[derive(Parser)]
#[command(name = "voyage")]
#[command(about = "Trip planning server with budgets, expenses and itineraries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Print trips with their budgets as JSON
    Trips {
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Recompute a trip budget's spent total from its expenses
    Refresh { trip_id: String },
    /// Replace all data with a sample data set (development only)
    Seed,
}

pub(crate) fn get_db_path() -> PathBuf {
    if let Ok(path) = std::env::var("VOYAGE_DB_PATH") {
        return PathBuf::from(path);
    }
    dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")).join("voyage").join("voyage.db")
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn postgres_url() -> Option<String> {
    std::env::var("VOYAGE_DATABASE_URL")
        .ok()
        .filter(|url| url.starts_with("postgres://") || url.starts_with("postgresql://"))
}

pub(crate) async fn open_state() -> Result<Arc<AppState>> {
    let storage = match postgres_url() {
        Some(url) => {
            tracing::info!("Using PostgreSQL backend");
            StorageBackend::new_postgres(&url).await?
        },
        None => {
            let db_path = get_db_path();
            ensure_db_dir(&db_path)?;
            tracing::info!(path = %db_path.display(), "Using SQLite backend");
            StorageBackend::new_sqlite(&db_path)?
        },
    };
    Ok(Arc::new(AppState::new(Arc::new(storage))))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await,
        Commands::Trips { status } => commands::trips::run_list(status).await,
        Commands::Refresh { trip_id } => commands::trips::run_refresh(&trip_id).await,
        Commands::Seed => commands::seed::run().await,
    }
}
