use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use taskd::{config::Config, rest, storage::Storage, AppContext};
use tracing::info;

#[derive(Parser)]
#[command(name = "taskd", about = "Task tracking web app", version)]
struct Args {
    /// HTTP listening port
    #[arg(long, env = "TASKD_PORT")]
    port: Option<u16>,

    /// Data directory for the SQLite database
    #[arg(long, env = "TASKD_DATA_DIR")]
    data_dir: Option<std::path::PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "TASKD_LOG")]
    log: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::new(args.port, args.data_dir, args.log);

    // Init once — must happen before any tracing calls.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log))
        .compact()
        .init();

    let storage = Storage::new(&config.data_dir).await?;
    info!("database ready in {}", config.data_dir.display());

    let ctx = Arc::new(AppContext { config, storage });
    rest::start_rest_server(ctx).await
}
