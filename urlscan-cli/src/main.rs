mod args;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use args::Args;
use urlscan_api::ApiConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing based on verbosity
    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    info!(listen = %args.listen, db = %args.db_path.display(), "starting urlscan");

    urlscan_api::start_server(ApiConfig {
        listen_addr: args.listen,
        db_path: args.db_path,
    })
    .await
}
