//! Uptime Server
//!
//! Serves `GET /uptime` with the host's uptime.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{ArgAction, Parser};

use uptime_server::{default_source, AppState, FileConfig, ServerConfig, UptimeServer};

#[derive(Parser)]
#[command(name = "uptime-server")]
#[command(about = "HTTP service reporting host system uptime")]
struct Cli {
    /// Host to bind (default: from .uptime.toml or 0.0.0.0)
    #[arg(long, env = "UPTIME_HOST")]
    host: Option<String>,

    /// Port to bind (default: from .uptime.toml or 5000)
    #[arg(short, long, env = "UPTIME_PORT")]
    port: Option<u16>,

    /// Path to config file (default: search for .uptime.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v debug, -vv trace). Default is info.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let now = Instant::now();
    let cli = Cli::parse();

    service_common::init_tracing("uptime_server", cli.verbose)?;

    tracing::info!("Starting uptime_server");

    let file_config = FileConfig::load(cli.config.as_deref())?;
    let config = ServerConfig::resolve(file_config, cli.host, cli.port);

    let source = default_source();
    tracing::info!("Reading uptime from {}", source.name());

    let server = UptimeServer::bind(config.bind_addr(), AppState::new(source)).await?;

    tracing::info!("Server started in {}ms", now.elapsed().as_millis());

    server.serve(service_common::shutdown_signal()).await
}
