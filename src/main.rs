//! Binary entry point for the development proxy.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;

use xiv_dev_proxy::config::{self, ProxyConfig};
use xiv_dev_proxy::http::HttpServer;
use xiv_dev_proxy::lifecycle::{signals, Shutdown};
use xiv_dev_proxy::observability::logging;

#[derive(Parser)]
#[command(name = "xiv-dev-proxy")]
#[command(
    about = "Local development proxy: static files plus a CORS-friendly XIVAPI relay",
    long_about = None
)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the static file root directory.
    #[arg(long)]
    root: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => ProxyConfig::default(),
    };

    if let Some(port) = cli.port {
        let mut addr: SocketAddr = config.listener.bind_address.parse()?;
        addr.set_port(port);
        config.listener.bind_address = addr.to_string();
    }
    if let Some(root) = cli.root {
        config.static_files.root = root;
    }

    if let Err(errors) = config::validate_config(&config) {
        return Err(config::ConfigError::Validation(errors).into());
    }

    logging::init(&config.observability.log_level);

    tracing::info!("xiv-dev-proxy v0.1.0 starting");

    let addr: SocketAddr = config.listener.bind_address.parse()?;
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        root = %config.static_files.root.display(),
        "Serving static files"
    );
    tracing::info!(
        prefix = %config.route.prefix,
        upstream = %config.upstream.base_url,
        "API proxy active"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_interrupt().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
