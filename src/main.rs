//! mocknroll server binary.
//!
//! Loads an optional TOML configuration, applies command-line overrides and
//! serves until SIGINT or SIGTERM.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;

use mocknroll::config::loader::read_config;
use mocknroll::lifecycle::signals::wait_for_signal;
use mocknroll::observability::{logging, metrics};
use mocknroll::{HttpServer, ServerConfig, Shutdown};

#[derive(Parser)]
#[command(name = "mocknroll", version)]
#[command(about = "Proxy to a real upstream, answering selected paths with canned mocks", long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Upstream origin, e.g. http://localhost:9000
    #[arg(short, long)]
    target: Option<String>,

    /// Path prefix under which requests are mocked or proxied
    #[arg(short, long)]
    prefix: Option<String>,

    #[arg(long)]
    http_port: Option<u16>,

    #[arg(long)]
    https_port: Option<u16>,

    #[arg(long)]
    bind_address: Option<IpAddr>,
}

impl Args {
    fn apply(self, config: &mut ServerConfig) {
        if let Some(target) = self.target {
            config.target = Some(target);
        }
        if let Some(prefix) = self.prefix {
            config.prefix = prefix;
        }
        if let Some(port) = self.http_port {
            config.http_port = port;
        }
        if let Some(port) = self.https_port {
            config.https_port = port;
        }
        if let Some(addr) = self.bind_address {
            config.bind_address = addr;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = Args::parse();

    let mut config = match args.config.take() {
        Some(path) => read_config(&path)?,
        None => ServerConfig::default(),
    };
    args.apply(&mut config);

    logging::init_logging(&config.observability.log_level);
    tracing::info!("mocknroll v{} starting", env!("CARGO_PKG_VERSION"));

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let server = HttpServer::new(config)?;
    let shutdown = Shutdown::new();
    let running = server.start(&shutdown).await?;

    tracing::info!(
        http = %running.http_addr(),
        https = ?running.https_addr(),
        "Ready"
    );

    wait_for_signal().await;
    shutdown.trigger();
    running.wait().await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
