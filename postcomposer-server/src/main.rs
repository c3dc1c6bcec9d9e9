//! postcomposer-server - HTTP API for the user directory and media catalog

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use libpostcomposer::logging::{LogFormat, LoggingConfig};
use libpostcomposer::service::ComposerService;
use libpostcomposer::Config;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "postcomposer-server")]
#[command(about = "Serve the PostComposer HTTP API", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "POSTCOMPOSER_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind (overrides [server] host)
    #[arg(long, env = "POSTCOMPOSER_HOST")]
    host: Option<String>,

    /// Port to bind (overrides [server] port)
    #[arg(short, long, env = "POSTCOMPOSER_PORT")]
    port: Option<u16>,

    /// Log output format (text, json, or pretty)
    #[arg(long, env = "POSTCOMPOSER_LOG_FORMAT", default_value = "text")]
    log_format: LogFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = std::env::var("POSTCOMPOSER_LOG_LEVEL")
        .unwrap_or_else(|_| "info,tower_http=debug".to_string());
    LoggingConfig::new(cli.log_format, level, cli.verbose).init();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load_or_default().context("Failed to load config")?,
    };

    let service = ComposerService::from_config(&config)
        .await
        .context("Failed to open database")?;

    let host = cli.host.unwrap_or(config.server.host);
    let port = cli.port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", host, port))?;

    let app = postcomposer_server::build_app(Arc::new(service));

    info!("PostComposer server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
