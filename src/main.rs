use std::path::PathBuf;

use clap::Parser;

use cors_relay::config::{load_config, validation::validate_config, ConfigError, RelayConfig};
use cors_relay::lifecycle::{wait_for_signal, Shutdown};
use cors_relay::observability::init_logging;
use cors_relay::{net, HttpServer};

#[derive(Parser)]
#[command(name = "cors-relay")]
#[command(about = "Relay /proxy/<url> requests and add permissive CORS headers", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overrides listener.bind_address
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    init_logging(&config.observability);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config_file = ?cli.config,
        "cors-relay starting"
    );

    let listener = net::bind(&config.listener).await?;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    let mut server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    tokio::select! {
        result = &mut server_task => {
            result??;
            tracing::warn!("Server exited without a shutdown signal");
            return Ok(());
        }
        _ = wait_for_signal() => {}
    }

    shutdown.trigger();
    server_task.await??;

    tracing::info!("Shutdown complete");
    Ok(())
}
