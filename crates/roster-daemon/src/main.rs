// crates/roster-daemon/src/main.rs
//
// Binary entrypoint for the Roster daemon.
//
// Initializes tracing, parses CLI arguments, loads configuration, builds
// the shared store and service core, and runs both listeners — the TLS
// gRPC listener and the plaintext HTTP gateway — until ctrl-c, at which
// point both drain gracefully.

mod config;

use std::sync::Arc;

use clap::Parser;
use config::DaemonConfig;

use roster_gateway::GatewayConfig;
use roster_rpc::{ClientConfig, RosterClient, RosterRpcServer, RosterService, RpcConfig};
use roster_store::MemoryUserStore;

/// Roster service daemon — runs the RPC listener and the HTTP gateway.
#[derive(Parser, Debug)]
#[command(name = "roster-daemon", version = "0.1.0", about = "Roster service daemon")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "~/.roster/config.toml")]
    config: String,

    /// Bearer token the RPC listener requires; overrides the config file.
    #[arg(long)]
    auth_token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber for structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Load configuration from TOML file, falling back to defaults if the
    // file is not found.
    let config_path = expand_tilde(&args.config);
    let mut config = match DaemonConfig::load(&config_path) {
        Ok(cfg) => {
            tracing::info!("Loaded configuration from {}", config_path);
            cfg
        }
        Err(e) => {
            tracing::warn!(
                "Could not load config from {}: {}. Using defaults.",
                config_path,
                e
            );
            DaemonConfig::default()
        }
    };

    // CLI --auth-token flag overrides the config file value.
    if let Some(token) = args.auth_token {
        config.auth_token = Some(token);
    }
    let auth_token = config
        .auth_token
        .clone()
        .ok_or("auth_token must be set in the config file or via --auth-token")?;

    tracing::info!("Roster daemon v0.1.0");
    tracing::info!("RPC endpoint: {}:{}", config.rpc_host, config.rpc_port);
    tracing::info!("HTTP endpoint: {}:{}", config.http_host, config.http_port);

    // One store and one service core, shared by everything in flight.
    let store = Arc::new(MemoryUserStore::new());
    let service = Arc::new(RosterService::new(store));

    // Shutdown fan-out: ctrl-c flips the watch value and both listeners
    // stop accepting and drain.
    let (shutdown_tx, _) = tokio::sync::watch::channel(false);
    {
        let shutdown_tx = shutdown_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                return;
            }
            tracing::info!("Shutdown requested");
            let _ = shutdown_tx.send(true);
        });
    }

    // RPC listener: TLS termination plus the auth guard.
    let rpc_config = RpcConfig {
        host: config.rpc_host.clone(),
        port: config.rpc_port,
        cert_path: expand_tilde(&config.tls_cert_path),
        key_path: expand_tilde(&config.tls_key_path),
        auth_token,
    };
    let rpc_server = RosterRpcServer::new(rpc_config, service);
    let mut rpc_shutdown = shutdown_tx.subscribe();
    let rpc_task = tokio::spawn(async move {
        rpc_server
            .start(async move {
                let _ = rpc_shutdown.changed().await;
            })
            .await
            .map_err(|e| e.to_string())
    });

    // Gateway: dials the RPC listener lazily over one-way TLS, so both
    // listeners can start in either order.
    let client_config = ClientConfig {
        endpoint: format!("https://{}:{}", config.rpc_host, config.rpc_port),
        ca_cert_path: expand_tilde(config.rpc_ca_path()),
        tls_domain: config.tls_domain.clone(),
    };
    let client = RosterClient::connect_lazy(&client_config).map_err(|e| e.to_string())?;

    let gateway_config = GatewayConfig {
        host: config.http_host.clone(),
        port: config.http_port,
    };
    let mut gateway_shutdown = shutdown_tx.subscribe();
    let gateway_task = tokio::spawn(async move {
        roster_gateway::serve(&gateway_config, Arc::new(client), async move {
            let _ = gateway_shutdown.changed().await;
        })
        .await
        .map_err(|e| e.to_string())
    });

    // Both listeners are long-lived; if either exits early that is a
    // daemon-level failure, otherwise wait for both to drain.
    let (rpc_result, gateway_result) = tokio::try_join!(rpc_task, gateway_task)?;
    rpc_result?;
    gateway_result?;

    tracing::info!("Roster daemon shut down gracefully");
    Ok(())
}

/// Expand `~` at the start of a path to the user's home directory.
fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return format!("{}{}", home.display(), &path[1..]);
        }
    }
    path.to_string()
}
