// crates/roster-gateway/src/lib.rs
//
// roster-gateway: plaintext HTTP/JSON front for the Roster RPC service.
//
// Each route maps to exactly one RPC method; the request body is the JSON
// projection of the RPC message, the response body the JSON projection of
// the RPC response. Failures are never swallowed: every RPC status passes
// through the error mapper and comes back as `{"error": ...}` with the
// matching HTTP status.

pub mod backend;
pub mod error;
pub mod routes;

use std::sync::Arc;

use backend::RosterBackend;

/// Configuration for the gateway listener.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

/// Bind the gateway and serve until `shutdown` resolves, then drain
/// in-flight requests.
pub async fn serve(
    config: &GatewayConfig,
    backend: Arc<dyn RosterBackend>,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("roster HTTP gateway listening on {}", addr);

    axum::serve(listener, routes::router(backend))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("roster HTTP gateway stopped");
    Ok(())
}
