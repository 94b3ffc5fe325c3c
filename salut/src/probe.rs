//! # Probe endpoints
//!
//! Plain-HTTP liveness/readiness endpoints for infrastructure that cannot
//! speak the gRPC wire format (e.g. Kubernetes probes). Both routes answer
//! unconditionally: the probe asserts that the process is up, nothing more.

use axum::{Router, routing::get};
use tokio::net::TcpListener;

/// Port the probe server listens on.
pub const PROBE_PORT: u16 = 8080;

/// Builds the probe router with its two fixed routes.
pub fn router() -> Router {
    Router::new()
        .route("/livenez", get(probe))
        .route("/readinez", get(probe))
}

/// Probe handler, shared by both routes.
async fn probe() -> &'static str {
    "ok"
}

/// Serves the probe router until failure.
///
/// A probe listener that stops answering looks healthier to an orchestrator
/// than a crashed process it can restart, so any serve failure terminates
/// the whole process.
pub async fn serve(listener: TcpListener) {
    if let Err(err) = axum::serve(listener, router()).await {
        tracing::error!(error = %err, "probe server failed");
        std::process::exit(1);
    }
}
