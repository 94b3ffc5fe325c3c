//! # Salut
//!
//! A minimal gRPC server exposing a greeting service and an echo service,
//! alongside the standard gRPC health-checking and server reflection
//! services and a plain-HTTP liveness/readiness listener.
//!
//! The application lifecycle:
//!
//! 1. **Initialization**: parses command-line arguments using [`cli::Cli`] and sets up tracing.
//! 2. **Probes**: binds the HTTP probe listener and spawns it on a background task.
//! 3. **Serving**: binds the gRPC listener and blocks serving until failure.
//!
//! Any bind or serve failure is fatal: it is logged and the process exits
//! non-zero, leaving restarts to the orchestrator.

mod cli;
mod echo;
mod greeter;
mod logging;
mod probe;
mod server;

use clap::Parser;
use cli::Cli;
use std::net::SocketAddr;
use std::process;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "salut=info";

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // The probes get their own listener so orchestrators that cannot speak
    // gRPC can still observe the process.
    let probe_addr = SocketAddr::from(([0, 0, 0, 0], probe::PROBE_PORT));
    let probe_listener = match TcpListener::bind(probe_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(error = %err, addr = %probe_addr, "failed to bind probe listener");
            process::exit(1);
        }
    };
    tracing::info!(addr = %probe_addr, "probe server listening");
    tokio::spawn(probe::serve(probe_listener));

    let listener = match server::bind(args.port).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(error = %err, "failed to bind gRPC listener");
            process::exit(1);
        }
    };
    tracing::info!(port = args.port, "gRPC server listening");

    if let Err(err) = server::serve(listener).await {
        tracing::error!(error = %err, "gRPC server failed");
        process::exit(1);
    }
}
