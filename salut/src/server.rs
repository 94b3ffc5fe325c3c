//! # Server bootstrap
//!
//! Wires the Greeter and Echo handlers, the logging layer, the standard
//! gRPC health-checking service and the server reflection service into a
//! single tonic server, multiplexed over one listener.

use crate::echo::EchoService;
use crate::greeter::GreeterService;
use crate::logging::LoggingLayer;
use salut_proto::{EchoServer, FILE_DESCRIPTOR_SET, GreeterServer};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tonic_health::ServingStatus;

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("failed to bind '{addr}': {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build the reflection service: {0}")]
    Reflection(#[from] tonic_reflection::server::Error),

    #[error("transport failure: {0}")]
    Transport(#[from] tonic::transport::Error),
}

/// Binds the gRPC listener on the given port.
///
/// Binding up front means a taken port fails here, before anything is
/// spawned, rather than when the first connection arrives.
pub async fn bind(port: u16) -> Result<TcpListener, ServeError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })
}

/// Registers every service on the listener and serves until failure.
///
/// The health entry with the empty service name stands for the whole
/// process; it is marked SERVING once, before the accept loop starts, and
/// never changed afterwards.
pub async fn serve(listener: TcpListener) -> Result<(), ServeError> {
    let reflection_service = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()?;

    let (health_reporter, health_service) = tonic_health::server::health_reporter();
    health_reporter
        .set_service_status("", ServingStatus::Serving)
        .await;

    Server::builder()
        .layer(LoggingLayer)
        .add_service(GreeterServer::new(GreeterService))
        .add_service(EchoServer::new(EchoService))
        .add_service(health_service)
        .add_service(reflection_service)
        .serve_with_incoming(TcpListenerStream::new(listener))
        .await?;

    Ok(())
}

#[cfg(test)]
mod integration_test;
