//! # Logging layer
//!
//! A tower middleware installed on the gRPC server, wrapping every RPC
//! dispatch. It logs the target service and method before handing the
//! request to the routed service, and returns the inner outcome verbatim:
//! no retry, no short-circuit, no mutation.
//!
//! This is the single cross-cutting policy point of the server; auth, rate
//! limiting or tracing propagation would hook in here.

use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Logs the gRPC method of every request passing through the server.
#[derive(Debug, Clone, Default)]
pub struct LoggingLayer;

impl<S> Layer<S> for LoggingLayer {
    type Service = LoggingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        LoggingService { inner }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingService<S> {
    inner: S,
}

impl<S, ReqBody> Service<http::Request<ReqBody>> for LoggingService<S>
where
    S: Service<http::Request<ReqBody>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: http::Request<ReqBody>) -> Self::Future {
        let path = req.uri().path();
        tracing::info!(
            service = extract_service_name(path),
            method = extract_method_name(path),
            "received request"
        );

        self.inner.call(req)
    }
}

/// Extracts the service name from a gRPC method path (`/package.Service/Method`).
fn extract_service_name(path: &str) -> &str {
    path.trim_start_matches('/').split('/').next().unwrap_or("unknown")
}

/// Extracts the method name from a gRPC method path.
fn extract_method_name(path: &str) -> &str {
    path.trim_start_matches('/').split('/').nth(1).unwrap_or("unknown")
}
