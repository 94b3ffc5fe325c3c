//! # Echo service
//!
//! Implementation of `echo.Echo`. The unary method returns the request
//! message unmodified, whatever its content.

use salut_proto::Echo;
use salut_proto::echo::{EchoRequest, EchoResponse};
use tonic::{Request, Response, Status};

/// Handler for the `echo.Echo` service.
#[derive(Debug, Default)]
pub struct EchoService;

#[tonic::async_trait]
impl Echo for EchoService {
    async fn unary_echo(
        &self,
        request: Request<EchoRequest>,
    ) -> Result<Response<EchoResponse>, Status> {
        let request = request.into_inner();
        tracing::info!(request = ?request, "received UnaryEcho request");

        let response = EchoResponse {
            message: request.message,
        };

        Ok(Response::new(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn echo(message: &str) -> String {
        let request = Request::new(EchoRequest {
            message: message.to_string(),
        });

        EchoService
            .unary_echo(request)
            .await
            .unwrap()
            .into_inner()
            .message
    }

    #[tokio::test]
    async fn test_echoes_message() {
        assert_eq!(echo("hello").await, "hello");
    }

    #[tokio::test]
    async fn test_echoes_empty_message() {
        assert_eq!(echo("").await, "");
    }

    #[tokio::test]
    async fn test_echoes_arbitrary_content() {
        let message = "salut ☀️ \0\n\t{\"not\": \"json\"}";
        assert_eq!(echo(message).await, message);
    }
}
