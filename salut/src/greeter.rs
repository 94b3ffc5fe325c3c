//! # Greeter service
//!
//! Implementation of `helloworld.Greeter`. A single unary method that builds
//! a greeting from the caller's name. It is a total function: every request
//! succeeds, including one with an empty name.

use salut_proto::Greeter;
use salut_proto::helloworld::{HelloReply, HelloRequest};
use tonic::{Request, Response, Status};

/// Handler for the `helloworld.Greeter` service.
#[derive(Debug, Default)]
pub struct GreeterService;

#[tonic::async_trait]
impl Greeter for GreeterService {
    async fn say_hello(
        &self,
        request: Request<HelloRequest>,
    ) -> Result<Response<HelloReply>, Status> {
        let request = request.into_inner();
        tracing::info!(request = ?request, "received SayHello request");

        let reply = HelloReply {
            message: format!("Hello {}", request.name),
        };

        Ok(Response::new(reply))
    }
}
