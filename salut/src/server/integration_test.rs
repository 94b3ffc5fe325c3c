use super::{ServeError, bind, serve};
use salut_proto::echo::EchoRequest;
use salut_proto::echo::echo_client::EchoClient;
use salut_proto::helloworld::HelloRequest;
use salut_proto::helloworld::greeter_client::GreeterClient;
use tonic_health::pb::HealthCheckRequest;
use tonic_health::pb::health_check_response::ServingStatus;
use tonic_health::pb::health_client::HealthClient;
use tonic_reflection::pb::v1::ServerReflectionRequest;
use tonic_reflection::pb::v1::server_reflection_client::ServerReflectionClient;
use tonic_reflection::pb::v1::server_reflection_request::MessageRequest;
use tonic_reflection::pb::v1::server_reflection_response::MessageResponse;

async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("0.0.0.0:0").await.unwrap();

    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        serve(listener).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_say_hello() {
    let url = spawn_server().await;

    let mut client = GreeterClient::connect(url).await.unwrap();

    let response = client
        .say_hello(HelloRequest {
            name: "Victor".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.into_inner().message, "Hello Victor");
}

#[tokio::test]
async fn test_say_hello_empty_name() {
    let url = spawn_server().await;

    let mut client = GreeterClient::connect(url).await.unwrap();

    let response = client
        .say_hello(HelloRequest { name: String::new() })
        .await
        .unwrap();

    assert_eq!(response.into_inner().message, "Hello ");
}

#[tokio::test]
async fn test_unary_echo_round_trip() {
    let url = spawn_server().await;

    let mut client = EchoClient::connect(url).await.unwrap();

    for message in ["hello", "", "salut ☀️ \0\n{\"not\": \"json\"}"] {
        let response = client
            .unary_echo(EchoRequest {
                message: message.to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.into_inner().message, message);
    }
}

#[tokio::test]
async fn test_health_reports_serving() {
    let url = spawn_server().await;

    // The vendored tonic-health client doesn't generate a `connect` helper,
    // so build the channel the same way that helper would.
    let channel = tonic::transport::Endpoint::new(url)
        .unwrap()
        .connect()
        .await
        .unwrap();
    let mut client = HealthClient::new(channel);

    // The empty service name queries the whole-process status.
    let response = client
        .check(HealthCheckRequest {
            service: String::new(),
        })
        .await
        .unwrap();

    assert_eq!(response.into_inner().status(), ServingStatus::Serving);
}

#[tokio::test]
async fn test_reflection_lists_services() {
    let url = spawn_server().await;

    // The vendored tonic-reflection client doesn't generate a `connect` helper,
    // so build the channel the same way that helper would.
    let channel = tonic::transport::Endpoint::new(url)
        .unwrap()
        .connect()
        .await
        .unwrap();
    let mut client = ServerReflectionClient::new(channel);

    let request = ServerReflectionRequest {
        host: String::new(),
        message_request: Some(MessageRequest::ListServices(String::new())),
    };

    let mut stream = client
        .server_reflection_info(tokio_stream::once(request))
        .await
        .unwrap()
        .into_inner();

    let response = stream.message().await.unwrap().unwrap();

    let Some(MessageResponse::ListServicesResponse(services)) = response.message_response else {
        panic!("Expected a ListServicesResponse");
    };

    let names: Vec<_> = services.service.into_iter().map(|s| s.name).collect();
    assert!(names.contains(&"helloworld.Greeter".to_string()));
    assert!(names.contains(&"echo.Echo".to_string()));
}

#[tokio::test]
async fn test_bind_fails_on_taken_port() {
    let first = bind(0).await.unwrap();
    let port = first.local_addr().unwrap().port();

    let second = bind(port).await;

    assert!(matches!(second, Err(ServeError::Bind { .. })));
}
