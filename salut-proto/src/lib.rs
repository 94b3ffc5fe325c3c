//! # Salut Proto
//!
//! Protobuf definitions and generated bindings for the `salut` server:
//! the `helloworld.Greeter` and `echo.Echo` services, plus the encoded
//! file descriptor set consumed by the server reflection service.

pub mod helloworld {
    include!(concat!(env!("OUT_DIR"), "/helloworld.rs"));
}

pub mod echo {
    include!(concat!(env!("OUT_DIR"), "/echo.rs"));
}

pub use echo::echo_server::{Echo, EchoServer};
pub use helloworld::greeter_server::{Greeter, GreeterServer};

pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("descriptors");
