//! # CLI
//!
//! This module defines the command-line interface of `salut` using `clap`.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "salut", version, about = "Minimal gRPC greeting/echo server")]
pub struct Cli {
    /// The port to serve gRPC traffic on
    #[arg(long, default_value_t = 443)]
    pub port: u16,
}
