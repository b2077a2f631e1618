//! Payload pipeline, session handshake and run controller for benchmarking
//! the throughput of a persistent, message-framed connection.
//!
//! This crate is runtime-agnostic. It talks to the wire only through
//! [`transport::FrameTransport`]; the tokio/axum and tokio-tungstenite
//! bindings live in the `wsbench-tokio-producer` and
//! `wsbench-tokio-consumer` extension crates.

mod bench_error;
pub mod config;
pub mod constants;
pub mod pipeline;
pub mod run;
pub mod session;
pub mod transport;

pub use bench_error::BenchError;
