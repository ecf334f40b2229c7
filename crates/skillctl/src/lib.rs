//! Client library for the skill-router server.
//!
//! Exposed as a library so the integration tests can exercise the HTTP
//! client against a stub server; the `skillctl` binary is the main consumer.

pub mod client;
pub mod render;
