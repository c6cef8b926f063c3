//! axum adapter for `envelope_core`.
//!
//! Exposes the envelope response type, the error type handlers return, the
//! server configuration and the router so integration tests and the binary
//! entrypoint can both access them.

pub mod config;
pub mod error;
pub mod response;
pub mod routes;
