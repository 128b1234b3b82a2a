//! ethrpc-http — HTTP JSON-RPC transport backed by `reqwest`.
//!
//! # Features
//! - One connection handle per transport instance, reused across calls
//! - Fixed request timeout (30 s by default)
//! - TLS certificate and hostname verification, always on
//! - Non-2xx statuses rejected before the body is interpreted

pub mod client;

pub use client::{HttpTransport, HttpTransportConfig};
