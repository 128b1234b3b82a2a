//! ethrpc-core — foundation traits and types for ethrpc.
//!
//! # Overview
//!
//! ethrpc is a typed JSON-RPC 2.0 client for Ethereum-compatible nodes.
//! The core crate defines:
//!
//! - [`RpcTransport`] — the central async trait every transport implements
//! - [`JsonRpcRequest`] / [`JsonRpcResponse`] — wire types and envelope codec
//! - [`RpcError`] — structured failure taxonomy
//! - [`projection`] module — result-to-string normalization

pub mod error;
pub mod projection;
pub mod request;
pub mod transport;

pub use error::RpcError;
pub use request::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, RpcId, RpcParam};
pub use transport::RpcTransport;
