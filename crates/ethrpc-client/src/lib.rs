//! ethrpc-client — typed Ethereum JSON-RPC method surface.
//!
//! # Quick start
//! ```rust,no_run
//! use ethrpc_client::EthClient;
//!
//! # async fn run() -> Result<(), ethrpc_core::RpcError> {
//! let client = EthClient::connect("https://cloudflare-eth.com");
//! let head = client.block_number().await?;
//! println!("head block: {head}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;

pub use client::EthClient;
pub use config::{Config, ConfigError};
