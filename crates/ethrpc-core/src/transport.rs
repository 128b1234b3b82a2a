//! The `RpcTransport` trait — the seam between the typed client and I/O.

use async_trait::async_trait;

use crate::error::RpcError;
use crate::request::{JsonRpcRequest, JsonRpcResponse};

/// The central async trait every RPC transport must implement.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` for use across Tokio tasks.
///
/// # Object Safety
/// The trait is object-safe and can be stored as `Arc<dyn RpcTransport>`,
/// which is also how tests substitute a canned transport for real I/O.
#[async_trait]
pub trait RpcTransport: Send + Sync + 'static {
    /// Send a single JSON-RPC request and return the decoded envelope.
    ///
    /// One request maps to exactly one network exchange: no retries, no
    /// batching, no caching at this layer.
    async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, RpcError>;

    /// The endpoint this transport talks to (URL or name).
    fn url(&self) -> &str;
}
