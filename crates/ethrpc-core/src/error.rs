//! Failure taxonomy for RPC calls.

use thiserror::Error;

/// Errors that can occur while executing a JSON-RPC call.
///
/// One variant per failure class in the execution pipeline: transport,
/// envelope decoding, node-reported error, protocol violation. Callers that
/// only care whether a value came back can collapse any of these with
/// [`Result::ok`].
#[derive(Debug, Error)]
pub enum RpcError {
    /// HTTP request failed (connection refused, timeout, non-2xx status).
    #[error("HTTP error: {0}")]
    Http(String),

    /// Response body was not valid JSON.
    #[error("invalid JSON-RPC response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The node returned a JSON-RPC error object.
    #[error("RPC method '{method}' failed: {message}")]
    Node {
        method: String,
        code: Option<i64>,
        message: String,
    },

    /// The envelope carried neither `error` nor `result`.
    #[error("RPC method '{method}' returned no 'result' field")]
    MissingResult { method: String },
}

impl RpcError {
    /// Returns `true` if the failure happened before an envelope was decoded.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// Returns `true` if this is an error reported by the node itself.
    pub fn is_node_error(&self) -> bool {
        matches!(self, Self::Node { .. })
    }
}
