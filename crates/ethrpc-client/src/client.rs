//! Typed client for Ethereum JSON-RPC methods.
//!
//! Each public method is a thin binding: it assembles the positional params
//! one `eth_*`/`net_*` method expects, runs the shared execution path, and
//! returns the result in the shape callers want — plain `String` for
//! scalar-returning methods, raw [`Value`] for blocks, transactions,
//! receipts and logs.

use std::sync::Arc;

use serde_json::{json, Value};

use ethrpc_core::error::RpcError;
use ethrpc_core::projection;
use ethrpc_core::request::JsonRpcRequest;
use ethrpc_core::transport::RpcTransport;
use ethrpc_http::HttpTransport;

/// Fixed request id. Calls are unary and sequential on one transport, so
/// responses never need correlating back to requests.
const REQUEST_ID: u64 = 1;

/// Client for an Ethereum-compatible JSON-RPC node.
pub struct EthClient {
    transport: Arc<dyn RpcTransport>,
}

impl EthClient {
    /// Create a client over an existing transport.
    pub fn new(transport: Arc<dyn RpcTransport>) -> Self {
        Self { transport }
    }

    /// Create a client over a default-configured [`HttpTransport`].
    pub fn connect(url: impl Into<String>) -> Self {
        Self::new(Arc::new(HttpTransport::default_for(url)))
    }

    /// The endpoint this client talks to.
    pub fn url(&self) -> &str {
        self.transport.url()
    }

    /// Call an arbitrary method and extract the `result` value.
    ///
    /// This is the shared execution path behind every typed method: encode
    /// the request, send it, classify the envelope. The envelope's `error`
    /// key wins over `result` if a broken node sends both; an error-free
    /// envelope without `result` is a protocol violation surfaced as
    /// [`RpcError::MissingResult`].
    pub async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError> {
        let req = JsonRpcRequest::new(REQUEST_ID, method, params);
        let resp = self.transport.send(req).await?;

        match resp.into_result() {
            Err(err) => {
                let message = err.message_or_unknown().to_owned();
                tracing::warn!(code = ?err.code, "RPC method '{method}' failed: {message}");
                Err(RpcError::Node {
                    method: method.to_owned(),
                    code: err.code,
                    message,
                })
            }
            Ok(Some(result)) => Ok(result),
            Ok(None) => {
                tracing::warn!("RPC method '{method}' returned no 'result' field.");
                Err(RpcError::MissingResult {
                    method: method.to_owned(),
                })
            }
        }
    }

    /// [`call`](Self::call), with the result normalized to text.
    async fn call_string(&self, method: &str, params: Vec<Value>) -> Result<String, RpcError> {
        Ok(projection::stringify(&self.call(method, params).await?))
    }

    /// Current head block number (`eth_blockNumber`), as a hex quantity.
    pub async fn block_number(&self) -> Result<String, RpcError> {
        self.call_string("eth_blockNumber", vec![]).await
    }

    /// Block contents by number (`eth_getBlockByNumber`).
    ///
    /// `block_number` is a hex quantity or a block tag. When
    /// `full_transactions` is set, the block embeds full transaction objects
    /// instead of bare hashes.
    pub async fn get_block_by_number(
        &self,
        block_number: &str,
        full_transactions: bool,
    ) -> Result<Value, RpcError> {
        self.call(
            "eth_getBlockByNumber",
            vec![json!(block_number), json!(full_transactions)],
        )
        .await
    }

    /// Block contents by hash (`eth_getBlockByHash`).
    pub async fn get_block_by_hash(
        &self,
        block_hash: &str,
        full_transactions: bool,
    ) -> Result<Value, RpcError> {
        self.call(
            "eth_getBlockByHash",
            vec![json!(block_hash), json!(full_transactions)],
        )
        .await
    }

    /// Transaction by hash (`eth_getTransactionByHash`); JSON null when the
    /// node does not know the transaction.
    pub async fn get_transaction_by_hash(&self, tx_hash: &str) -> Result<Value, RpcError> {
        self.call("eth_getTransactionByHash", vec![json!(tx_hash)])
            .await
    }

    /// Gas estimate (`eth_estimateGas`) for a plain value transfer.
    pub async fn estimate_gas(
        &self,
        from: &str,
        to: &str,
        value: &str,
    ) -> Result<String, RpcError> {
        let call = json!({
            "from": from,
            "to": to,
            "value": value,
        });
        self.call_string("eth_estimateGas", vec![call]).await
    }

    /// Current gas price (`eth_gasPrice`), hex-encoded wei.
    pub async fn gas_price(&self) -> Result<String, RpcError> {
        self.call_string("eth_gasPrice", vec![]).await
    }

    /// Broadcast a signed transaction (`eth_sendRawTransaction`); returns
    /// the transaction hash.
    pub async fn send_raw_transaction(&self, raw_tx: &str) -> Result<String, RpcError> {
        self.call_string("eth_sendRawTransaction", vec![json!(raw_tx)])
            .await
    }

    /// Logs matching a filter (`eth_getLogs`).
    ///
    /// Accepts one filter object or an array of them; a single object is
    /// wrapped so the wire params are always an array.
    pub async fn get_logs(&self, filter: Value) -> Result<Value, RpcError> {
        let params = match filter {
            Value::Array(filters) => filters,
            single => vec![single],
        };
        self.call("eth_getLogs", params).await
    }

    /// Receipt for a mined transaction (`eth_getTransactionReceipt`); JSON
    /// null while the transaction is pending or unknown.
    pub async fn get_transaction_receipt(&self, tx_hash: &str) -> Result<Value, RpcError> {
        self.call("eth_getTransactionReceipt", vec![json!(tx_hash)])
            .await
    }

    /// Nonce for an address (`eth_getTransactionCount`) at the given block
    /// tag; `None` means `"latest"`.
    pub async fn get_transaction_count(
        &self,
        address: &str,
        block_tag: Option<&str>,
    ) -> Result<String, RpcError> {
        let tag = block_tag.unwrap_or("latest");
        self.call_string(
            "eth_getTransactionCount",
            vec![json!(address), json!(tag)],
        )
        .await
    }

    /// Chain id (`eth_chainId`), as a hex quantity.
    pub async fn chain_id(&self) -> Result<String, RpcError> {
        self.call_string("eth_chainId", vec![]).await
    }

    /// Network id (`net_version`), a decimal string.
    pub async fn net_version(&self) -> Result<String, RpcError> {
        self.call_string("net_version", vec![]).await
    }

    /// Sync status (`eth_syncing`): `"false"` when idle, otherwise a
    /// compact JSON object with sync progress.
    pub async fn syncing_status(&self) -> Result<String, RpcError> {
        self.call_string("eth_syncing", vec![]).await
    }
}
