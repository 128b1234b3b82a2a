//! JSON-RPC 2.0 wire types and envelope codec.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// JSON-RPC request ID — string, number, or null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(u64),
    String(String),
    Null,
}

impl RpcId {
    pub fn number(n: u64) -> Self {
        Self::Number(n)
    }
}

impl std::fmt::Display for RpcId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Null => write!(f, "null"),
        }
    }
}

/// A single JSON-RPC parameter value.
pub type RpcParam = Value;

/// A JSON-RPC 2.0 request.
///
/// Built fresh for each call and dropped once the response arrives; nothing
/// is persisted or correlated across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: Vec<RpcParam>,
    pub id: RpcId,
}

impl JsonRpcRequest {
    /// Create a new JSON-RPC 2.0 request.
    pub fn new(id: u64, method: impl Into<String>, params: Vec<RpcParam>) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            method: method.into(),
            params,
            id: RpcId::Number(id),
        }
    }

    /// Serialize into the exact wire form sent to the node.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// A JSON-RPC 2.0 error object.
///
/// Nodes are inconsistent about populating this: `code` and `message` are
/// both tolerated as absent so a sloppy error envelope still classifies as
/// a node error rather than failing to decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    /// The node's message, or a fixed fallback when it sent none.
    pub fn message_or_unknown(&self) -> &str {
        self.message.as_deref().unwrap_or("Unknown RPC error")
    }
}

impl std::fmt::Display for JsonRpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "JSON-RPC error {}: {}", code, self.message_or_unknown()),
            None => write!(f, "JSON-RPC error: {}", self.message_or_unknown()),
        }
    }
}

/// A JSON-RPC 2.0 response.
///
/// Every field is optional at the decoding layer: classification of the
/// envelope (success / node error / protocol violation) happens after the
/// decode, not during it, so `{}` parses cleanly instead of erroring.
///
/// `result` distinguishes absent from present-but-null: `{"result":null}`
/// is a successful call whose result is JSON null (e.g. a receipt lookup
/// for an unknown transaction), while `{}` carries no result at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsonrpc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RpcId>,
    #[serde(
        default,
        deserialize_with = "value_if_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// Maps a present `null` to `Some(Value::Null)`; absence stays `None` via
/// `#[serde(default)]`.
fn value_if_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl JsonRpcResponse {
    /// Decode a raw response body into an envelope.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Returns `true` if this is a successful response (has result, no error).
    pub fn is_ok(&self) -> bool {
        self.error.is_none() && self.result.is_some()
    }

    /// Split the envelope into its three cases: node error, result, neither.
    ///
    /// `error` wins when a broken node sends both keys. `Ok(None)` means the
    /// envelope violated the protocol by carrying neither key.
    pub fn into_result(self) -> Result<Option<Value>, JsonRpcError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serialization() {
        let req = JsonRpcRequest::new(1, "eth_blockNumber", vec![]);
        let json = req.to_json().unwrap();
        assert!(json.contains("\"jsonrpc\":\"2.0\""));
        assert!(json.contains("\"method\":\"eth_blockNumber\""));
        assert!(json.contains("\"params\":[]"));
        assert!(json.contains("\"id\":1"));
    }

    #[test]
    fn encoded_request_round_trips() {
        let params = vec![json!("0xabc"), json!("pending")];
        let req = JsonRpcRequest::new(1, "eth_getTransactionCount", params.clone());

        let parsed: Value = serde_json::from_str(&req.to_json().unwrap()).unwrap();
        assert_eq!(parsed["method"], "eth_getTransactionCount");
        assert_eq!(parsed["params"], Value::Array(params));
    }

    #[test]
    fn response_into_result_ok() {
        let resp = JsonRpcResponse::from_json(r#"{"jsonrpc":"2.0","id":1,"result":"0x10"}"#)
            .unwrap();
        assert!(resp.is_ok());
        let val = resp.into_result().unwrap();
        assert_eq!(val, Some(Value::String("0x10".into())));
    }

    #[test]
    fn response_into_result_error() {
        let resp = JsonRpcResponse::from_json(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32000,"message":"execution reverted"}}"#,
        )
        .unwrap();
        assert!(!resp.is_ok());
        let err = resp.into_result().unwrap_err();
        assert_eq!(err.code, Some(-32000));
        assert_eq!(err.message.as_deref(), Some("execution reverted"));
    }

    #[test]
    fn error_message_falls_back_when_absent() {
        let resp = JsonRpcResponse::from_json(r#"{"jsonrpc":"2.0","id":1,"error":{}}"#).unwrap();
        let err = resp.into_result().unwrap_err();
        assert_eq!(err.message_or_unknown(), "Unknown RPC error");
    }

    #[test]
    fn null_result_is_present() {
        let resp = JsonRpcResponse::from_json(r#"{"jsonrpc":"2.0","id":1,"result":null}"#).unwrap();
        assert!(resp.is_ok());
        assert_eq!(resp.into_result().unwrap(), Some(Value::Null));
    }

    #[test]
    fn empty_envelope_carries_neither_key() {
        let resp = JsonRpcResponse::from_json("{}").unwrap();
        assert!(!resp.is_ok());
        assert_eq!(resp.into_result().unwrap(), None);
    }

    #[test]
    fn error_wins_over_result() {
        let resp = JsonRpcResponse::from_json(
            r#"{"jsonrpc":"2.0","id":1,"result":"0x1","error":{"message":"boom"}}"#,
        )
        .unwrap();
        assert!(resp.into_result().is_err());
    }

    #[test]
    fn garbage_body_fails_to_decode() {
        assert!(JsonRpcResponse::from_json("not json at all").is_err());
    }

    #[test]
    fn string_response_id_is_tolerated() {
        let resp =
            JsonRpcResponse::from_json(r#"{"jsonrpc":"2.0","id":"abc","result":"0x1"}"#).unwrap();
        assert_eq!(resp.id, Some(RpcId::String("abc".into())));
    }
}
