//! HTTP JSON-RPC transport backed by `reqwest`.
//!
//! One `reqwest::Client` per transport instance, created at construction and
//! reused for every call. Each call builds an immutable request from `&self`,
//! so no header or option state survives between calls. TLS certificate and
//! hostname verification comes from rustls and cannot be disabled.

use std::time::Duration;

use async_trait::async_trait;

use ethrpc_core::error::RpcError;
use ethrpc_core::request::{JsonRpcRequest, JsonRpcResponse};
use ethrpc_core::transport::RpcTransport;

/// Configuration for `HttpTransport`.
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Upper bound on one full request/response round trip.
    pub request_timeout: Duration,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP JSON-RPC transport.
pub struct HttpTransport {
    url: String,
    http: reqwest::Client,
}

impl HttpTransport {
    /// Create a new transport for the given JSON-RPC endpoint URL.
    pub fn new(url: impl Into<String>, config: HttpTransportConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("failed to build reqwest client");

        Self {
            url: url.into(),
            http,
        }
    }

    /// Create with default configuration.
    pub fn default_for(url: impl Into<String>) -> Self {
        Self::new(url, HttpTransportConfig::default())
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, RpcError> {
        let resp = self
            .http
            .post(&self.url)
            .json(&req)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(url = %self.url, method = %req.method, error = %e, "transport error");
                RpcError::Http(e.to_string())
            })?;

        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| {
            tracing::error!(url = %self.url, method = %req.method, error = %e, "failed to read response body");
            RpcError::Http(e.to_string())
        })?;

        match interpret_response(status, &body) {
            Ok(envelope) => Ok(envelope),
            Err(e @ RpcError::Http(_)) => {
                tracing::error!(url = %self.url, method = %req.method, status, "non-success HTTP status from node");
                Err(e)
            }
            Err(e) => {
                tracing::warn!(url = %self.url, method = %req.method, error = %e, "response body is not a JSON-RPC envelope");
                Err(e)
            }
        }
    }

    fn url(&self) -> &str {
        &self.url
    }
}

/// Classify one HTTP exchange into an envelope or a failure.
///
/// The status gate comes first: a non-2xx response fails even when the body
/// happens to be a well-formed success envelope. The body is only decoded
/// for 2xx responses.
fn interpret_response(status: u16, body: &str) -> Result<JsonRpcResponse, RpcError> {
    if !(200..300).contains(&status) {
        return Err(RpcError::Http(format!("HTTP {status}: {body}")));
    }
    JsonRpcResponse::from_json(body).map_err(RpcError::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const SUCCESS_BODY: &str = r#"{"jsonrpc":"2.0","id":1,"result":"0x5d5f"}"#;

    #[test]
    fn non_success_status_rejects_valid_body() {
        let err = interpret_response(500, SUCCESS_BODY).unwrap_err();
        match err {
            RpcError::Http(msg) => {
                assert!(msg.contains("500"));
                assert!(msg.contains("0x5d5f"));
            }
            other => panic!("expected HTTP error, got {other:?}"),
        }
    }

    #[test]
    fn redirect_status_is_rejected() {
        assert!(interpret_response(301, SUCCESS_BODY).is_err());
    }

    #[test]
    fn success_status_decodes_envelope() {
        let envelope = interpret_response(200, SUCCESS_BODY).unwrap();
        assert_eq!(envelope.result, Some(Value::String("0x5d5f".into())));
    }

    #[test]
    fn garbage_body_is_a_parse_failure() {
        let err = interpret_response(200, "<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, RpcError::Parse(_)));
    }

    #[tokio::test]
    async fn posts_envelope_and_decodes_result() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // One canned HTTP exchange; hands back what the client sent.
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                received.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&received);
                if n == 0 || (text.contains("\r\n\r\n") && text.trim_end().ends_with('}')) {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                SUCCESS_BODY.len(),
                SUCCESS_BODY
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            String::from_utf8_lossy(&received).into_owned()
        });

        let transport = HttpTransport::default_for(format!("http://{addr}"));
        let envelope = transport
            .send(JsonRpcRequest::new(1, "eth_blockNumber", vec![]))
            .await
            .unwrap();
        assert_eq!(envelope.result, Some(Value::String("0x5d5f".into())));

        let seen = server.await.unwrap();
        assert!(seen
            .to_ascii_lowercase()
            .contains("content-type: application/json"));
        assert!(seen.contains(r#""method":"eth_blockNumber""#));
        assert!(seen.contains(r#""jsonrpc":"2.0""#));
    }

    #[tokio::test]
    async fn connection_refused_is_a_transport_failure() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = HttpTransport::default_for(format!("http://{addr}"));
        let err = transport
            .send(JsonRpcRequest::new(1, "eth_blockNumber", vec![]))
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }
}
