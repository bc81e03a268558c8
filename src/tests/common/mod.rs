//! Common test utilities and mock implementations
//!
//! This module provides the mocks and fixtures shared by unit and
//! integration tests.


use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::{
    domain::rpc::RpcRequest,
    infrastructure::adapters::NodeRpc,
    shared::error::AppResult,
};

use super::TestResult;

/// HTTP response written verbatim by [`MockHttpServer`]
#[derive(Debug, Clone)]
pub struct CannedResponse {
    status: u16,
    reason: String,
    content_type: &'static str,
    body: String,
    delay: Option<Duration>,
}

impl CannedResponse {
    pub fn json(status: u16, reason: &str, body: Value) -> Self {
        Self {
            status,
            reason: reason.to_string(),
            content_type: "application/json",
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn text(status: u16, reason: &str, body: &str) -> Self {
        Self {
            status,
            reason: reason.to_string(),
            content_type: "text/plain",
            body: body.to_string(),
            delay: None,
        }
    }

    /// Successful node reply
    pub fn result(result: Value) -> Self {
        Self::json(200, "OK", json!({"result": result, "error": null, "id": "web"}))
    }

    /// Node reply carrying a JSON-RPC error
    pub fn rpc_error(code: i64, message: &str) -> Self {
        Self::json(
            200,
            "OK",
            json!({"result": null, "error": {"code": code, "message": message}, "id": "web"}),
        )
    }

    /// Hold the response back for `delay`
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    fn to_bytes(&self) -> Vec<u8> {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status,
            self.reason,
            self.content_type,
            self.body.len(),
            self.body
        )
        .into_bytes()
    }
}

/// Request as seen by [`MockHttpServer`]
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    /// Header lookup, case-insensitive
    pub fn header(&self, name: &str) -> Option<String> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.clone())
    }

    /// Request target, query string included
    pub fn path(&self) -> String {
        self.request_line
            .split_whitespace()
            .nth(1)
            .unwrap_or_default()
            .to_string()
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }
}

type Responder = Arc<dyn Fn(&CapturedRequest) -> CannedResponse + Send + Sync>;

/// Minimal HTTP/1.1 server on an ephemeral port that answers every
/// connection with a canned response and records what it received
pub struct MockHttpServer {
    port: u16,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    task: JoinHandle<()>,
}

impl MockHttpServer {
    /// Answer every request with the same response
    pub async fn start(response: CannedResponse) -> TestResult<Self> {
        Self::start_with(move |_| response.clone()).await
    }

    /// Pick the response per request
    pub async fn start_with<F>(responder: F) -> TestResult<Self>
    where
        F: Fn(&CapturedRequest) -> CannedResponse + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let port = listener.local_addr()?.port();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let responder: Responder = Arc::new(responder);

        let captured = requests.clone();
        let task = tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let responder = responder.clone();
                let captured = captured.clone();
                tokio::spawn(async move {
                    let _ = Self::serve(stream, responder, captured).await;
                });
            }
        });

        Ok(Self {
            port,
            requests,
            task,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Requests received so far, in arrival order
    pub async fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().await.clone()
    }

    async fn serve(
        mut stream: TcpStream,
        responder: Responder,
        captured: Arc<Mutex<Vec<CapturedRequest>>>,
    ) -> std::io::Result<()> {
        let request = Self::read_request(&mut stream).await?;
        let response = responder(&request);
        captured.lock().await.push(request);

        if let Some(delay) = response.delay {
            tokio::time::sleep(delay).await;
        }

        stream.write_all(&response.to_bytes()).await?;
        stream.shutdown().await
    }

    async fn read_request(stream: &mut TcpStream) -> std::io::Result<CapturedRequest> {
        let mut reader = BufReader::new(stream);

        let mut request_line = String::new();
        reader.read_line(&mut request_line).await?;

        let mut headers = Vec::new();
        loop {
            let mut line = String::new();
            let read = reader.read_line(&mut line).await?;
            if read == 0 || line == "\r\n" {
                break;
            }
            if let Some((key, value)) = line.trim_end().split_once(':') {
                headers.push((key.trim().to_ascii_lowercase(), value.trim().to_string()));
            }
        }

        let length = headers
            .iter()
            .find(|(key, _)| key == "content-length")
            .and_then(|(_, value)| value.parse::<usize>().ok())
            .unwrap_or(0);
        let mut body = vec![0; length];
        reader.read_exact(&mut body).await?;

        Ok(CapturedRequest {
            request_line: request_line.trim_end().to_string(),
            headers,
            body,
        })
    }
}

impl Drop for MockHttpServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// In-memory node with a fixed reply
pub struct StubNode {
    reply: AppResult<Value>,
    calls: std::sync::Mutex<Vec<RpcRequest>>,
}

impl StubNode {
    pub fn answering(result: Value) -> Self {
        Self {
            reply: Ok(result),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: crate::shared::error::AppError) -> Self {
        Self {
            reply: Err(error),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Requests that reached the node
    pub fn calls(&self) -> Vec<RpcRequest> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl NodeRpc for StubNode {
    async fn call(&self, request: &RpcRequest) -> AppResult<Value> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request.clone());
        }
        self.reply.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_response_wire_format() {
        let bytes = CannedResponse::text(401, "Unauthorized", "").to_bytes();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "HTTP/1.1 401 Unauthorized\r\nContent-Type: text/plain\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
        );
    }

    #[test]
    fn test_captured_request_helpers() {
        let request = CapturedRequest {
            request_line: "GET /address-balances?minConf=6 HTTP/1.1".to_string(),
            headers: vec![("content-type".to_string(), "text/plain".to_string())],
            body: br#"{"a":1}"#.to_vec(),
        };

        assert_eq!(request.path(), "/address-balances?minConf=6");
        assert_eq!(request.header("Content-Type").as_deref(), Some("text/plain"));
        assert_eq!(request.json(), json!({"a": 1}));
    }

    #[tokio::test]
    async fn test_stub_node_records_calls() {
        let node = StubNode::answering(json!(3));
        let value = node.call(&RpcRequest::without_params("gettotalbalances")).await.unwrap();

        assert_eq!(value, json!(3));
        assert_eq!(node.calls().len(), 1);
    }
}
