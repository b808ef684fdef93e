// src/testutil.rs
// =============================================================================
// Minimal HTTP stub server for tests.
//
// Binds an ephemeral localhost port and answers each connection from a
// handler closure keyed on (method, request target). Just enough HTTP/1.1
// for reqwest: a status line, content-length, connection: close, and the
// body (omitted for HEAD). No keep-alive, no chunked encoding.
// =============================================================================

use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A canned response returned by a stub handler.
pub struct StubResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub headers: Vec<(&'static str, String)>,
}

impl StubResponse {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.as_bytes().to_vec(),
            headers: Vec::new(),
        }
    }

    pub fn json(status: u16, body: String) -> Self {
        Self {
            status,
            body: body.into_bytes(),
            headers: vec![("content-type", "application/json".to_string())],
        }
    }

    pub fn bytes(status: u16, body: Vec<u8>) -> Self {
        Self {
            status,
            body,
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }
}

/// Spawns a stub server and returns its base URL (`http://127.0.0.1:port`).
///
/// The handler receives the request method and the raw request target
/// (path plus any query string). The server task lives until the test's
/// runtime shuts down.
pub async fn spawn_stub<H>(handler: H) -> String
where
    H: Fn(&str, &str) -> StubResponse + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub server");
    let addr = listener.local_addr().expect("stub server address");
    serve(listener, Arc::new(handler));
    format!("http://{addr}")
}

/// Serves an already-bound listener; useful when the handler needs to know
/// the server's own address (e.g. to embed URLs in response bodies).
pub fn serve<H>(listener: TcpListener, handler: Arc<H>)
where
    H: Fn(&str, &str) -> StubResponse + Send + Sync + 'static,
{
    tokio::spawn(async move {
        loop {
            let Ok((socket, _)) = listener.accept().await else {
                break;
            };
            let handler = Arc::clone(&handler);
            tokio::spawn(handle_connection(socket, handler));
        }
    });
}

async fn handle_connection<H>(mut socket: tokio::net::TcpStream, handler: Arc<H>)
where
    H: Fn(&str, &str) -> StubResponse + Send + Sync,
{
    // Read until the end of the request head; bodies are never expected.
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
        }
    }

    let head = String::from_utf8_lossy(&buf);
    let mut request_line = head.lines().next().unwrap_or("").split_whitespace();
    let method = request_line.next().unwrap_or("").to_string();
    let target = request_line.next().unwrap_or("").to_string();

    let response = handler(method.as_str(), target.as_str());
    let reason = match response.status {
        200 => "OK",
        204 => "No Content",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        _ => "Stub",
    };

    let body: &[u8] = if method == "HEAD" { &[] } else { &response.body };
    let mut payload = format!("HTTP/1.1 {} {}\r\n", response.status, reason).into_bytes();
    for (name, value) in &response.headers {
        payload.extend_from_slice(format!("{name}: {value}\r\n").as_bytes());
    }
    payload.extend_from_slice(
        format!("content-length: {}\r\nconnection: close\r\n\r\n", body.len()).as_bytes(),
    );
    payload.extend_from_slice(body);

    let _ = socket.write_all(&payload).await;
    let _ = socket.shutdown().await;
}
