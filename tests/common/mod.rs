//! Shared test utilities.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use rust_decimal_macros::dec;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use tokenscope::api::TradeSource;
use tokenscope::models::Trade;
use tokenscope::{Result, TokenScopeError};

/// Builds a trade whose hash identifies it in assertions.
pub fn trade(hash: &str, is_buy: bool) -> Trade {
    Trade {
        hash: hash.to_string(),
        timestamp: 1_700_000_000,
        block_number: 6_712_345,
        from_address: "0x1111111111222222222233333333334444444444".to_string(),
        subject_address: "0xaaaaaaaaaabbbbbbbbbbccccccccccdddddddddd".to_string(),
        amount: dec!(42),
        cost: "1000000000000000000".to_string(),
        is_buy,
    }
}

/// [`TradeSource`] whose responses are released by the test.
///
/// Every call is recorded. A call for an address with a registered gate
/// waits until the gate is released; calls without a gate return no trades.
#[derive(Default)]
pub struct GatedSource {
    calls: Mutex<Vec<String>>,
    gates: Mutex<HashMap<String, oneshot::Receiver<Result<Vec<Trade>>>>>,
}

impl GatedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a gate for `address` and returns its release handle.
    pub fn gate(&self, address: &str) -> oneshot::Sender<Result<Vec<Trade>>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(address.to_string(), rx);
        tx
    }

    /// Addresses fetched so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl TradeSource for GatedSource {
    async fn fetch_trades(&self, address: &str) -> Result<Vec<Trade>> {
        self.calls.lock().unwrap().push(address.to_string());
        let gate = self.gates.lock().unwrap().remove(address);
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(TokenScopeError::Io("gate dropped".to_string()))),
            None => Ok(Vec::new()),
        }
    }
}

/// Serves exactly one HTTP response with `status` and `body`.
///
/// Returns the base URL to point a client at and a handle resolving to the
/// raw request body the server received.
pub async fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub server");
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept failed");
        let request_body = read_request_body(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        request_body
    });

    (base_url, handle)
}

/// Reads one request and returns its body, using `Content-Length`.
async fn read_request_body(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before headers were complete");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    String::from_utf8_lossy(&buf[header_end..]).into_owned()
}
