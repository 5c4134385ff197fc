//! In-process HTTP stub for integration tests.
//!
//! Binds `127.0.0.1:0`, answers each connection with whatever the route
//! handler returns and records every request target it saw.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use coincap_sdk::client::CoinCapClient;

pub const BASE_PATH: &str = "/v2/assets";

/// A canned response.
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl StubResponse {
    pub fn json(body: Value) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

type Handler = Arc<dyn Fn(&str) -> StubResponse + Send + Sync>;

pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub async fn start(handler: impl Fn(&str) -> StubResponse + Send + Sync + 'static) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
        let addr = listener.local_addr().expect("stub addr");
        let handler: Handler = Arc::new(handler);
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = requests.clone();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let handler = handler.clone();
                let log = log.clone();
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 1024];
                    loop {
                        let n = socket.read(&mut chunk).await.unwrap_or(0);
                        if n == 0 {
                            break;
                        }
                        buf.extend_from_slice(&chunk[..n]);
                        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }

                    let head = String::from_utf8_lossy(&buf);
                    let target = head.split_whitespace().nth(1).unwrap_or("/").to_string();
                    log.lock().unwrap().push(target.clone());

                    let resp = handler(&target);
                    if !resp.delay.is_zero() {
                        tokio::time::sleep(resp.delay).await;
                    }

                    let wire = format!(
                        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        resp.status,
                        reason(resp.status),
                        resp.body.len(),
                        resp.body
                    );
                    let _ = socket.write_all(wire.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self {
            base_url: format!("http://{}{}", addr, BASE_PATH),
            requests,
        }
    }

    pub fn client(&self) -> CoinCapClient {
        CoinCapClient::builder()
            .base_url(&self.base_url)
            .build()
            .expect("client")
    }

    /// Request targets (path + query) in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        _ => "Status",
    }
}

/// Path of a request target, without the query string.
pub fn path(target: &str) -> &str {
    target.split('?').next().unwrap_or(target)
}

/// Value of `key` in a request target's query string.
pub fn query_param(target: &str, key: &str) -> Option<String> {
    let query = target.split_once('?')?.1;
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == key).then(|| v.to_string())
    })
}

// ─── Fixtures ────────────────────────────────────────────────────────────────

pub fn asset_json(id: &str, rank: u32, symbol: &str, name: &str, price: &str, cap: &str) -> Value {
    json!({
        "id": id,
        "rank": rank.to_string(),
        "symbol": symbol,
        "name": name,
        "supply": "19523456.0000000000000000",
        "maxSupply": "21000000.0000000000000000",
        "marketCapUsd": cap,
        "volumeUsd24Hr": "8123456789.1234567890123456",
        "priceUsd": price,
        "changePercent24Hr": "1.2345678901234567",
        "vwap24Hr": "26801.9876543210987654",
        "explorer": format!("https://explorer.example/{}", id)
    })
}

pub fn top_assets() -> Vec<Value> {
    vec![
        asset_json("bitcoin", 1, "BTC", "Bitcoin", "26754.1234567890123456", "522345678901.2345678901234567"),
        asset_json("ethereum", 2, "ETH", "Ethereum", "1650.9876543210987654", "198765432109.8765432109876543"),
        asset_json("tether", 3, "USDT", "Tether", "1.0001234567890123", "83123456789.0123456789012345"),
        asset_json("binance-coin", 4, "BNB", "BNB", "215.4321098765432109", "33123456789.0123456789012345"),
    ]
}

pub fn page(assets: Vec<Value>) -> Value {
    json!({ "data": assets, "timestamp": 1_700_000_000_000i64 })
}

pub fn history_json(points: &[(i64, &str)]) -> Value {
    let data: Vec<Value> = points
        .iter()
        .map(|(time, price)| {
            json!({
                "priceUsd": price,
                "time": time,
                "circulatingSupply": "19523456.0000000000000000",
                "date": "2023-11-14T22:13:20.000Z"
            })
        })
        .collect();
    json!({ "data": data, "timestamp": 1_700_000_000_000i64 })
}
