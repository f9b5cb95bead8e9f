//! HTTP client for the trades backend.
//!
//! The backend exposes a single endpoint, `POST /api/token/trades`, that
//! takes `{"address": ...}` and returns `{"trades": [...]}`.

use std::future::Future;

use tracing::debug;

use crate::Result;
use crate::config::ApiConfig;
use crate::models::{Trade, TradesRequest, TradesResponse};

/// Path of the trades endpoint, relative to the backend base URL.
pub const TRADES_PATH: &str = "/api/token/trades";

/// Anything that can produce the recent trades of an address.
///
/// The TUI is driven through this trait so tests can substitute a
/// scripted source for the HTTP client.
pub trait TradeSource: Send + Sync + 'static {
    /// Fetches the trades of `address`, in the order the source returns them.
    fn fetch_trades(&self, address: &str) -> impl Future<Output = Result<Vec<Trade>>> + Send;
}

/// [`TradeSource`] backed by the trades HTTP endpoint.
#[derive(Clone, Debug)]
pub struct TradesClient {
    http: reqwest::Client,
    url: String,
}

impl TradesClient {
    /// Builds a client for the backend described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenScopeError::Http`](crate::TokenScopeError::Http) if
    /// the underlying HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            url: trades_url(&config.base_url),
        })
    }

    /// Full URL of the trades endpoint.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl TradeSource for TradesClient {
    async fn fetch_trades(&self, address: &str) -> Result<Vec<Trade>> {
        let response = self
            .http
            .post(&self.url)
            .json(&TradesRequest { address })
            .send()
            .await?;

        let response = response.error_for_status()?;
        let body = response.bytes().await?;
        let parsed: TradesResponse = serde_json::from_slice(&body)?;

        debug!(address, count = parsed.trades.len(), "Decoded trades response");
        Ok(parsed.trades)
    }
}

/// Joins the backend base URL with the trades path.
fn trades_url(base_url: &str) -> String {
    format!("{}{TRADES_PATH}", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        assert_eq!(
            trades_url("http://localhost:3000"),
            "http://localhost:3000/api/token/trades"
        );
        assert_eq!(
            trades_url("https://dash.example.com/"),
            "https://dash.example.com/api/token/trades"
        );
    }

    #[test]
    fn client_uses_configured_base() {
        let client = TradesClient::new(&ApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_secs(1),
        })
        .unwrap();
        assert_eq!(client.url(), "http://127.0.0.1:9/api/token/trades");
    }

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_string(&TradesRequest { address: "0xabc" }).unwrap();
        assert_eq!(body, r#"{"address":"0xabc"}"#);
    }

    #[tokio::test]
    async fn unreachable_backend_is_an_http_error() {
        // Port 9 (discard) is closed on test machines.
        let client = TradesClient::new(&ApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_secs(2),
        })
        .unwrap();
        let err = client.fetch_trades("0xabc").await.unwrap_err();
        assert!(matches!(err, crate::TokenScopeError::Http(_)));
    }
}
