//! Trades client tests against a local stub server.

mod common;

use std::time::Duration;

use tokenscope::TokenScopeError;
use tokenscope::api::{TradeSource, TradesClient};
use tokenscope::config::ApiConfig;

const TRADES_JSON: &str = include_str!("fixtures/trades.json");

fn client(base_url: String) -> TradesClient {
    TradesClient::new(&ApiConfig {
        base_url,
        timeout: Duration::from_secs(5),
    })
    .expect("failed to build client")
}

#[tokio::test]
async fn test_posts_address_and_decodes_trades() {
    let (base_url, server) = common::serve_once(200, TRADES_JSON).await;

    let trades = tokio_test::assert_ok!(client(base_url).fetch_trades("0xabc").await);
    assert_eq!(trades.len(), 2);
    assert!(trades[0].is_buy);

    let request_body = server.await.unwrap();
    let sent: serde_json::Value = serde_json::from_str(&request_body).unwrap();
    assert_eq!(sent, serde_json::json!({ "address": "0xabc" }));
}

#[tokio::test]
async fn test_empty_address_is_still_sent() {
    let (base_url, server) = common::serve_once(200, r#"{"trades":[]}"#).await;

    let trades = client(base_url).fetch_trades("").await.unwrap();
    assert!(trades.is_empty());

    let request_body = server.await.unwrap();
    assert_eq!(request_body, r#"{"address":""}"#);
}

#[tokio::test]
async fn test_server_error_is_http_error() {
    let (base_url, _server) = common::serve_once(500, r#"{"error":"boom"}"#).await;

    let err = tokio_test::assert_err!(client(base_url).fetch_trades("0xabc").await);
    assert!(matches!(err, TokenScopeError::Http(_)));
}

#[tokio::test]
async fn test_malformed_body_is_json_error() {
    let (base_url, _server) = common::serve_once(200, r#"{"trades": "nope"}"#).await;

    let err = client(base_url).fetch_trades("0xabc").await.unwrap_err();
    assert!(matches!(err, TokenScopeError::Json(_)));
}
