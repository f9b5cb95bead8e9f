//! Request and response bodies for the trades backend.

pub mod trade;

use serde::{Deserialize, Serialize};

pub use trade::Trade;

/// Body of a `POST /api/token/trades` request.
#[derive(Debug, Serialize)]
pub struct TradesRequest<'a> {
    pub address: &'a str,
}

/// Successful response of the trades endpoint.
#[derive(Debug, Deserialize)]
pub struct TradesResponse {
    pub trades: Vec<Trade>,
}
