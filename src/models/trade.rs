//! Trade records returned by the trades endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single executed buy or sell of a subject token.
///
/// Field names follow the backend's camelCase JSON. Fields the backend
/// adds beyond these are ignored.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    /// Transaction hash.
    pub hash: String,
    /// Block timestamp in seconds since the Unix epoch.
    pub timestamp: i64,
    pub block_number: u64,
    /// Address that sent the transaction.
    pub from_address: String,
    /// Address of the traded token.
    pub subject_address: String,
    /// Quantity traded. Accepts JSON numbers or numeric strings.
    pub amount: Decimal,
    /// Total value in wei (18 decimals) as an integer string.
    pub cost: String,
    /// `true` for a buy, `false` for a sell.
    pub is_buy: bool,
}

impl Trade {
    /// Timestamp converted to milliseconds since the Unix epoch.
    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp.saturating_mul(1000)
    }
}
