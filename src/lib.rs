//! Terminal dashboard for recent on-chain token trades.
//!
//! Fetches the trades of a selected token address from a backend HTTP API
//! and shows them in a Ratatui table. The selected address lives in a
//! shared [`state::Selection`]; changing it triggers a new fetch.

pub mod api;
pub mod config;
pub mod error;
pub mod feed;
pub mod format;
pub mod logging;
pub mod models;
pub mod state;
pub mod tui;

pub use error::{Result, TokenScopeError};
