//! Reusable UI components.

pub mod address_bar;
pub mod status_bar;
pub mod trade_table;
