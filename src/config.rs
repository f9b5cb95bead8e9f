//! Application configuration loaded from environment variables.
//!
//! Every variable is optional:
//! - `TOKENSCOPE_API_URL`: base URL of the trades backend
//! - `TOKENSCOPE_EXPLORER_URL`: block explorer used for tx/block links
//! - `TOKENSCOPE_ADDRESS`: address selected at startup
//! - `TOKENSCOPE_TIMEOUT_SECS`: HTTP request timeout in seconds
//! - `TOKENSCOPE_LOG_FILE`: path of the log file
//!
//! Empty values are treated as unset.

use std::path::PathBuf;
use std::time::Duration;

/// Default trades backend.
const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Default block explorer (Base mainnet).
pub const DEFAULT_EXPLORER_URL: &str = "https://basescan.org";

/// Default HTTP request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default log file, relative to the working directory.
const DEFAULT_LOG_FILE: &str = "tokenscope.log";

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub explorer_url: String,
    pub initial_address: Option<String>,
    pub log_file: PathBuf,
}

/// Trades backend configuration values.
#[derive(Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

/// Loads the application configuration from environment variables.
///
/// Trailing slashes are stripped from both URLs so paths can be appended
/// with a single `/`.
///
/// # Errors
///
/// Returns [`TokenScopeError::Config`](crate::TokenScopeError::Config) if
/// `TOKENSCOPE_TIMEOUT_SECS` is not a positive integer.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let base_url = non_empty_var("TOKENSCOPE_API_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let explorer_url = non_empty_var("TOKENSCOPE_EXPLORER_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_EXPLORER_URL.to_string());

    let timeout_secs = match non_empty_var("TOKENSCOPE_TIMEOUT_SECS") {
        Some(raw) => match raw.parse::<u64>() {
            Ok(secs) if secs > 0 => secs,
            _ => {
                return Err(crate::TokenScopeError::Config(format!(
                    "TOKENSCOPE_TIMEOUT_SECS must be a positive integer, got {raw:?}"
                )));
            }
        },
        None => DEFAULT_TIMEOUT_SECS,
    };

    let log_file = non_empty_var("TOKENSCOPE_LOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    Ok(AppConfig {
        api: ApiConfig {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        },
        explorer_url,
        initial_address: non_empty_var("TOKENSCOPE_ADDRESS"),
        log_file,
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
