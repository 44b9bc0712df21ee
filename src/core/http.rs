//! HTTP client construction.
//!
//! One configured `reqwest` client is shared by all API operations.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

use crate::error::{Result, WmtError};

/// Default timeout for HTTP requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build a configured HTTP client.
///
/// # Errors
///
/// Returns error if client construction fails.
pub fn build_client(timeout: Duration) -> Result<Client> {
    ClientBuilder::new()
        .timeout(timeout)
        .user_agent(format!("wmt/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| WmtError::Network(e.to_string()))
}
