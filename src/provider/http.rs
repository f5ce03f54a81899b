//! Shared HTTP client construction and status mapping.

use std::time::Duration;

use crate::error::{JarvisError, Result};

/// Build a reqwest client with the given request timeout.
///
/// Clones of the returned client share one connection pool.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(10)
        .build()
        .map_err(JarvisError::from)
}

/// Map a non-success HTTP status and body to an error.
pub fn status_to_error(status: u16, body: &str) -> JarvisError {
    let message = extract_error_message(body).unwrap_or_else(|| body.trim().to_string());
    JarvisError::api(status, message)
}

/// Pull `{"error": "..."}` or `{"error": {"message": "..."}}` out of a body.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let error = value.get("error")?;
    error
        .as_str()
        .or_else(|| error.get("message").and_then(|m| m.as_str()))
        .map(str::to_string)
}
