use crate::prelude::*;

/// Default backend base URL, overridable with `--api-base` or
/// `INTELLIDOCS_API_BASE`.
pub const DEFAULT_API_BASE: &str = "http://localhost:5001/api";

/// Build the plain HTTP client used by both tools. No auth, no timeouts.
pub fn create_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .build()
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
}

/// Join an endpoint path onto the configured base URL.
pub fn endpoint(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Check that an HTTP response was successful, returning a descriptive error otherwise.
pub async fn check_response(response: reqwest::Response, context: &str) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(eyre!("{context} [{status}]: {body}"))
}
