use crate::error::GatewayError;
use reqwest::Response;
use serde::de::DeserializeOwned;
use std::error::Error as StdError;
use tracing::{debug, warn};

/// Turn a reqwest response into a decoded body or a typed failure.
///
/// Non-2xx responses become [`GatewayError::Transport`] carrying the raw body so
/// callers can pull a `detail`/`message` out of it.
pub(crate) async fn convert_response<T: DeserializeOwned>(
    response: Response,
) -> Result<T, GatewayError> {
    let status = response.status();
    let url = response.url().to_string();

    if !status.is_success() {
        // A body that cannot be read still leaves us with the status
        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), %url, "server rejected request");
        return Err(GatewayError::transport(status.as_u16(), body));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| GatewayError::network(url.as_str(), describe_error(&e)))?;

    debug!(status = status.as_u16(), %url, bytes = bytes.len(), "response received");

    serde_json::from_slice(&bytes).map_err(|e| GatewayError::decode(url, e.to_string()))
}

/// Classify a failure to get any response at all
pub(crate) fn send_error(url: &str, error: &reqwest::Error, timeout_seconds: u64) -> GatewayError {
    if error.is_timeout() {
        return GatewayError::network(url, format!("request timed out after {}s", timeout_seconds));
    }
    GatewayError::network(url, describe_error(error))
}

/// Flatten an error and its sources into one line
pub(crate) fn describe_error(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}
