use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cefr-client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors raised while configuring or constructing the client
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Unsupported upload {path}: {message}")]
    UnsupportedUpload { path: PathBuf, message: String },

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl ClientError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new unsupported upload error
    pub fn unsupported_upload<P: Into<PathBuf>, S: Into<String>>(path: P, message: S) -> Self {
        Self::UnsupportedUpload {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Transport-level failures of a single request.
///
/// `Network` means the endpoint was never reached; `Transport` means it answered
/// with a non-success status. Callers rely on the distinction to choose between
/// "cannot reach server" and "server rejected request".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("Cannot reach {url}: {message}")]
    Network { url: String, message: String },

    #[error("Server responded with status {status}")]
    Transport { status: u16, body: String },

    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl GatewayError {
    /// Create a new network error
    pub fn network<U: Into<String>, S: Into<String>>(url: U, message: S) -> Self {
        Self::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a new transport error from a non-success response
    pub fn transport<S: Into<String>>(status: u16, body: S) -> Self {
        Self::Transport {
            status,
            body: body.into(),
        }
    }

    /// Create a new decode error
    pub fn decode<U: Into<String>, S: Into<String>>(url: U, message: S) -> Self {
        Self::Decode {
            url: url.into(),
            message: message.into(),
        }
    }

    /// HTTP status of a rejected request
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// Human-readable reason supplied by the server, if any.
    ///
    /// Looks at the `detail` field of the JSON error body first, then `message`.
    /// Empty and non-string values are ignored.
    pub fn detail(&self) -> Option<String> {
        let Self::Transport { body, .. } = self else {
            return None;
        };

        let parsed: serde_json::Value = serde_json::from_str(body).ok()?;
        ["detail", "message"].iter().find_map(|key| {
            parsed
                .get(key)
                .and_then(serde_json::Value::as_str)
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(str::to_string)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_prefers_detail_over_message() {
        let error = GatewayError::transport(400, r#"{"detail": "Add text or a file!", "message": "ignored"}"#);
        assert_eq!(error.detail().as_deref(), Some("Add text or a file!"));
    }

    #[test]
    fn test_detail_falls_back_to_message() {
        let error = GatewayError::transport(500, r#"{"message": "Model not loaded"}"#);
        assert_eq!(error.detail().as_deref(), Some("Model not loaded"));
    }

    #[test]
    fn test_detail_ignores_non_string_and_empty_values() {
        let structured = GatewayError::transport(422, r#"{"detail": [{"loc": ["body", "text"]}]}"#);
        assert_eq!(structured.detail(), None);

        let empty = GatewayError::transport(400, r#"{"detail": "  "}"#);
        assert_eq!(empty.detail(), None);
    }

    #[test]
    fn test_detail_of_non_json_body() {
        let error = GatewayError::transport(502, "<html>Bad Gateway</html>");
        assert_eq!(error.detail(), None);
        assert_eq!(error.status(), Some(502));
    }

    #[test]
    fn test_network_error_has_no_status() {
        let error = GatewayError::network("http://127.0.0.1:9/api/predict", "connection refused");
        assert!(error.is_network());
        assert_eq!(error.status(), None);
        assert_eq!(error.detail(), None);
        assert!(error.to_string().contains("Cannot reach"));
    }

    #[test]
    fn test_invalid_config_helper() {
        let error = ClientError::invalid_config("bad base url");
        assert!(error.to_string().contains("Invalid configuration"));
    }
}
