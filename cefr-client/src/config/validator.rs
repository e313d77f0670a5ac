use crate::config::types::ClientConfig;
use crate::error::{ClientError, Result};
use crate::traits::ConfigValidator;

/// Longest request timeout accepted, in seconds
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Configuration validator implementation
pub struct ConfigValidatorImpl;

impl ConfigValidator for ConfigValidatorImpl {
    type Config = ClientConfig;

    fn validate(&self, config: &ClientConfig) -> Result<()> {
        let url = url::Url::parse(&config.base_url).map_err(|e| {
            ClientError::invalid_config(format!(
                "Invalid base_url '{}': {}. Must be a valid URL such as http://127.0.0.1:8000",
                config.base_url, e
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::invalid_config(format!(
                "Unsupported scheme '{}' in base_url '{}'. Use http or https",
                url.scheme(),
                config.base_url
            )));
        }

        if config.timeout_seconds == 0 || config.timeout_seconds > MAX_TIMEOUT_SECONDS {
            return Err(ClientError::invalid_config(format!(
                "timeout_seconds must be between 1 and {} seconds",
                MAX_TIMEOUT_SECONDS
            )));
        }

        if let Some(headers) = &config.headers {
            if let Some(name) = headers.keys().find(|name| name.trim().is_empty()) {
                return Err(ClientError::invalid_config(format!(
                    "Header name '{}' must not be empty",
                    name
                )));
            }
        }

        Ok(())
    }
}

// Add convenience methods to ClientConfig
impl ClientConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ConfigValidatorImpl.validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidatorImpl.validate(&ClientConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_bad_scheme() {
        let config = ClientConfig {
            base_url: "ftp://files.example.com".to_string(),
            ..ClientConfig::default()
        };
        let error = ConfigValidatorImpl.validate(&config).unwrap_err();
        assert!(error.to_string().contains("Unsupported scheme 'ftp'"));
    }

    #[test]
    fn test_rejects_timeout_out_of_range() {
        for timeout in [0, MAX_TIMEOUT_SECONDS + 1] {
            let config = ClientConfig {
                timeout_seconds: timeout,
                ..ClientConfig::default()
            };
            assert!(ConfigValidatorImpl.validate(&config).is_err());
        }
    }

    #[test]
    fn test_rejects_empty_header_name() {
        let mut headers = HashMap::new();
        headers.insert(" ".to_string(), "value".to_string());
        let config = ClientConfig {
            headers: Some(headers),
            ..ClientConfig::default()
        };
        assert!(ConfigValidatorImpl.validate(&config).is_err());
    }
}
