use crate::config::types::{ClientConfig, Locale};
use crate::error::Result;
use std::collections::HashMap;

/// Builder for ClientConfig
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new config builder starting from defaults
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    /// Start from an existing configuration, e.g. one loaded from file
    pub fn from_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Set the service base URL
    #[must_use]
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set timeout in seconds
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.config.timeout_seconds = seconds;
        self
    }

    /// Set the message locale
    #[must_use]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.config.locale = locale;
        self
    }

    /// Add a header sent with every request
    #[must_use]
    pub fn header<S: Into<String>>(mut self, key: S, value: S) -> Self {
        self.config
            .headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    /// Returns an error if the base URL is not an http(s) URL or the timeout is out of range
    pub fn build(self) -> Result<ClientConfig> {
        use crate::config::validator::ConfigValidatorImpl;
        use crate::traits::ConfigValidator;

        ConfigValidatorImpl.validate(&self.config)?;
        Ok(self.config)
    }
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
