use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Base URL used when neither the config file nor the environment supplies one
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Environment variable that overrides the configured base URL
pub const API_URL_ENV: &str = "CEFR_API_URL";

/// Language of user-facing messages and metric labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Uk,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Uk => "uk",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "uk" | "ua" => Ok(Locale::Uk),
            other => Err(ClientError::invalid_config(format!(
                "Unknown locale '{}'. Supported locales: en, uk",
                other
            ))),
        }
    }
}

/// Client configuration: where the classifier lives and how to talk to it
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the classifier and statistics service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// Language of user-facing messages
    pub locale: Locale,
    /// Extra headers sent with every request
    pub headers: Option<HashMap<String, String>>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            locale: Locale::default(),
            headers: None,
        }
    }
}

impl ClientConfig {
    /// Resolve an API path such as `/api/predict` against the base URL.
    ///
    /// The path is appended to the base URL as-is, so a base URL with a path
    /// prefix (`https://host/cefr`) keeps that prefix.
    pub fn endpoint(&self, path: &str) -> std::result::Result<Url, url::ParseError> {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            Url::parse(&format!("{}{}", base, path))
        } else {
            Url::parse(&format!("{}/{}", base, path))
        }
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides using the given variable lookup
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_ENV).filter(|value| !value.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.locale, Locale::En);
        assert!(config.headers.is_none());
    }

    #[test]
    fn test_endpoint_joining() {
        let mut config = ClientConfig::default();
        assert_eq!(
            config.endpoint("/api/predict").unwrap().as_str(),
            "http://127.0.0.1:8000/api/predict"
        );

        config.base_url = "https://levels.example.com/cefr/".to_string();
        assert_eq!(
            config.endpoint("/api/stats").unwrap().as_str(),
            "https://levels.example.com/cefr/api/stats"
        );
        assert_eq!(
            config.endpoint("api/stats").unwrap().as_str(),
            "https://levels.example.com/cefr/api/stats"
        );
    }

    #[test]
    fn test_endpoint_with_invalid_base() {
        let config = ClientConfig {
            base_url: "not a url".to_string(),
            ..ClientConfig::default()
        };
        assert!(config.endpoint("/api/predict").is_err());
    }

    #[test]
    fn test_env_override() {
        let config = ClientConfig::default().with_overrides_from(|key| {
            (key == API_URL_ENV).then(|| " http://10.0.0.5:9000 ".to_string())
        });
        assert_eq!(config.base_url, "http://10.0.0.5:9000");

        let unchanged = ClientConfig::default().with_overrides_from(|_| Some(String::new()));
        assert_eq!(unchanged.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("UK".parse::<Locale>().unwrap(), Locale::Uk);
        assert_eq!("ua".parse::<Locale>().unwrap(), Locale::Uk);
        assert!("de".parse::<Locale>().is_err());
        assert_eq!(Locale::Uk.to_string(), "uk");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ClientConfig = toml::from_str(r#"locale = "uk""#).unwrap();
        assert_eq!(config.locale, Locale::Uk);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
    }
}
