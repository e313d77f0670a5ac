use crate::config::types::ClientConfig;
use crate::error::{ClientError, Result};
use std::path::Path;

/// Configuration loader trait
pub trait ConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ClientConfig>;
    fn load_or_default<P: AsRef<Path>>(path: P) -> Result<ClientConfig>;
}

/// Default configuration loader implementation
pub struct DefaultConfigLoader;

impl ConfigLoader for DefaultConfigLoader {
    /// Load configuration from a cefr.toml file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ClientConfig> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(ClientError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref).map_err(ClientError::Io)?;

        // Parse TOML with the file name in the error
        let config: ClientConfig = toml::from_str(&content).map_err(|e| {
            ClientError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;

        Ok(config)
    }

    /// Load configuration from file, falling back to defaults when the file is absent
    fn load_or_default<P: AsRef<Path>>(path: P) -> Result<ClientConfig> {
        match Self::load_from_file(path) {
            Err(ClientError::ConfigNotFound { .. }) => Ok(ClientConfig::default()),
            other => other,
        }
    }
}

// Convenience functions maintaining the API
impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> crate::config::builder::ClientConfigBuilder {
        crate::config::builder::ClientConfigBuilder::new()
    }

    /// Load configuration from a cefr.toml file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_from_file(path)
    }

    /// Load configuration, using defaults when the file does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_or_default(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Locale;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cefr.toml");
        fs::write(
            &path,
            r#"
base_url = "https://levels.example.com"
timeout_seconds = 10
locale = "uk"

[headers]
"X-Client" = "cli"
"#,
        )
        .unwrap();

        let config = ClientConfig::load_from_file(&path).unwrap();
        assert_eq!(config.base_url, "https://levels.example.com");
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.locale, Locale::Uk);
        assert_eq!(
            config.headers.unwrap().get("X-Client").map(String::as_str),
            Some("cli")
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let result = ClientConfig::load_from_file(&path);
        assert!(matches!(result, Err(ClientError::ConfigNotFound { .. })));

        let config = ClientConfig::load_or_default(&path).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_invalid_toml_mentions_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cefr.toml");
        fs::write(&path, "timeout_seconds = \"soon\"").unwrap();

        let error = ClientConfig::load_or_default(&path).unwrap_err();
        assert!(error.to_string().contains("Failed to parse TOML"));
        assert!(error.to_string().contains("cefr.toml"));
    }
}
