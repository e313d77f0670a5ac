use crate::error::{ClientError, Result};
use std::path::Path;

/// Generate default cefr.toml template with comments
pub fn generate_default_config_template() -> String {
    r#"# CEFR client configuration
# Values here can be overridden by the CEFR_API_URL environment variable
# and by command-line flags.

# Base URL of the classification service (serves /api/predict and /api/stats)
base_url = "http://127.0.0.1:8000"

# Request timeout in seconds (1-300)
timeout_seconds = 30

# Language of messages and metric labels: "en" or "uk"
locale = "en"

# Extra headers sent with every request (optional)
# [headers]
# "X-Client" = "cefr-cli"
"#
    .to_string()
}

/// Write the default configuration template.
///
/// Returns `true` when the file was written. An existing file is left alone
/// unless `overwrite` is set.
pub fn write_default_config<P: AsRef<Path>>(path: P, overwrite: bool) -> Result<bool> {
    let path = path.as_ref();

    if path.exists() && !overwrite {
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(ClientError::Io)?;
    }

    std::fs::write(path, generate_default_config_template()).map_err(ClientError::Io)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use tempfile::tempdir;

    #[test]
    fn test_template_parses_to_defaults() {
        let config: ClientConfig = toml::from_str(&generate_default_config_template()).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_write_default_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("cefr.toml");

        assert!(write_default_config(&path, false).unwrap());
        assert!(path.exists());

        std::fs::write(&path, "locale = \"uk\"").unwrap();
        assert!(!write_default_config(&path, false).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "locale = \"uk\"");

        assert!(write_default_config(&path, true).unwrap());
        assert!(std::fs::read_to_string(&path).unwrap().contains("base_url"));
    }
}
