pub mod analyze;
pub mod init;
pub mod metrics;
pub mod stats;
pub mod text_stats;

use crate::cli::{GlobalArgs, InputArgs};
use crate::error::{CliError, Result, ResultExt};
use cefr_client::{AnalysisInput, ClientConfig, ClientConfigBuilder, UploadedFile};
use std::io::{self, IsTerminal, Read};
use tokio::runtime::Runtime;
use tracing::debug;

/// Resolve the effective configuration.
///
/// Precedence, lowest first: defaults, the config file, `CEFR_API_URL`, then
/// command-line flags.
pub fn load_config(global: &GlobalArgs) -> Result<ClientConfig> {
    let config = ClientConfig::load_or_default(&global.config)
        .with_context(|| format!("Failed to load configuration from {}", global.config))?
        .with_env_overrides();

    let mut builder = ClientConfigBuilder::from_config(config);
    if let Some(api_url) = &global.api_url {
        builder = builder.base_url(api_url.clone());
    }
    if let Some(locale) = global.locale {
        builder = builder.locale(locale.into());
    }

    let config = builder.build()?;
    debug!(base_url = %config.base_url, locale = %config.locale, "configuration resolved");
    Ok(config)
}

/// Create async runtime for HTTP operations
pub fn runtime() -> Result<Runtime> {
    Runtime::new().map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))
}

/// Build the analysis input from `--file`, `--text` or stdin
pub fn read_input(source: &InputArgs) -> Result<AnalysisInput> {
    if let Some(path) = &source.file {
        let file = UploadedFile::from_path(path)?;
        debug!(file = %file.file_name, bytes = file.len(), "read upload");
        return Ok(AnalysisInput::file(file));
    }

    if let Some(text) = &source.text {
        return Ok(AnalysisInput::text(text.clone()));
    }

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Reading text from stdin, finish with Ctrl-D");
    }
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .with_context(|| "Failed to read text from stdin")?;
    Ok(AnalysisInput::text(text))
}
