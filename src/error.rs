use cefr_client::ClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// A failure already phrased for the user by the workflow
    #[error("{0}")]
    Service(String),

    #[error("{0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<CliError>),
}

impl CliError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Client(err) => client_message(err),
            Self::Json(err) => format!("Failed to produce JSON: {err}"),
            Self::Dialoguer(err) => format!("UI interaction error: {err}"),
            Self::Service(msg) | Self::Other(msg) => msg.clone(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

fn client_message(err: &ClientError) -> String {
    match err {
        ClientError::ConfigNotFound { path } => {
            format!("Configuration file not found: {}", path.display())
        }
        ClientError::InvalidConfig { message } => format!("Invalid configuration: {message}"),
        ClientError::UnsupportedUpload { path, message } => {
            format!("Cannot use {}: {message}", path.display())
        }
        ClientError::Io(err) => format!("I/O operation failed: {err}"),
        other => other.to_string(),
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

pub trait ResultExt<T, E> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: Into<CliError>,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            let cli_err: CliError = err.into();
            cli_err.with_context(context())
        })
    }
}
