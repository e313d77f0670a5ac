pub mod types;
pub mod loader;
pub mod builder;
pub mod validator;
pub mod templates;

pub use types::{ClientConfig, Locale, API_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
pub use loader::{ConfigLoader, DefaultConfigLoader};
pub use builder::ClientConfigBuilder;
pub use validator::ConfigValidatorImpl;
pub use templates::{generate_default_config_template, write_default_config};
