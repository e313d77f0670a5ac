use crate::error::{GatewayError, Result};
use crate::http::FormPayload;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;

/// Typed request transport to the classification service.
///
/// Every call is a single attempt: implementations must not retry.
pub trait Gateway: Send + Sync {
    /// POST a multipart form to `path` and decode the JSON reply
    fn post_form<T>(
        &self,
        path: &str,
        form: FormPayload,
    ) -> impl Future<Output = std::result::Result<T, GatewayError>> + Send
    where
        T: DeserializeOwned + Send;

    /// POST a JSON body to `path` and decode the JSON reply
    fn post_json<T, B>(
        &self,
        path: &str,
        body: &B,
    ) -> impl Future<Output = std::result::Result<T, GatewayError>> + Send
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync + ?Sized;

    /// GET `path` and decode the JSON reply
    fn get_json<T>(&self, path: &str) -> impl Future<Output = std::result::Result<T, GatewayError>> + Send
    where
        T: DeserializeOwned + Send;
}

/// Trait for configuration validation
pub trait ConfigValidator: Send + Sync {
    type Config;

    /// Validate configuration
    fn validate(&self, config: &Self::Config) -> Result<()>;
}
