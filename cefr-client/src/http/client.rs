use crate::config::ClientConfig;
use crate::error::{ClientError, GatewayError, Result};
use crate::http::response_converter::{convert_response, send_error};
use crate::http::FormPayload;
use crate::traits::Gateway;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Gateway backed by a reqwest client
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    config: ClientConfig,
}

impl HttpGateway {
    /// Create a new gateway with configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_headers(Self::default_headers(&config)?)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn default_headers(config: &ClientConfig) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (key, value) in config.headers.iter().flatten() {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|_| ClientError::invalid_config(format!("Invalid header name: {}", key)))?;
            let value = HeaderValue::from_str(value).map_err(|_| {
                ClientError::invalid_config(format!("Invalid value for header {}", key))
            })?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    fn url(&self, path: &str) -> std::result::Result<Url, GatewayError> {
        Ok(self.config.endpoint(path)?)
    }

    /// Send a prepared request exactly once
    async fn send<T: DeserializeOwned>(
        &self,
        url: &Url,
        request: RequestBuilder,
    ) -> std::result::Result<T, GatewayError> {
        let response = request
            .send()
            .await
            .map_err(|e| send_error(url.as_str(), &e, self.config.timeout_seconds))?;

        convert_response(response).await
    }
}

impl Gateway for HttpGateway {
    async fn post_form<T>(&self, path: &str, form: FormPayload) -> std::result::Result<T, GatewayError>
    where
        T: DeserializeOwned + Send,
    {
        let url = self.url(path)?;
        debug!(%url, fields = form.parts().len(), "POST multipart");

        let multipart = form
            .into_multipart()
            .map_err(|e| GatewayError::decode(url.as_str(), e.to_string()))?;
        let request = self.client.post(url.clone()).multipart(multipart);

        self.send(&url, request).await
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> std::result::Result<T, GatewayError>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync + ?Sized,
    {
        let url = self.url(path)?;
        debug!(%url, "POST json");

        let request = self.client.post(url.clone()).json(body);
        self.send(&url, request).await
    }

    async fn get_json<T>(&self, path: &str) -> std::result::Result<T, GatewayError>
    where
        T: DeserializeOwned + Send,
    {
        let url = self.url(path)?;
        debug!(%url, "GET");

        let request = self.client.get(url.clone());
        self.send(&url, request).await
    }
}
