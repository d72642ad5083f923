// mlserve-core/src/infrastructure/adapters/databricks/client.rs

use reqwest::{Client, Method, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::infrastructure::error::InfrastructureError;

/// Error body returned by every Databricks REST API.
#[derive(Debug, Default, serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Thin authenticated REST client for one workspace.
///
/// Implements the registry, serving and identity ports (see sibling modules).
#[derive(Clone)]
pub struct DatabricksClient {
    http: Client,
    base_url: Url,
    token: String,
}

impl DatabricksClient {
    pub fn new(
        host: &str,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, InfrastructureError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mlserve/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let base_url = Url::parse(&normalize_host(host)).map_err(|e| {
            InfrastructureError::ConfigError(format!("invalid host '{}': {}", host, e))
        })?;

        Ok(Self {
            http,
            base_url,
            token: token.into(),
        })
    }

    /// Appends `base` then `tail` to the workspace URL, percent-encoding every
    /// segment, so a `/` or `?` inside a name stays inside its segment.
    pub(crate) fn url(&self, base: &[&str], tail: &[&str]) -> Result<Url, InfrastructureError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                InfrastructureError::ConfigError(format!(
                    "'{}' cannot be used as a base URL",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(base)
            .extend(tail);
        Ok(url)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: Url,
    ) -> Result<T, InfrastructureError> {
        let response = self.request(Method::GET, url).send().await?;
        decode(response).await
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> Result<T, InfrastructureError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.request(method, url).json(body).send().await?;
        decode(response).await
    }

    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        debug!(%method, %url, "Databricks request");
        self.http.request(method, url).bearer_auth(&self.token)
    }
}

/// `lego-ssc-dev.cloud.databricks.com` => `https://lego-ssc-dev.cloud.databricks.com`.
pub fn normalize_host(host: &str) -> String {
    let trimmed = host.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, InfrastructureError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        let body: ApiErrorBody = serde_json::from_slice(&bytes).unwrap_or_default();
        let message = body
            .message
            .unwrap_or_else(|| String::from_utf8_lossy(&bytes).trim().to_string());
        return Err(InfrastructureError::Api {
            status: status.as_u16(),
            code: body.error_code,
            message,
        });
    }

    // Some endpoints answer 200 with an empty body.
    let payload: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &bytes[..]
    };
    serde_json::from_slice(payload).map_err(|e| InfrastructureError::Decode(e.to_string()))
}
