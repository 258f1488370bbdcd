use crate::api::error::{GatewayError, GatewayOperation};
use crate::api::models::*;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Typed wrapper over the remote library API rooted at one base URL.
///
/// Performs no retries and keeps no state besides the base URL; every call
/// either yields a validated payload or a [`GatewayError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryClient {
    base_url: String,
}

impl LibraryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str, query: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        for (index, (key, value)) in query.iter().enumerate() {
            url.push(if index == 0 { '?' } else { '&' });
            url.push_str(&format!("{}={}", key, urlencoding::encode(value)));
        }
        url
    }

    async fn get_json<T>(&self, operation: GatewayOperation, url: String) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
    {
        debug!(%operation, %url, "gateway request");
        let response = HTTP_CLIENT
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::network(operation, &url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::status(operation, url, status));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GatewayError::network(operation, &url, e))?;
        serde_json::from_slice(&bytes).map_err(|e| GatewayError::body(operation, url, e))
    }

    /// Pure construction; the stream itself is consumed by an external player.
    pub fn stream_url(&self, track_id: &str) -> String {
        stream_url(&self.base_url, track_id)
    }
}

pub fn stream_url(base_url: &str, track_id: &str) -> String {
    format!(
        "{}/api/music/stream/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(track_id)
    )
}

include!("response_models.rs");
include!("library_browsing.rs");
