// src/client.rs
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::ApiConfig;
use crate::dto::ListResponse;
use crate::errors::ClientError;
use crate::normalize::normalize_list;

/// Thin client for list endpoints. Performs the request and JSON decode, then
/// hands the payload to [`normalize_list`] so callers only ever see the
/// canonical envelope.
pub struct ListApiClient {
    http: Client,
    config: ApiConfig,
}

impl ListApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let http = Client::builder().build()?;
        Ok(Self { http, config })
    }

    /// GET a list endpoint and normalize whatever envelope it answers with.
    ///
    /// Transport failures, non-2xx statuses, and unparseable bodies are errors
    /// here; a parseable body of unexpected shape is not, it normalizes to an
    /// empty response.
    pub async fn get_list(&self, path: &str) -> Result<ListResponse<Value>, ClientError> {
        let url = self.endpoint(path);

        let mut req = self.http.get(&url);
        if let Some(token) = &self.config.token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        let payload: Value = resp.json().await?;
        let normalized = normalize_list(payload);
        debug!(
            url = %url,
            items = normalized.items.len(),
            total = normalized.total,
            "normalized list response"
        );
        Ok(normalized)
    }

    /// [`get_list`](Self::get_list) plus typed element decoding.
    pub async fn get_list_as<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<ListResponse<T>, ClientError> {
        let normalized = self.get_list(path).await?;
        Ok(normalized.decode_items()?)
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_duplicate_slashes() {
        let client = ListApiClient::new(ApiConfig::new("http://localhost:9000/api/")).unwrap();
        assert_eq!(client.endpoint("/documents"), "http://localhost:9000/api/documents");
        assert_eq!(client.endpoint("documents"), "http://localhost:9000/api/documents");
    }
}
