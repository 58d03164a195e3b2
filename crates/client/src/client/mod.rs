//! HTTP client for the itemtable API.

pub mod health;
pub mod items;

use serde::Deserialize;

use crate::error::{ClientError, Result};

/// HTTP client for the itemtable API.
#[derive(Debug, Clone)]
pub struct ItemtableClient {
    client: reqwest::Client,
    base_url: String,
}

/// Error body returned by the handlers.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl ItemtableClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Handle error responses.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_message(&text),
            })
        }
    }
}

/// Extracts the `error` field from a handler error body, falling back to the
/// raw text.
fn error_message(text: &str) -> String {
    serde_json::from_str::<ErrorBody>(text)
        .map(|body| body.error)
        .unwrap_or_else(|_| text.to_string())
}
