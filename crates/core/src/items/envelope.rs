//! The HTTP-shaped records exchanged with the handlers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::error::WriteRequestError;

const BASE_ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";
const WRITE_ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token,X-Requested-With";

/// CORS headers attached to every read handler response.
pub const READ_CORS: CorsPolicy = CorsPolicy {
    allow_headers: BASE_ALLOW_HEADERS,
    allow_methods: "GET,OPTIONS",
};

/// CORS headers attached to every write handler response.
pub const WRITE_CORS: CorsPolicy = CorsPolicy {
    allow_headers: WRITE_ALLOW_HEADERS,
    allow_methods: "POST,OPTIONS",
};

/// CORS headers for `OPTIONS` preflight on the shared items route.
pub const PREFLIGHT_CORS: CorsPolicy = CorsPolicy {
    allow_headers: WRITE_ALLOW_HEADERS,
    allow_methods: "GET,POST,OPTIONS",
};

/// Input delivered to a handler for a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    #[serde(default)]
    pub body: Option<String>,
}

impl Invocation {
    /// Creates an invocation carrying the given body.
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
        }
    }

    /// Builds an invocation from raw request bytes.
    ///
    /// An empty payload means no body. A payload that is not valid UTF-8
    /// cannot be JSON and fails with [`WriteRequestError::InvalidJson`].
    pub fn from_raw_body(bytes: &[u8]) -> Result<Self, WriteRequestError> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        let body = std::str::from_utf8(bytes).map_err(|_| WriteRequestError::InvalidJson)?;
        Ok(Self::with_body(body))
    }
}

/// Origin and header rules advertised on a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorsPolicy {
    pub allow_headers: &'static str,
    pub allow_methods: &'static str,
}

impl CorsPolicy {
    /// Full header set for a JSON response under this policy.
    pub fn headers(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
            (
                "Access-Control-Allow-Headers".to_string(),
                self.allow_headers.to_string(),
            ),
            (
                "Access-Control-Allow-Methods".to_string(),
                self.allow_methods.to_string(),
            ),
        ])
    }
}

/// Uniform response envelope returned by every handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// JSON-encoded payload.
    pub body: String,
}

impl HandlerResponse {
    /// Creates a response with an already-encoded JSON body.
    pub fn new(status_code: u16, cors: &CorsPolicy, body: impl Into<String>) -> Self {
        Self {
            status_code,
            headers: cors.headers(),
            body: body.into(),
        }
    }

    /// `{"error": message}` response.
    pub fn error(status_code: u16, cors: &CorsPolicy, message: impl AsRef<str>) -> Self {
        Self::new(
            status_code,
            cors,
            json!({ "error": message.as_ref() }).to_string(),
        )
    }

    /// `{"message": message}` response.
    pub fn message(status_code: u16, cors: &CorsPolicy, message: impl AsRef<str>) -> Self {
        Self::new(
            status_code,
            cors,
            json!({ "message": message.as_ref() }).to_string(),
        )
    }

    /// Looks up a header by exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
