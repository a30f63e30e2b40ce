//! Gateway Errors

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure of a REST call. None of these ever reach the store.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("no browser window available")]
    NoWindow,

    /// fetch rejected or a JS call threw
    #[error("network error: {0}")]
    Network(String),

    /// Session cookie missing or expired
    #[error("not authorized: {method} {url}")]
    Unauthorized { method: &'static str, url: String },

    /// 401/403 on login or registration: bad credentials, not a lost session
    #[error("login rejected: {url}")]
    LoginRejected { url: String },

    #[error("{method} {url} failed with status {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl GatewayError {
    pub fn from_js(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        GatewayError::Network(message)
    }

    /// Only transport failures are worth another attempt
    pub fn is_retryable(&self) -> bool {
        matches!(self, GatewayError::Network(_))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, GatewayError::Unauthorized { .. })
    }

    /// Reclassify an auth rejection from a credential-checking endpoint
    pub fn into_login_failure(self) -> Self {
        match self {
            GatewayError::Unauthorized { url, .. } => GatewayError::LoginRejected { url },
            other => other,
        }
    }
}

/// Result type for gateway calls.
pub type Result<T> = std::result::Result<T, GatewayError>;
