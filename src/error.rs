//! Error types for the gateway
//!
//! Keeps every upstream failure class distinct so callers can branch on them,
//! and collapses them into HTTP status codes at the front door.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Api Error Enum ==
/// Unified error type for the upstream pipeline and the services built on it.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection or transport failure that survived every retry attempt
    #[error("request to {url} failed after {attempts} attempts: {source}")]
    Transport {
        url: String,
        attempts: u32,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream kept answering 429 until the attempt budget ran out
    #[error("rate limited by upstream after {attempts} attempts (retry after {retry_after_secs:?}s)")]
    RateLimited {
        attempts: u32,
        retry_after_secs: Option<u64>,
    },

    /// Upstream error with a parsable `{status:{message,status_code}}` envelope
    #[error("Riot API error {status_code}: {message}")]
    Upstream { status_code: u16, message: String },

    /// Upstream error whose body was not a valid envelope
    #[error("API request failed with status {status}: {body}")]
    UpstreamRaw { status: u16, body: String },

    /// Success body did not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Every routing path was tried and none produced a result
    #[error("not found after {attempted} attempts: {}", last_message(.last))]
    NotFound {
        attempted: usize,
        last: Option<Box<ApiError>>,
    },

    /// Invalid inbound request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

fn last_message(last: &Option<Box<ApiError>>) -> String {
    match last {
        Some(err) => err.to_string(),
        None => "no routing path available".to_string(),
    }
}

impl ApiError {
    /// Status code reported by upstream, when there was one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            ApiError::Upstream { status_code, .. } => Some(*status_code),
            ApiError::UpstreamRaw { status, .. } => Some(*status),
            ApiError::RateLimited { .. } => Some(429),
            _ => None,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Transport { .. }
            | ApiError::Upstream { .. }
            | ApiError::UpstreamRaw { .. }
            | ApiError::Decode(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the gateway.
pub type Result<T> = std::result::Result<T, ApiError>;
