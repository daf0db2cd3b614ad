//! Universal error handling for the API

use aide::OperationOutput;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use schemars::JsonSchema;
use serde::Serialize;

use crate::upstream::UpstreamError;

/// API error response envelope
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    /// Whether the client should retry the request
    pub allow_retry: bool,
    /// Error details
    error: ErrorBody,
}

/// Error body containing code and message
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    /// Machine-readable error code
    pub code: &'static str,
    /// Human-readable error message
    pub message: &'static str,
}

/// Application error type that wraps the API error response
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    inner: ApiErrorResponse,
}

impl AppError {
    /// Create a new application error
    #[must_use]
    pub const fn new(
        status: StatusCode,
        code: &'static str,
        msg: &'static str,
        retry: bool,
    ) -> Self {
        Self {
            status,
            inner: ApiErrorResponse {
                allow_retry: retry,
                error: ErrorBody { code, message: msg },
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error based on status code
        match self.status.as_u16() {
            400..=499 => tracing::warn!(
                "Client error: {} - {}",
                self.inner.error.code,
                self.inner.error.message
            ),
            500..=599 => tracing::error!(
                "Server error: {} - {}",
                self.inner.error.code,
                self.inner.error.message
            ),
            _ => {}
        }

        (self.status, Json(self.inner)).into_response()
    }
}

/// Convert upstream client errors to application errors
impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        match &err {
            UpstreamError::NotFound(id) => {
                tracing::debug!("Character not found upstream: {id}");
                Self::new(
                    StatusCode::NOT_FOUND,
                    "not_found",
                    "Character not found",
                    false,
                )
            }
            UpstreamError::Transport(msg) => {
                tracing::error!("Upstream transport failure: {msg}");
                Self::new(
                    StatusCode::BAD_GATEWAY,
                    "upstream_unavailable",
                    "Upstream character API unreachable",
                    true,
                )
            }
            UpstreamError::Decode(msg) => {
                tracing::error!("Upstream decode failure: {msg}");
                Self::new(
                    StatusCode::BAD_GATEWAY,
                    "upstream_decode_error",
                    "Upstream character API returned an unexpected response",
                    false,
                )
            }
            UpstreamError::Status { status } => {
                tracing::error!("Upstream returned status {status}");
                Self::new(
                    StatusCode::BAD_GATEWAY,
                    "upstream_error",
                    "Upstream character API error",
                    false,
                )
            }
        }
    }
}

impl OperationOutput for AppError {
    type Inner = ApiErrorResponse;

    fn operation_response(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Option<aide::openapi::Response> {
        Json::<ApiErrorResponse>::operation_response(ctx, operation)
    }
}
