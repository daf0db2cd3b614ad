//! Error types for the upstream character API client

use thiserror::Error;

/// Errors surfaced by [`super::CharacterApi`] implementations
///
/// `NotFound` gets a dedicated variant because callers distinguish "no such
/// character" from "upstream misbehaved". Failures are propagated unmodified
/// to the caller; the client performs no retries.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Upstream reported no character with this identifier
    #[error("character {0} not found upstream")]
    NotFound(u64),

    /// Upstream returned a non-success status other than 404
    #[error("upstream returned status {status}")]
    Status {
        /// HTTP status code reported by upstream
        status: u16,
    },

    /// The request never produced a response (network unreachable, timeout)
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest_middleware::Error),

    /// The response body could not be decoded into the expected shape
    #[error("failed to decode upstream response: {0}")]
    Decode(#[from] reqwest::Error),
}
