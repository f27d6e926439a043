//! Page retrieval error types.

use thiserror::Error;

/// Errors that can occur while downloading documentation pages.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport error (connect, timeout, body decoding).
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code returned by the server.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// The server returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The fetch task ended without producing a result.
    #[error("fetch task aborted")]
    Aborted,
}
