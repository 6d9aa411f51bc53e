use thiserror::Error;

/// Errors from [`crate::directions::DirectionsProvider::directions`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionsError {
    /// The request never produced an HTTP response.
    #[error("network error contacting {url}: {message}")]
    NetworkError { url: String, message: String },
    /// The service did not answer within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },
    /// The service answered with a non-success status.
    #[error("route service at {url} returned HTTP {status}: {message}")]
    HttpError {
        url: String,
        status: u16,
        message: String,
    },
    /// The service rejected the query.
    #[error("route service error {code}: {message}")]
    ServiceError { code: String, message: String },
    /// The response body could not be decoded.
    #[error("failed to parse route service response: {message}")]
    ParseError { message: String },
}
