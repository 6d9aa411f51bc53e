use thiserror::Error;

/// Errors from [`crate::geocode::Geocoder::geocode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    /// The request never produced an HTTP response.
    #[error("network error contacting {url}: {message}")]
    NetworkError { url: String, message: String },
    /// The service did not answer within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },
    /// The service answered with a non-success status.
    #[error("geocoder at {url} returned HTTP {status}: {message}")]
    HttpError {
        url: String,
        status: u16,
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to parse geocoder response: {message}")]
    ParseError { message: String },
    /// The service returned a coordinate outside WGS84 bounds.
    #[error("geocoder returned an invalid coordinate ({lat}, {lon})")]
    InvalidCoordinate { lat: String, lon: String },
}
