//! Shared HTTP client construction.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

/// Default user agent for outbound requests.
///
/// Public Nominatim instances reject requests without an identifying agent.
pub const DEFAULT_USER_AGENT: &str = "pinroute/0.1";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Error type for HTTP provider construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// The configured base URL could not be parsed.
    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

pub(crate) fn build_client(
    user_agent: &str,
    timeout: Duration,
) -> Result<Client, ProviderBuildError> {
    Client::builder()
        .user_agent(user_agent)
        .connect_timeout(timeout)
        .timeout(timeout)
        .build()
        .map_err(ProviderBuildError::HttpClient)
}

/// Parse `base_url` and append `path` segments after any existing path.
pub(crate) fn endpoint(base_url: &str, path: &[&str]) -> Result<url::Url, ProviderBuildError> {
    let invalid = |source| ProviderBuildError::InvalidBaseUrl {
        url: base_url.to_owned(),
        source,
    };
    let mut url = url::Url::parse(base_url).map_err(invalid)?;
    url.path_segments_mut()
        .map_err(|()| invalid(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .extend(path);
    Ok(url)
}
