//! HTTP-based `DirectionsProvider` using OSRM's Route API.
//!
//! OSRM answers rejected queries with a non-success status and a JSON body
//! carrying a `code`. The body is decoded before the status is considered so
//! `NoRoute` can be told apart from real failures.

use std::time::Duration;

use async_trait::async_trait;
use geo::{Coord, LineString};
use log::debug;
use pinroute_core::{DirectionsError, DirectionsProvider, DirectionsRequest, RouteCandidate};
use reqwest::Client;
use url::Url;

use super::osrm::{OsrmRoute, RouteResponse};
use crate::http::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, ProviderBuildError, build_client, endpoint};

/// Local OSRM instance started with its default port.
pub const DEFAULT_ROUTER_URL: &str = "http://localhost:5000";

/// Configuration for [`HttpDirectionsProvider`].
#[derive(Debug, Clone)]
pub struct HttpDirectionsProviderConfig {
    /// Base URL for the OSRM service (e.g., `"http://localhost:5000"`).
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpDirectionsProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ROUTER_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpDirectionsProviderConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Directions provider backed by an OSRM route endpoint.
#[derive(Debug)]
pub struct HttpDirectionsProvider {
    client: Client,
    config: HttpDirectionsProviderConfig,
    route_url: Url,
}

impl HttpDirectionsProvider {
    /// Create a provider with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client fails
    /// to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpDirectionsProviderConfig::new(base_url))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client fails
    /// to build.
    pub fn with_config(config: HttpDirectionsProviderConfig) -> Result<Self, ProviderBuildError> {
        let route_url = endpoint(&config.base_url, &["route", "v1"])?;
        let client = build_client(&config.user_agent, config.timeout)?;
        Ok(Self {
            client,
            config,
            route_url,
        })
    }

    /// Build the OSRM Route API URL for `request`.
    ///
    /// The URL format is
    /// `{base_url}/route/v1/{profile}/{lon},{lat};{lon},{lat}` followed by
    /// the alternatives, overview and geometry options.
    fn build_route_url(&self, request: &DirectionsRequest) -> Url {
        let coords = format!(
            "{},{};{},{}",
            request.from.x, request.from.y, request.to.x, request.to.y
        );
        let mut url = self.route_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(request.mode.profile()).push(&coords);
        }
        url.query_pairs_mut()
            .append_pair("alternatives", &request.alternatives.to_string())
            .append_pair("overview", "full")
            .append_pair("geometries", "geojson");
        url
    }

    /// Convert a reqwest error to a `DirectionsError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &Url) -> DirectionsError {
        if error.is_timeout() {
            return DirectionsError::Timeout {
                url: url.to_string(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return DirectionsError::HttpError {
                url: url.to_string(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        DirectionsError::NetworkError {
            url: url.to_string(),
            message: error.to_string(),
        }
    }

    /// Convert an OSRM response to route candidates.
    ///
    /// `NoRoute` and an `Ok` response without routes both become an empty
    /// list. Routes with a negative or non-finite distance or duration are
    /// dropped, as are durations too long for [`Duration`].
    fn convert_response(
        response: RouteResponse,
    ) -> Result<Vec<RouteCandidate>, DirectionsError> {
        if response.is_no_route() {
            return Ok(Vec::new());
        }
        if !response.is_ok() {
            return Err(DirectionsError::ServiceError {
                code: response.code,
                message: response.message.unwrap_or_default(),
            });
        }

        Ok(response
            .routes
            .unwrap_or_default()
            .into_iter()
            .filter_map(Self::convert_route)
            .collect())
    }

    fn convert_route(route: OsrmRoute) -> Option<RouteCandidate> {
        let duration = Duration::try_from_secs_f64(route.duration)
            .ok()
            .filter(|_| route.distance >= 0.0 && route.distance.is_finite());
        let Some(duration) = duration else {
            debug!(
                "dropping OSRM route with distance {} and duration {}",
                route.distance, route.duration
            );
            return None;
        };
        let path: LineString<f64> = route
            .geometry
            .coordinates
            .into_iter()
            .map(|[x, y]| Coord { x, y })
            .collect();
        Some(RouteCandidate::new(route.distance, duration, path))
    }
}

#[async_trait]
impl DirectionsProvider for HttpDirectionsProvider {
    async fn directions(
        &self,
        request: &DirectionsRequest,
    ) -> Result<Vec<RouteCandidate>, DirectionsError> {
        let url = self.build_route_url(request);
        debug!("requesting {} directions via {url}", request.mode);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        match serde_json::from_str::<RouteResponse>(&body) {
            Ok(parsed) => Self::convert_response(parsed),
            Err(_) if !status.is_success() => Err(DirectionsError::HttpError {
                url: url.to_string(),
                status: status.as_u16(),
                message: body,
            }),
            Err(err) => Err(DirectionsError::ParseError {
                message: err.to_string(),
            }),
        }
    }
}
