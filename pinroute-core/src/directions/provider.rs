//! Directions provider trait and request description.

use std::fmt;

use async_trait::async_trait;
use geo::Coord;

use super::error::DirectionsError;
use crate::RouteCandidate;

/// How the route will be travelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TravelMode {
    #[default]
    Walking,
    Cycling,
    Driving,
}

impl TravelMode {
    /// Routing profile name understood by OSRM-style services.
    #[must_use]
    pub const fn profile(self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Cycling => "cycling",
            Self::Driving => "driving",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile())
    }
}

/// A single origin-destination query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionsRequest {
    pub from: Coord<f64>,
    pub to: Coord<f64>,
    pub mode: TravelMode,
    /// Ask the service for alternatives besides its preferred route.
    pub alternatives: bool,
}

impl DirectionsRequest {
    /// A walking request that asks for alternatives.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use pinroute_core::{DirectionsRequest, TravelMode};
    ///
    /// let from = Coord { x: 0.0, y: 0.0 };
    /// let request = DirectionsRequest::walking(from, Coord { x: 1.0, y: 1.0 });
    /// assert_eq!(request.mode, TravelMode::Walking);
    /// assert!(request.alternatives);
    /// ```
    #[must_use]
    pub const fn walking(from: Coord<f64>, to: Coord<f64>) -> Self {
        Self::new(from, to, TravelMode::Walking)
    }

    /// A request for `mode` that asks for alternatives.
    #[must_use]
    pub const fn new(from: Coord<f64>, to: Coord<f64>, mode: TravelMode) -> Self {
        Self {
            from,
            to,
            mode,
            alternatives: true,
        }
    }
}

/// Fetch candidate routes for one waypoint pair.
///
/// Implementations issue one service call per request and return every
/// candidate in the order the service produced them. An empty vector means
/// the service found no route.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use async_trait::async_trait;
/// use geo::LineString;
/// use pinroute_core::{DirectionsError, DirectionsProvider, DirectionsRequest, RouteCandidate};
///
/// struct StraightLine;
///
/// #[async_trait]
/// impl DirectionsProvider for StraightLine {
///     async fn directions(
///         &self,
///         request: &DirectionsRequest,
///     ) -> Result<Vec<RouteCandidate>, DirectionsError> {
///         let path = LineString::new(vec![request.from, request.to]);
///         Ok(vec![RouteCandidate::new(100.0, Duration::from_secs(80), path)])
///     }
/// }
/// ```
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    /// Return every candidate route for `request`.
    async fn directions(
        &self,
        request: &DirectionsRequest,
    ) -> Result<Vec<RouteCandidate>, DirectionsError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TravelMode::Walking, "walking")]
    #[case(TravelMode::Cycling, "cycling")]
    #[case(TravelMode::Driving, "driving")]
    fn profile_names(#[case] mode: TravelMode, #[case] expected: &str) {
        assert_eq!(mode.profile(), expected);
        assert_eq!(mode.to_string(), expected);
    }

    #[rstest]
    fn default_mode_is_walking() {
        let request = DirectionsRequest::new(
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 1.0, y: 0.0 },
            TravelMode::default(),
        );
        assert_eq!(request.mode, TravelMode::Walking);
        assert!(request.alternatives);
    }
}
