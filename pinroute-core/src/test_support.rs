//! Test doubles for the geocoder, the route service and the map surface.
//!
//! None of these touch the network. The directions stub can be gated so a
//! test can hold requests in flight and release them later.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use geo::{Coord, LineString};
use tokio::sync::Semaphore;

use crate::{
    Alert, AlertSink, ControlVisibility, DirectionsError, DirectionsProvider, DirectionsRequest,
    GeocodeError, GeocodedPlace, Geocoder, MapSurface, OverlayStyle, RouteCandidate, RouteSegment,
    Waypoint,
};

#[derive(Debug, Clone)]
enum StubGeocode {
    Found(Coord<f64>),
    Empty,
    Error(GeocodeError),
}

/// Geocoder answering from a fixed address table.
///
/// Unknown addresses resolve to `Ok(None)`.
///
/// # Example
///
/// ```
/// use geo::Coord;
/// use pinroute_core::test_support::StubGeocoder;
///
/// let geocoder = StubGeocoder::default()
///     .with_place("10 Downing St", Coord { x: -0.1276, y: 51.5034 });
/// assert!(geocoder.calls().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct StubGeocoder {
    responses: HashMap<String, StubGeocode>,
    calls: Mutex<Vec<String>>,
}

impl StubGeocoder {
    /// Resolve `address` to `location`.
    #[must_use]
    pub fn with_place(mut self, address: impl Into<String>, location: Coord<f64>) -> Self {
        self.responses
            .insert(address.into(), StubGeocode::Found(location));
        self
    }

    /// Answer `address` successfully but without a location.
    #[must_use]
    pub fn with_empty(mut self, address: impl Into<String>) -> Self {
        self.responses.insert(address.into(), StubGeocode::Empty);
        self
    }

    /// Fail lookups of `address` with `error`.
    #[must_use]
    pub fn with_error(mut self, address: impl Into<String>, error: GeocodeError) -> Self {
        self.responses
            .insert(address.into(), StubGeocode::Error(error));
        self
    }

    /// Addresses looked up so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<GeocodedPlace>, GeocodeError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(address.to_owned());
        match self.responses.get(address) {
            Some(StubGeocode::Found(location)) => Ok(Some(GeocodedPlace::at(*location))),
            Some(StubGeocode::Error(error)) => Err(error.clone()),
            Some(StubGeocode::Empty) | None => Ok(None),
        }
    }
}

#[derive(Debug, Clone)]
enum StubRoutes {
    Straight(Vec<f64>),
    Fixed(Vec<RouteCandidate>),
    Error(DirectionsError),
}

/// Releases requests held by a gated [`StubDirections`].
///
/// Held requests wait in one lane per origin coordinate, so a test can
/// finish a later pair before an earlier one.
#[derive(Debug, Clone, Default)]
pub struct DirectionsGate {
    lanes: Arc<Mutex<GateLanes>>,
}

#[derive(Debug, Default)]
struct GateLanes {
    opened: bool,
    lanes: Vec<(Coord<f64>, Arc<Semaphore>)>,
}

impl DirectionsGate {
    /// Let one pending or future request starting at `from` complete.
    pub fn release_from(&self, from: Coord<f64>) {
        self.lane(from).add_permits(1);
    }

    /// Let every pending and future request complete.
    pub fn release_all(&self) {
        let mut lanes = self.lanes.lock().unwrap_or_else(PoisonError::into_inner);
        lanes.opened = true;
        for (_, lane) in &lanes.lanes {
            lane.close();
        }
    }

    async fn pass(&self, from: Coord<f64>) {
        // A closed lane means the gate was opened for good.
        if let Ok(permit) = self.lane(from).acquire().await {
            permit.forget();
        }
    }

    fn lane(&self, from: Coord<f64>) -> Arc<Semaphore> {
        let mut lanes = self.lanes.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((_, lane)) = lanes.lanes.iter().find(|(origin, _)| *origin == from) {
            return Arc::clone(lane);
        }
        let lane = Arc::new(Semaphore::new(0));
        if lanes.opened {
            lane.close();
        }
        lanes.lanes.push((from, Arc::clone(&lane)));
        lane
    }
}

/// Directions provider returning pre-configured candidates.
///
/// Every request is recorded so tests can assert how many were issued and
/// for which pairs.
#[derive(Debug)]
pub struct StubDirections {
    routes: StubRoutes,
    gate: Option<DirectionsGate>,
    requests: Mutex<Vec<DirectionsRequest>>,
}

impl StubDirections {
    /// Answer each request with straight-line candidates of the given
    /// lengths, in order.
    #[must_use]
    pub fn straight_lines(distances_m: Vec<f64>) -> Self {
        Self::from_routes(StubRoutes::Straight(distances_m))
    }

    /// Answer each request with one straight-line candidate.
    #[must_use]
    pub fn straight_line() -> Self {
        Self::straight_lines(vec![100.0])
    }

    /// Answer each request with exactly `candidates`.
    #[must_use]
    pub fn with_candidates(candidates: Vec<RouteCandidate>) -> Self {
        Self::from_routes(StubRoutes::Fixed(candidates))
    }

    /// Answer each request with no candidates.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::with_candidates(Vec::new())
    }

    /// Fail each request with `error`.
    #[must_use]
    pub fn with_error(error: DirectionsError) -> Self {
        Self::from_routes(StubRoutes::Error(error))
    }

    /// Hold every request until the returned gate releases it.
    #[must_use]
    pub fn gated(mut self) -> (Self, DirectionsGate) {
        let gate = DirectionsGate::default();
        self.gate = Some(gate.clone());
        (self, gate)
    }

    /// Requests received so far, in call order.
    #[must_use]
    pub fn requests(&self) -> Vec<DirectionsRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    const fn from_routes(routes: StubRoutes) -> Self {
        Self {
            routes,
            gate: None,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl DirectionsProvider for StubDirections {
    async fn directions(
        &self,
        request: &DirectionsRequest,
    ) -> Result<Vec<RouteCandidate>, DirectionsError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(*request);
        if let Some(gate) = &self.gate {
            gate.pass(request.from).await;
        }
        match &self.routes {
            StubRoutes::Straight(distances) => Ok(distances
                .iter()
                .map(|&distance_m| straight_candidate(request, distance_m))
                .collect()),
            StubRoutes::Fixed(candidates) => Ok(candidates.clone()),
            StubRoutes::Error(error) => Err(error.clone()),
        }
    }
}

fn straight_candidate(request: &DirectionsRequest, distance_m: f64) -> RouteCandidate {
    RouteCandidate::new(
        distance_m,
        Duration::from_secs_f64(distance_m / 1.4),
        LineString::new(vec![request.from, request.to]),
    )
}

/// Surface and alert sink that records every call.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Markers currently shown.
    pub markers: Vec<Waypoint>,
    /// Overlays currently drawn, in the order they were added.
    pub overlays: Vec<(RouteSegment, OverlayStyle)>,
    /// Number of camera fits requested.
    pub camera_fits: usize,
    /// Number of times everything was cleared.
    pub clears: usize,
    /// Latest control visibility.
    pub controls: ControlVisibility,
    /// Alerts shown so far.
    pub alerts: Vec<Alert>,
}

impl MapSurface for RecordingSurface {
    fn show_waypoints(&mut self, waypoints: &[Waypoint]) {
        self.markers = waypoints.to_vec();
        self.camera_fits += 1;
    }

    fn add_overlay(&mut self, segment: &RouteSegment, style: OverlayStyle) {
        self.overlays.push((segment.clone(), style));
    }

    fn clear(&mut self) {
        self.markers.clear();
        self.overlays.clear();
        self.clears += 1;
    }

    fn update_controls(&mut self, controls: ControlVisibility) {
        self.controls = controls;
    }
}

impl AlertSink for RecordingSurface {
    fn show_alert(&mut self, alert: &Alert) {
        self.alerts.push(alert.clone());
    }
}
