//! The route planner controller.

use std::collections::HashMap;
use std::future::Future;
use std::mem;
use std::sync::Arc;

use log::{debug, info, warn};
use pinroute_core::{
    AlertKind, AlertSink, DirectionsError, DirectionsProvider, DirectionsRequest, GeocodeError,
    GeocodedPlace, Geocoder, MapSurface, PlannerState, RouteCandidate, RouteSegment, RouteSummary,
    Waypoint, select_shortest,
};
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::{self, JoinError, JoinSet};
use tokio_util::sync::CancellationToken;

use crate::{AddressPrompt, PlannerConfig, PlannerEvent, RequestHandle, RequestId};


/// Errors raised when dispatching work.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    /// The planner was asked to start a request outside a Tokio runtime.
    #[error("planner requests must be started inside a Tokio runtime")]
    NoRuntime,
}

#[derive(Debug)]
enum Outcome {
    Geocoded {
        address: String,
        result: Result<Option<GeocodedPlace>, GeocodeError>,
    },
    Routed {
        pair: usize,
        request: DirectionsRequest,
        result: Result<Vec<RouteCandidate>, DirectionsError>,
    },
    Cancelled,
}

#[derive(Debug)]
struct Completion {
    id: RequestId,
    epoch: u64,
    outcome: Outcome,
}

/// What a running task was asked to do, kept until it is joined.
#[derive(Debug)]
struct Pending {
    id: RequestId,
    epoch: u64,
    work: PendingWork,
}

#[derive(Debug)]
enum PendingWork {
    Geocode { address: String },
    Route { pair: usize },
}

/// Coordinates address lookups, route building and rendering.
///
/// Requests are dispatched onto the ambient Tokio runtime and their results
/// are applied when the owner drives [`Self::next_event`] or
/// [`Self::run_until_idle`]. Only those methods touch the surface on behalf
/// of a finished request.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use geo::Coord;
/// use pinroute_core::test_support::{RecordingSurface, StubDirections, StubGeocoder};
/// use pinroute_planner::{PlannerConfig, RoutePlanner};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let geocoder = StubGeocoder::default()
///     .with_place("A", Coord { x: 0.0, y: 0.0 })
///     .with_place("B", Coord { x: 0.01, y: 0.0 });
/// let mut planner = RoutePlanner::new(
///     Arc::new(geocoder),
///     Arc::new(StubDirections::straight_line()),
///     RecordingSurface::default(),
///     PlannerConfig::default(),
/// );
///
/// planner.add_address("A").unwrap();
/// planner.add_address("B").unwrap();
/// planner.run_until_idle().await;
/// planner.build_route().unwrap();
/// planner.run_until_idle().await;
///
/// assert_eq!(planner.surface().overlays.len(), 1);
/// # });
/// ```
pub struct RoutePlanner<S> {
    geocoder: Arc<dyn Geocoder>,
    directions: Arc<dyn DirectionsProvider>,
    surface: S,
    config: PlannerConfig,
    state: PlannerState,
    epoch_token: CancellationToken,
    next_id: u64,
    tasks: JoinSet<Completion>,
    pending: HashMap<task::Id, Pending>,
    segments: Vec<RouteSegment>,
}

impl<S> RoutePlanner<S>
where
    S: MapSurface + AlertSink,
{
    /// Create a planner with an empty store.
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        directions: Arc<dyn DirectionsProvider>,
        mut surface: S,
        config: PlannerConfig,
    ) -> Self {
        let state = PlannerState::default();
        surface.update_controls(state.controls());
        Self {
            geocoder,
            directions,
            surface,
            config,
            state,
            epoch_token: CancellationToken::new(),
            next_id: 0,
            tasks: JoinSet::new(),
            pending: HashMap::new(),
            segments: Vec::new(),
        }
    }

    /// Look up `address` and append it as a waypoint once it resolves.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::NoRuntime`] when called outside a Tokio
    /// runtime.
    pub fn add_address(
        &mut self,
        address: impl Into<String>,
    ) -> Result<RequestHandle, PlannerError> {
        let runtime = current_runtime()?;
        let address = address.into();
        let handle = self.issue();
        debug!("request {} geocodes {address:?}", handle.id());

        let geocoder = Arc::clone(&self.geocoder);
        let work = PendingWork::Geocode {
            address: address.clone(),
        };
        self.dispatch(&runtime, &handle, work, async move {
            let result = geocoder.geocode(&address).await;
            Outcome::Geocoded { address, result }
        });
        Ok(handle)
    }

    /// Request directions for every consecutive waypoint pair and fit the
    /// camera to the waypoints.
    ///
    /// With fewer than two waypoints nothing happens: no request is issued,
    /// the camera stays where it is and the returned list is empty.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::NoRuntime`] when called outside a Tokio
    /// runtime.
    pub fn build_route(&mut self) -> Result<Vec<RequestHandle>, PlannerError> {
        let runtime = current_runtime()?;
        if !self.state.waypoints().can_route() {
            debug!("not routing {} waypoints", self.state.waypoints().count());
            return Ok(Vec::new());
        }
        let mode = self.config.travel_mode;
        let requests: Vec<(usize, DirectionsRequest)> = self
            .state
            .waypoints()
            .pairs()
            .map(|pair| {
                let (from, to) = pair.coordinates();
                (pair.index, DirectionsRequest::new(from, to, mode))
            })
            .collect();

        let mut handles = Vec::with_capacity(requests.len());
        for (pair, request) in requests {
            let handle = self.issue();
            debug!("request {} routes pair {pair} by {mode}", handle.id());
            let directions = Arc::clone(&self.directions);
            self.dispatch(&runtime, &handle, PendingWork::Route { pair }, async move {
                let result = directions.directions(&request).await;
                Outcome::Routed {
                    pair,
                    request,
                    result,
                }
            });
            handles.push(handle);
        }

        self.surface.show_waypoints(self.state.waypoints().as_slice());
        info!(
            "dispatched {} directions requests for {} waypoints",
            handles.len(),
            self.state.waypoints().count()
        );
        Ok(handles)
    }

    /// Clear every waypoint and overlay and abandon outstanding requests.
    ///
    /// Results of requests started before the reset are never applied.
    pub fn reset(&mut self) {
        self.epoch_token.cancel();
        self.epoch_token = CancellationToken::new();
        self.state = mem::take(&mut self.state).reset();
        self.segments.clear();
        self.surface.clear();
        self.surface.update_controls(self.state.controls());
        info!("planner reset; now at epoch {}", self.state.epoch());
    }

    /// Wait for the next request to finish and apply its result.
    ///
    /// Returns `None` once nothing is in flight. A request whose task
    /// panicked still yields an event.
    pub async fn next_event(&mut self) -> Option<PlannerEvent> {
        loop {
            match self.tasks.join_next_with_id().await? {
                Ok((task, completion)) => {
                    self.pending.remove(&task);
                    return Some(self.apply(completion));
                }
                Err(error) => match self.pending.remove(&error.id()) {
                    Some(pending) => return Some(self.apply_abort(pending, &error)),
                    None => warn!("unknown request task {} ended: {error}", error.id()),
                },
            }
        }
    }

    /// Apply results until nothing is in flight.
    pub async fn run_until_idle(&mut self) -> Vec<PlannerEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.next_event().await {
            events.push(event);
        }
        events
    }

    #[must_use]
    pub const fn state(&self) -> &PlannerState {
        &self.state
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consume the planner and return its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Text to show when asking for the next address.
    #[must_use]
    pub const fn prompt(&self) -> &AddressPrompt {
        &self.config.prompt
    }

    /// Number of requests whose results have not been applied yet.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Totals over the segments drawn since the last reset.
    #[must_use]
    pub fn summary(&self) -> RouteSummary {
        RouteSummary::of(&self.segments)
    }

    fn issue(&mut self) -> RequestHandle {
        let id = RequestId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        RequestHandle::new(id, self.epoch_token.child_token())
    }

    fn dispatch<F>(
        &mut self,
        runtime: &Handle,
        handle: &RequestHandle,
        work: PendingWork,
        future: F,
    ) where
        F: Future<Output = Outcome> + Send + 'static,
    {
        let id = handle.id();
        let epoch = self.state.epoch();
        let token = handle.token();
        let task = self.tasks.spawn_on(
            async move {
                let outcome = tokio::select! {
                    biased;
                    () = token.cancelled() => Outcome::Cancelled,
                    outcome = future => outcome,
                };
                Completion { id, epoch, outcome }
            },
            runtime,
        );
        self.pending.insert(task.id(), Pending { id, epoch, work });
    }

    fn apply(&mut self, completion: Completion) -> PlannerEvent {
        let Completion { id, epoch, outcome } = completion;
        let current = self.state.epoch();
        match outcome {
            Outcome::Cancelled => {
                debug!("request {id} was cancelled");
                PlannerEvent::Cancelled { id }
            }
            _ if epoch != current => {
                debug!("discarding request {id} from epoch {epoch}; now at {current}");
                PlannerEvent::Discarded { id }
            }
            Outcome::Geocoded { address, result } => self.apply_geocode(id, address, result),
            Outcome::Routed {
                pair,
                request,
                result,
            } => self.apply_directions(id, pair, request, result),
        }
    }

    /// Handle a request task that ended without a result.
    ///
    /// A failed lookup alerts like any other geocoding failure; a failed
    /// route is logged.
    fn apply_abort(&mut self, pending: Pending, error: &JoinError) -> PlannerEvent {
        let Pending { id, epoch, work } = pending;
        let current = self.state.epoch();
        if epoch != current {
            debug!("request {id} from epoch {epoch} ended without a result: {error}");
            return PlannerEvent::Discarded { id };
        }
        let reason = error.to_string();
        match work {
            PendingWork::Geocode { address } => {
                warn!("geocoding {address:?} ended without a result: {reason}");
                self.alert(AlertKind::GeocodeFailed);
                PlannerEvent::Aborted {
                    id,
                    pair: None,
                    reason,
                }
            }
            PendingWork::Route { pair } => {
                warn!("directions for pair {pair} ended without a result: {reason}");
                PlannerEvent::Aborted {
                    id,
                    pair: Some(pair),
                    reason,
                }
            }
        }
    }

    fn apply_geocode(
        &mut self,
        id: RequestId,
        address: String,
        result: Result<Option<GeocodedPlace>, GeocodeError>,
    ) -> PlannerEvent {
        match result {
            Ok(Some(place)) => {
                let waypoint = Waypoint::new(address, place.location);
                self.state = mem::take(&mut self.state).with_waypoint(waypoint.clone());
                let count = self.state.waypoints().count();
                self.surface.update_controls(self.state.controls());
                self.surface.show_waypoints(self.state.waypoints().as_slice());
                info!(
                    "added waypoint {:?} at ({}, {}); {count} in total",
                    waypoint.label(),
                    waypoint.latitude(),
                    waypoint.longitude()
                );
                PlannerEvent::WaypointAdded {
                    id,
                    waypoint,
                    count,
                }
            }
            Ok(None) => {
                if self.config.alert_on_empty_geocode {
                    self.alert(AlertKind::AddressNotFound);
                } else {
                    debug!("no location for {address:?}; dropping it");
                }
                PlannerEvent::AddressNotFound { id, address }
            }
            Err(error) => {
                warn!("geocoding {address:?} failed: {error}");
                self.alert(AlertKind::GeocodeFailed);
                PlannerEvent::GeocodeFailed { id, address, error }
            }
        }
    }

    fn apply_directions(
        &mut self,
        id: RequestId,
        pair: usize,
        request: DirectionsRequest,
        result: Result<Vec<RouteCandidate>, DirectionsError>,
    ) -> PlannerEvent {
        let candidates = match result {
            Ok(candidates) => candidates,
            Err(error) => {
                warn!("directions for pair {pair} failed: {error}");
                return PlannerEvent::DirectionsFailed { id, pair, error };
            }
        };
        let Some(best) = select_shortest(&candidates) else {
            self.alert(AlertKind::RouteUnavailable);
            return PlannerEvent::RouteUnavailable { id, pair };
        };

        let segment = RouteSegment::from_candidate(pair, request.from, request.to, best.clone());
        let style = (self.config.style)(&segment);
        self.surface.add_overlay(&segment, style);
        debug!(
            "pair {pair}: drew {:.0} m of {} alternatives",
            segment.distance_m,
            candidates.len()
        );
        self.segments.push(segment.clone());
        PlannerEvent::SegmentRendered { id, segment }
    }

    fn alert(&mut self, kind: AlertKind) {
        let alert = self.config.alerts.alert(kind);
        self.surface.show_alert(&alert);
    }
}

fn current_runtime() -> Result<Handle, PlannerError> {
    Handle::try_current().map_err(|_| PlannerError::NoRuntime)
}
