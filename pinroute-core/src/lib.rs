//! Core domain types for the Pinroute address planner.
//!
//! The crate holds everything that does not talk to the network or a
//! renderer: waypoints and their ordered store, the planner state snapshot,
//! shortest-alternative selection, and the traits through which the geocoder,
//! the route service and the map surface are reached.
//!
//! Coordinates are WGS84 with `x = longitude` and `y = latitude`.

#![forbid(unsafe_code)]

pub mod directions;
pub mod geocode;
pub mod route;
pub mod state;
pub mod store;
pub mod surface;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
mod waypoint;

pub use directions::{DirectionsError, DirectionsProvider, DirectionsRequest, TravelMode};
pub use geocode::{GeocodeError, GeocodedPlace, Geocoder};
pub use route::{RouteCandidate, RouteSegment, RouteSummary, select_shortest};
pub use state::{ControlVisibility, PlannerState};
pub use store::{WaypointPair, WaypointStore};
pub use surface::{
    Alert, AlertKind, AlertSink, MapSurface, OverlayStyle, Rgb, StyleFn, bounding_rect,
    overlay_style,
};
pub use waypoint::Waypoint;
