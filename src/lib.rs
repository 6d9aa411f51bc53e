//! Facade crate for the pinroute address-routing planner.
//!
//! This crate re-exports the core domain types and exposes the HTTP service
//! adapters and the planner controller behind feature flags.

#![forbid(unsafe_code)]

pub use pinroute_core::{
    Alert, AlertKind, AlertSink, ControlVisibility, DirectionsError, DirectionsProvider,
    DirectionsRequest, GeocodeError, GeocodedPlace, Geocoder, MapSurface, OverlayStyle,
    PlannerState, Rgb, RouteCandidate, RouteSegment, RouteSummary, StyleFn, TravelMode, Waypoint,
    WaypointStore, bounding_rect, overlay_style, select_shortest,
};

#[cfg(feature = "http")]
pub use pinroute_data::{
    ProviderBuildError,
    geocoding::{HttpGeocoder, HttpGeocoderConfig},
    routing::{HttpDirectionsProvider, HttpDirectionsProviderConfig},
};

#[cfg(feature = "planner")]
pub use pinroute_planner::{
    AddressPrompt, AlertTexts, PlannerConfig, PlannerError, PlannerEvent, RequestHandle,
    RequestId, RoutePlanner,
};
