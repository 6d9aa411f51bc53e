use pinroute_core::{DirectionsError, GeocodeError, RouteSegment, Waypoint};

use crate::RequestId;

/// What applying one completion did.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannerEvent {
    /// A geocode succeeded and the waypoint was appended.
    WaypointAdded {
        id: RequestId,
        waypoint: Waypoint,
        /// Store size after the append.
        count: usize,
    },
    /// The geocoder answered without a location.
    AddressNotFound { id: RequestId, address: String },
    /// The geocoding service failed; an alert was shown.
    GeocodeFailed {
        id: RequestId,
        address: String,
        error: GeocodeError,
    },
    /// The shortest candidate for a pair was drawn.
    SegmentRendered { id: RequestId, segment: RouteSegment },
    /// The route service had no route for a pair; an alert was shown.
    RouteUnavailable { id: RequestId, pair: usize },
    /// The route service failed for a pair. Logged only.
    DirectionsFailed {
        id: RequestId,
        pair: usize,
        error: DirectionsError,
    },
    /// The request task ended without a result, for instance because the
    /// service panicked. `pair` is set for directions requests.
    Aborted {
        id: RequestId,
        pair: Option<usize>,
        reason: String,
    },
    /// The request was cancelled before it finished.
    Cancelled { id: RequestId },
    /// The request finished after a reset and its result was dropped.
    Discarded { id: RequestId },
}

impl PlannerEvent {
    /// Request the event belongs to.
    #[must_use]
    pub const fn id(&self) -> RequestId {
        match self {
            Self::WaypointAdded { id, .. }
            | Self::AddressNotFound { id, .. }
            | Self::GeocodeFailed { id, .. }
            | Self::SegmentRendered { id, .. }
            | Self::RouteUnavailable { id, .. }
            | Self::DirectionsFailed { id, .. }
            | Self::Aborted { id, .. }
            | Self::Cancelled { id }
            | Self::Discarded { id } => *id,
        }
    }
}
