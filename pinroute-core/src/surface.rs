//! Rendering and notification seams.
//!
//! The planner never draws anything itself. It hands markers, overlays and
//! camera requests to a [`MapSurface`] and blocking notices to an
//! [`AlertSink`]. Overlay styling is a plain function of the segment so the
//! surface does not need to call back into the planner.

use std::fmt;

use geo::{BoundingRect, MultiPoint, Rect};

use crate::{ControlVisibility, RouteSegment, Waypoint};

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Self = Self(0, 0, 0);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Stroke used to draw a route overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub stroke: Rgb,
    /// Line width in screen points.
    pub width: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            stroke: Rgb::BLACK,
            width: 3.0,
        }
    }
}

/// Maps a segment to the style it is drawn with.
pub type StyleFn = fn(&RouteSegment) -> OverlayStyle;

/// Default overlay styling: a black stroke for every segment.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use geo::{Coord, LineString};
/// use pinroute_core::{RouteCandidate, RouteSegment, overlay_style};
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let segment = RouteSegment::from_candidate(
///     0,
///     origin,
///     origin,
///     RouteCandidate::new(0.0, Duration::ZERO, LineString::new(vec![])),
/// );
/// assert_eq!(overlay_style(&segment).stroke.to_string(), "#000000");
/// ```
#[must_use]
pub fn overlay_style(_segment: &RouteSegment) -> OverlayStyle {
    OverlayStyle::default()
}

/// What went wrong, for callers that react to alerts programmatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// The geocoding service failed.
    GeocodeFailed,
    /// The geocoder answered but had no location for the address.
    AddressNotFound,
    /// The route service answered without any route.
    RouteUnavailable,
}

/// A blocking, dismiss-only error notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
}

impl Alert {
    /// Construct an alert.
    pub fn new(kind: AlertKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Something that can draw markers and route overlays.
pub trait MapSurface {
    /// Replace the markers with `waypoints` and fit the camera around them.
    fn show_waypoints(&mut self, waypoints: &[Waypoint]);

    /// Draw `segment` on top of whatever is already shown.
    fn add_overlay(&mut self, segment: &RouteSegment, style: OverlayStyle);

    /// Remove every marker and overlay.
    fn clear(&mut self);

    /// Show or hide the route controls.
    fn update_controls(&mut self, _controls: ControlVisibility) {}
}

/// Something that can show a blocking error notice.
pub trait AlertSink {
    fn show_alert(&mut self, alert: &Alert);
}

/// Smallest rectangle containing every waypoint.
///
/// Returns `None` when `waypoints` is empty.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use pinroute_core::{Waypoint, bounding_rect};
///
/// let waypoints = [
///     Waypoint::new("A", Coord { x: -0.2, y: 51.4 }),
///     Waypoint::new("B", Coord { x: -0.1, y: 51.6 }),
/// ];
/// let rect = bounding_rect(&waypoints).expect("two waypoints");
/// assert_eq!(rect.min(), Coord { x: -0.2, y: 51.4 });
/// assert_eq!(rect.max(), Coord { x: -0.1, y: 51.6 });
/// ```
#[must_use]
pub fn bounding_rect(waypoints: &[Waypoint]) -> Option<Rect<f64>> {
    let points: MultiPoint<f64> = waypoints
        .iter()
        .map(|waypoint| geo::Point::from(waypoint.location()))
        .collect();
    points.bounding_rect()
}
