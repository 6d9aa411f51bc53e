use geo::Coord;

/// A labelled location the user asked to visit.
///
/// The label is the address text exactly as entered; the location is the
/// first coordinate the geocoder returned for it.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use pinroute_core::Waypoint;
///
/// let waypoint = Waypoint::new("10 Downing St", Coord { x: -0.1276, y: 51.5034 });
///
/// assert_eq!(waypoint.label(), "10 Downing St");
/// assert_eq!(waypoint.latitude(), 51.5034);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    label: String,
    location: Coord<f64>,
}

impl Waypoint {
    /// Construct a waypoint from its label and coordinate.
    pub fn new(label: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            label: label.into(),
            location,
        }
    }

    /// Address text the waypoint was created from.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Geographic position.
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        self.location
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }
}
