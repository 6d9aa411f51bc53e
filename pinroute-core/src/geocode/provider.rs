//! Geocoder trait and the place it resolves to.

use async_trait::async_trait;
use geo::Coord;

use super::error::GeocodeError;

/// The first match a geocoder found for an address.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    /// Position of the match.
    pub location: Coord<f64>,
    /// Service-formatted name of the match, when provided.
    pub display_name: Option<String>,
}

impl GeocodedPlace {
    /// A place with no display name.
    #[must_use]
    pub const fn at(location: Coord<f64>) -> Self {
        Self {
            location,
            display_name: None,
        }
    }
}

/// Resolve an address to a single location.
///
/// Implementations issue one request per call and never retry. `Ok(None)`
/// means the service answered but had nothing usable for the address.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use geo::Coord;
/// use pinroute_core::{GeocodeError, GeocodedPlace, Geocoder};
///
/// struct Origin;
///
/// #[async_trait]
/// impl Geocoder for Origin {
///     async fn geocode(&self, address: &str) -> Result<Option<GeocodedPlace>, GeocodeError> {
///         if address.is_empty() {
///             return Ok(None);
///         }
///         Ok(Some(GeocodedPlace::at(Coord { x: 0.0, y: 0.0 })))
///     }
/// }
/// ```
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Look up `address` and return its first match.
    async fn geocode(&self, address: &str) -> Result<Option<GeocodedPlace>, GeocodeError>;
}

