//! Nominatim search response types.
//!
//! With `format=jsonv2` the search endpoint returns a JSON array of places.
//! Coordinates arrive as decimal strings.
//!
//! See: <https://nominatim.org/release-docs/latest/api/Search/>

use geo::Coord;
use pinroute_core::GeocodeError;
use serde::Deserialize;

/// One place from a Nominatim search response.
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    /// Latitude as a decimal string.
    pub lat: String,
    /// Longitude as a decimal string.
    pub lon: String,
    /// Full formatted name of the place.
    pub display_name: Option<String>,
}

impl SearchResult {
    /// Parse the coordinate, rejecting values outside WGS84 bounds.
    pub fn coordinate(&self) -> Result<Coord<f64>, GeocodeError> {
        let invalid = || GeocodeError::InvalidCoordinate {
            lat: self.lat.clone(),
            lon: self.lon.clone(),
        };
        let lat: f64 = self.lat.trim().parse().map_err(|_| invalid())?;
        let lon: f64 = self.lon.trim().parse().map_err(|_| invalid())?;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(invalid());
        }
        Ok(Coord { x: lon, y: lat })
    }
}
