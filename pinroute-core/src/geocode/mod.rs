//! Turn free-text addresses into coordinates.
//!
//! The [`Geocoder`] trait abstracts a forward-geocoding service. One call
//! issues exactly one lookup; only the first match is reported and callers
//! never see further candidates.
//!
//! Service failures are returned as [`GeocodeError`]. A lookup that succeeds
//! without a usable location returns `Ok(None)`.

mod error;
mod provider;

pub use error::GeocodeError;
pub use provider::{GeocodedPlace, Geocoder};
