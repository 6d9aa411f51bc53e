//! HTTP-based geocoding via a Nominatim-compatible search service.
//!
//! This module provides [`HttpGeocoder`], an implementation of
//! [`pinroute_core::Geocoder`] that resolves free-text addresses through the
//! Nominatim `search` endpoint, asking for a single result.
//!
//! # Example
//!
//! ```no_run
//! use pinroute_data::geocoding::{HttpGeocoder, HttpGeocoderConfig};
//! use pinroute_core::Geocoder;
//! use std::time::Duration;
//!
//! # async fn lookup() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpGeocoderConfig::new("https://nominatim.openstreetmap.org")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_user_agent("my-app/1.0");
//! let geocoder = HttpGeocoder::with_config(config)?;
//!
//! if let Some(place) = geocoder.geocode("10 Downing St, London").await? {
//!     println!("found at {:?}", place.location);
//! }
//! # Ok(())
//! # }
//! ```

mod nominatim;
mod provider;

pub use provider::{DEFAULT_GEOCODER_URL, HttpGeocoder, HttpGeocoderConfig};
