//! HTTP-based directions via an OSRM routing service.
//!
//! This module provides [`HttpDirectionsProvider`], an implementation of
//! [`pinroute_core::DirectionsProvider`] that fetches candidate routes from
//! the OSRM Route API.
//!
//! # Architecture
//!
//! Each [`pinroute_core::DirectionsRequest`] becomes one
//! `GET /route/v1/{profile}/{from};{to}` call with full GeoJSON geometry.
//! When the request asks for alternatives the service may return several
//! routes; all of them are handed back and the planner picks the shortest.
//!
//! # Example
//!
//! ```no_run
//! use geo::Coord;
//! use pinroute_core::{DirectionsProvider, DirectionsRequest};
//! use pinroute_data::routing::HttpDirectionsProvider;
//!
//! # async fn route() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = HttpDirectionsProvider::new("http://localhost:5000")?;
//! let request = DirectionsRequest::walking(
//!     Coord { x: -0.1276, y: 51.5034 },
//!     Coord { x: -0.1281, y: 51.5080 },
//! );
//!
//! let candidates = provider.directions(&request).await?;
//! println!("{} candidate routes", candidates.len());
//! # Ok(())
//! # }
//! ```

mod osrm;
mod provider;

pub use provider::{DEFAULT_ROUTER_URL, HttpDirectionsProvider, HttpDirectionsProviderConfig};
