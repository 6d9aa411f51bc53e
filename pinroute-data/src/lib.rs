//! Service adapters for the Pinroute planner.
//!
//! Responsibilities:
//! - Implement [`pinroute_core::Geocoder`] over a Nominatim-compatible
//!   search endpoint.
//! - Implement [`pinroute_core::DirectionsProvider`] over an OSRM-compatible
//!   route endpoint.
//! - Encapsulate wire formats and map transport failures onto the core
//!   error types.
//!
//! Boundaries:
//! - Do not encode planner rules (live in `pinroute-planner`).
//! - No retries and no caching; one call in, one request out.
//!
//! Invariants:
//! - Clients are `Send + Sync` and cheap to share behind an `Arc`.
//! - No global mutable state.

#![forbid(unsafe_code)]

pub mod geocoding;
mod http;
pub mod routing;

pub use http::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, ProviderBuildError};
