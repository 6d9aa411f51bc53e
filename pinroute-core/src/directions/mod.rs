//! Request candidate paths between two coordinates.
//!
//! The [`DirectionsProvider`] trait abstracts a turn-by-turn routing service.
//! A request names an origin, a destination, a [`TravelMode`] and whether
//! alternative routes are wanted; the provider answers with every candidate
//! the service returned.
//!
//! An empty candidate list means the service had no route for the pair.
//! Transport and service failures are reported as [`DirectionsError`].

mod error;
mod provider;

pub use error::DirectionsError;
pub use provider::{DirectionsProvider, DirectionsRequest, TravelMode};
