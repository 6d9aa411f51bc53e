//! Event-driven controller tying the geocoder, the route service and the
//! map surface together.
//!
//! [`RoutePlanner`] owns the [`pinroute_core::PlannerState`] and is the only
//! thing that changes it. Service calls run as spawned Tokio tasks; their
//! results come back over a channel and are applied one at a time by
//! [`RoutePlanner::next_event`], so completion handlers never overlap.
//!
//! Every call returns a [`RequestHandle`] that can cancel it. A reset
//! cancels all outstanding work and discards anything that still arrives
//! from before it.

#![forbid(unsafe_code)]

mod config;
mod event;
mod handle;
mod planner;

pub use config::{AddressPrompt, AlertTexts, PlannerConfig};
pub use event::PlannerEvent;
pub use handle::{RequestHandle, RequestId};
pub use planner::{PlannerError, RoutePlanner};
