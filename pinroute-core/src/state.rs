//! Planner state as an explicit snapshot.
//!
//! [`PlannerState`] is a value: each transition consumes the old snapshot and
//! returns the next one, so the state machine can be exercised without a
//! renderer or a network.

use crate::{Waypoint, WaypointStore};

/// Which route controls a user interface should offer.
///
/// Both controls are a pure function of the store size: visible once more
/// than one waypoint exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ControlVisibility {
    /// The "build route" action.
    pub build_route: bool,
    /// The "reset" action.
    pub reset: bool,
}

impl ControlVisibility {
    /// Derive visibility from a waypoint count.
    #[must_use]
    pub const fn for_count(count: usize) -> Self {
        let visible = count > 1;
        Self {
            build_route: visible,
            reset: visible,
        }
    }
}

/// Snapshot of the waypoints entered so far and the current epoch.
///
/// The epoch increases on every reset. Work started under an older epoch is
/// stale and must not touch the state.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use pinroute_core::{PlannerState, Waypoint};
///
/// let state = PlannerState::default()
///     .with_waypoint(Waypoint::new("A", Coord { x: 0.0, y: 0.0 }))
///     .with_waypoint(Waypoint::new("B", Coord { x: 1.0, y: 0.0 }));
/// assert!(state.controls().build_route);
///
/// let cleared = state.reset();
/// assert_eq!(cleared.waypoints().count(), 0);
/// assert_eq!(cleared.epoch(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlannerState {
    waypoints: WaypointStore,
    epoch: u64,
}

impl PlannerState {
    /// Append a waypoint and return the new snapshot.
    #[must_use]
    pub fn with_waypoint(mut self, waypoint: Waypoint) -> Self {
        self.waypoints.append(waypoint);
        self
    }

    /// Clear every waypoint and advance the epoch.
    #[must_use]
    pub fn reset(mut self) -> Self {
        self.waypoints.reset();
        self.epoch = self.epoch.wrapping_add(1);
        self
    }

    #[must_use]
    pub const fn waypoints(&self) -> &WaypointStore {
        &self.waypoints
    }

    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn controls(&self) -> ControlVisibility {
        ControlVisibility::for_count(self.waypoints.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::rstest;

    fn state_with(count: usize) -> PlannerState {
        (0..count).fold(PlannerState::default(), |state, i| {
            state.with_waypoint(Waypoint::new(
                format!("stop {i}"),
                Coord {
                    x: i as f64,
                    y: 0.0,
                },
            ))
        })
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, false)]
    #[case(2, true)]
    #[case(5, true)]
    fn controls_track_waypoint_count(#[case] count: usize, #[case] visible: bool) {
        let state = state_with(count);
        assert_eq!(state.waypoints().count(), count);
        assert_eq!(
            state.controls(),
            ControlVisibility {
                build_route: visible,
                reset: visible,
            }
        );
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(4)]
    fn reset_hides_controls_and_bumps_epoch(#[case] count: usize) {
        let state = state_with(count);
        let epoch = state.epoch();
        let cleared = state.reset();
        assert!(cleared.waypoints().is_empty());
        assert_eq!(cleared.controls(), ControlVisibility::default());
        assert_eq!(cleared.epoch(), epoch + 1);
    }
}
