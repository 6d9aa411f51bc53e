//! Ordered, append-only collection of waypoints.
//!
//! Insertion order is visit order. The store only ever grows one waypoint at
//! a time or is cleared entirely; there is no reordering and no removal of a
//! single element.

use std::slice;

use geo::Coord;

use crate::Waypoint;

/// Ordered waypoints in the order they were entered.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use pinroute_core::{Waypoint, WaypointStore};
///
/// let mut store = WaypointStore::default();
/// store.append(Waypoint::new("A", Coord { x: 0.0, y: 0.0 }));
/// store.append(Waypoint::new("B", Coord { x: 1.0, y: 1.0 }));
///
/// assert_eq!(store.count(), 2);
/// assert_eq!(store.pairs().count(), 1);
///
/// store.reset();
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaypointStore {
    waypoints: Vec<Waypoint>,
}

/// Two consecutive waypoints and the index of the first one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaypointPair<'a> {
    /// Index of `from` in the store; `to` sits at `index + 1`.
    pub index: usize,
    pub from: &'a Waypoint,
    pub to: &'a Waypoint,
}

impl WaypointPair<'_> {
    /// Coordinates of both ends, origin first.
    #[must_use]
    pub const fn coordinates(&self) -> (Coord<f64>, Coord<f64>) {
        (self.from.location(), self.to.location())
    }
}

impl WaypointStore {
    /// Add a waypoint after every existing one.
    pub fn append(&mut self, waypoint: Waypoint) {
        self.waypoints.push(waypoint);
    }

    /// Drop every waypoint.
    ///
    /// Callers are responsible for clearing whatever markers and overlays
    /// were drawn from the previous contents.
    pub fn reset(&mut self) {
        self.waypoints.clear();
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.waypoints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Whether enough waypoints exist to request directions.
    #[must_use]
    pub fn can_route(&self) -> bool {
        self.waypoints.len() >= 2
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Waypoint> {
        self.waypoints.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Consecutive pairs `(0, 1), (1, 2), ..` in visit order.
    ///
    /// Yields nothing when fewer than two waypoints are stored.
    pub fn pairs(&self) -> impl DoubleEndedIterator<Item = WaypointPair<'_>> + '_ {
        self.waypoints
            .windows(2)
            .enumerate()
            .filter_map(|(index, window)| match window {
                [from, to] => Some(WaypointPair { index, from, to }),
                _ => None,
            })
    }
}

impl<'a> IntoIterator for &'a WaypointStore {
    type Item = &'a Waypoint;
    type IntoIter = slice::Iter<'a, Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Waypoint> for WaypointStore {
    fn from_iter<I: IntoIterator<Item = Waypoint>>(iter: I) -> Self {
        Self {
            waypoints: iter.into_iter().collect(),
        }
    }
}
