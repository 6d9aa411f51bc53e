//! Route alternatives and the segments chosen from them.
//!
//! A directions request for one waypoint pair yields any number of
//! [`RouteCandidate`] values. [`select_shortest`] picks the one with the
//! smallest distance, and the planner turns it into a [`RouteSegment`] for
//! rendering.

use std::time::Duration;

use geo::{Coord, LineString};

/// One alternative path returned by the route service.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteCandidate {
    /// Total length in metres.
    pub distance_m: f64,
    /// Expected travel time.
    pub duration: Duration,
    /// Polyline from origin to destination.
    pub path: LineString<f64>,
}

impl RouteCandidate {
    /// Construct a candidate.
    pub fn new(distance_m: f64, duration: Duration, path: LineString<f64>) -> Self {
        Self {
            distance_m,
            duration,
            path,
        }
    }
}

/// Pick the candidate with the smallest distance.
///
/// Ties keep the earliest candidate. Returns `None` for an empty slice.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use geo::LineString;
/// use pinroute_core::{RouteCandidate, select_shortest};
///
/// let candidates = vec![
///     RouteCandidate::new(900.0, Duration::from_secs(700), LineString::new(vec![])),
///     RouteCandidate::new(650.0, Duration::from_secs(520), LineString::new(vec![])),
///     RouteCandidate::new(650.0, Duration::from_secs(480), LineString::new(vec![])),
/// ];
///
/// let best = select_shortest(&candidates).map(|c| c.duration);
/// assert_eq!(best, Some(Duration::from_secs(520)));
/// ```
#[must_use]
pub fn select_shortest(candidates: &[RouteCandidate]) -> Option<&RouteCandidate> {
    candidates.iter().fold(None, |best, candidate| match best {
        Some(current) if candidate.distance_m < current.distance_m => Some(candidate),
        Some(current) => Some(current),
        None => Some(candidate),
    })
}

/// The chosen path between waypoint `pair` and waypoint `pair + 1`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RouteSegment {
    /// Index of the origin waypoint.
    pub pair: usize,
    pub from: Coord<f64>,
    pub to: Coord<f64>,
    pub distance_m: f64,
    pub duration: Duration,
    pub path: LineString<f64>,
}

impl RouteSegment {
    /// Build a segment from the candidate chosen for `pair`.
    #[must_use]
    pub fn from_candidate(
        pair: usize,
        from: Coord<f64>,
        to: Coord<f64>,
        candidate: RouteCandidate,
    ) -> Self {
        Self {
            pair,
            from,
            to,
            distance_m: candidate.distance_m,
            duration: candidate.duration,
            path: candidate.path,
        }
    }
}

/// Totals over a set of rendered segments.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RouteSummary {
    pub segments: usize,
    pub distance_m: f64,
    pub duration: Duration,
}

impl RouteSummary {
    /// Sum distance and duration over `segments`.
    pub fn of<'a, I>(segments: I) -> Self
    where
        I: IntoIterator<Item = &'a RouteSegment>,
    {
        segments
            .into_iter()
            .fold(Self::default(), |summary, segment| Self {
                segments: summary.segments + 1,
                distance_m: summary.distance_m + segment.distance_m,
                duration: summary.duration.saturating_add(segment.duration),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn candidate(distance_m: f64, secs: u64) -> RouteCandidate {
        RouteCandidate::new(
            distance_m,
            Duration::from_secs(secs),
            LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]),
        )
    }

    #[rstest]
    fn empty_candidates_select_nothing() {
        assert!(select_shortest(&[]).is_none());
    }

    #[rstest]
    #[case(vec![candidate(10.0, 1)], 1)]
    #[case(vec![candidate(30.0, 1), candidate(20.0, 2), candidate(25.0, 3)], 2)]
    #[case(vec![candidate(20.0, 1), candidate(20.0, 2)], 1)]
    #[case(vec![candidate(50.0, 1), candidate(5.0, 2), candidate(5.0, 3)], 2)]
    fn shortest_candidate_wins_first_on_tie(
        #[case] candidates: Vec<RouteCandidate>,
        #[case] expected_secs: u64,
    ) {
        let best = select_shortest(&candidates).expect("non-empty candidates");
        assert_eq!(best.duration, Duration::from_secs(expected_secs));
    }

    #[rstest]
    fn summary_sums_segments() {
        let from = Coord { x: 0.0, y: 0.0 };
        let to = Coord { x: 1.0, y: 1.0 };
        let segments = [
            RouteSegment::from_candidate(0, from, to, candidate(120.0, 90)),
            RouteSegment::from_candidate(1, to, from, candidate(80.0, 60)),
        ];
        let summary = RouteSummary::of(&segments);
        assert_eq!(summary.segments, 2);
        assert_eq!(summary.distance_m, 200.0);
        assert_eq!(summary.duration, Duration::from_secs(150));
    }
}
