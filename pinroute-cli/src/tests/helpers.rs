//! Stub services for driving plan sessions without a network.

use std::cell::RefCell;
use std::sync::Arc;

use geo::Coord;
use pinroute_core::test_support::{StubDirections, StubGeocoder};

use crate::CliError;
use crate::plan::{PlanConfig, Services, ServicesBuilder};

pub(super) fn london() -> StubGeocoder {
    StubGeocoder::default()
        .with_place("10 Downing St", Coord { x: -0.1276, y: 51.5034 })
        .with_place("Trafalgar Square", Coord { x: -0.1281, y: 51.5080 })
        .with_place("Tower Bridge", Coord { x: -0.0754, y: 51.5055 })
}

/// Hands out stub services and remembers the configuration it was given.
#[derive(Debug, Default)]
pub(super) struct StubServicesBuilder {
    pub(super) config: RefCell<Option<PlanConfig>>,
}

impl ServicesBuilder for StubServicesBuilder {
    fn build(&self, config: &PlanConfig) -> Result<Services, CliError> {
        self.config.replace(Some(config.clone()));
        Ok(Services {
            geocoder: Arc::new(london()),
            directions: Arc::new(StubDirections::straight_lines(vec![1800.0, 1500.0])),
        })
    }
}
