//! Behaviour-driven step definitions driving the plan CLI scenarios.

use super::helpers::StubServicesBuilder;
use super::*;
use crate::plan::run_plan_with;
use geojson::{Feature, GeoJson, JsonValue};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

const ROUTER_URL: &str = "http://osrm.test:5000";

#[derive(Debug)]
struct PlanWorld {
    input: RefCell<String>,
    cli_args: RefCell<Vec<String>>,
    builder: StubServicesBuilder,
    stdout: RefCell<Vec<u8>>,
    notices: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl PlanWorld {
    fn new() -> Self {
        Self {
            input: RefCell::new(String::new()),
            cli_args: RefCell::new(Vec::new()),
            builder: StubServicesBuilder::default(),
            stdout: RefCell::new(Vec::new()),
            notices: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec![
            "pinroute".to_owned(),
            "plan".to_owned(),
            format!("--{ARG_ROUTER_URL}"),
            ROUTER_URL.to_owned(),
        ];
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn features(&self) -> Vec<Feature> {
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        match stdout.parse::<GeoJson>().expect("output should be GeoJSON") {
            GeoJson::FeatureCollection(collection) => collection.features,
            other => panic!("expected a feature collection, found {other:?}"),
        }
    }

    fn count_kind(&self, kind: &str) -> usize {
        self.features()
            .iter()
            .filter(|feature| feature.property("kind") == Some(&JsonValue::from(kind)))
            .count()
    }

    fn assert_map(&self, markers: usize, routes: usize) {
        assert_eq!(self.count_kind("waypoint"), markers);
        assert_eq!(self.count_kind("route"), routes);
    }
}

#[fixture]
fn world() -> PlanWorld {
    PlanWorld::new()
}

#[given("a session that adds two addresses and builds the route")]
fn two_addresses(#[from(world)] world: &PlanWorld) {
    world
        .input
        .replace("10 Downing St\nTower Bridge\n:route\n:quit\n".to_owned());
}

#[given("a session that adds an unknown address")]
fn unknown_address(#[from(world)] world: &PlanWorld) {
    world.input.replace("Atlantis\n".to_owned());
}

#[given("a session that resets after building the route")]
fn reset_after_route(#[from(world)] world: &PlanWorld) {
    world.input.replace(
        "10 Downing St\nTower Bridge\n:route\n:reset\nTrafalgar Square\n".to_owned(),
    );
}

#[given("the timeout is set to zero")]
fn zero_timeout(#[from(world)] world: &PlanWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_TIMEOUT_SECS}"), "0".to_owned()]);
}

#[when("I run the plan command")]
fn run_plan_command(#[from(world)] world: &PlanWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| {
        let Command::Plan(args) = cli.command;
        let input = world.input.borrow();
        let mut reader = input.as_bytes();
        let mut stdout = world.stdout.borrow_mut();
        let notices = run_plan_with(args, &world.builder, &mut reader, &mut *stdout, Vec::new())?;
        world.notices.replace(notices);
        Ok(())
    });

    world.result.replace(Some(outcome));
}

#[then("the command succeeds")]
fn command_succeeds(#[from(world)] world: &PlanWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    if let Err(err) = result {
        panic!("expected success, found {err:?}");
    }
}

#[then("the map holds 2 markers and 1 route")]
fn two_markers_one_route(#[from(world)] world: &PlanWorld) {
    world.assert_map(2, 1);
}

#[then("the map holds 0 markers and 0 routes")]
fn empty_map(#[from(world)] world: &PlanWorld) {
    world.assert_map(0, 0);
}

#[then("the map holds 1 marker and 0 routes")]
fn one_marker(#[from(world)] world: &PlanWorld) {
    world.assert_map(1, 0);
}

#[then("the route uses the shortest alternative")]
fn shortest_alternative(#[from(world)] world: &PlanWorld) {
    let features = world.features();
    let route = features
        .iter()
        .find(|feature| feature.property("kind") == Some(&JsonValue::from("route")))
        .expect("one route");
    assert_eq!(route.property("distance_m"), Some(&JsonValue::from(1500.0)));
}

#[then("the router URL from the command line is used")]
fn router_url_used(#[from(world)] world: &PlanWorld) {
    let config = world.builder.config.borrow();
    let config = config.as_ref().expect("services were built");
    assert_eq!(config.router_url, ROUTER_URL);
}

#[then("an address-not-found notice is printed")]
fn address_not_found_notice(#[from(world)] world: &PlanWorld) {
    let notices = String::from_utf8(world.notices.borrow().clone()).expect("notices utf-8");
    assert!(notices.contains("No location found for this address"));
}

#[then("the command fails because the timeout is invalid")]
fn command_fails_invalid_timeout(#[from(world)] world: &PlanWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::InvalidTimeout { field, .. } => assert_eq!(*field, ARG_TIMEOUT_SECS),
        other => panic!("expected InvalidTimeout, found {other:?}"),
    }
}

macro_rules! register_plan_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/plan_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: PlanWorld) {
            let _ = world;
        }
    };
}

register_plan_scenario!(plan_two_addresses, "planning a route between two addresses");
register_plan_scenario!(plan_unknown_address, "reporting an address that cannot be found");
register_plan_scenario!(plan_reset, "starting over after a reset");
register_plan_scenario!(plan_zero_timeout, "rejecting a zero timeout");
