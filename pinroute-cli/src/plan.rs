//! Plan command implementation for the pinroute CLI.

use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use pinroute_core::{DirectionsProvider, Geocoder};
use pinroute_data::geocoding::{DEFAULT_GEOCODER_URL, HttpGeocoder, HttpGeocoderConfig};
use pinroute_data::routing::{
    DEFAULT_ROUTER_URL, HttpDirectionsProvider, HttpDirectionsProviderConfig,
};
use pinroute_data::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use pinroute_planner::{PlannerConfig, RoutePlanner};
use serde::{Deserialize, Serialize};

use crate::session::run_session;
use crate::{
    ARG_GEOCODER_URL, ARG_ROUTER_URL, ARG_TIMEOUT_SECS, ARG_USER_AGENT, CliError,
    ENV_TIMEOUT_SECS, GeoJsonSurface,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Read one command per line from stdin. Plain text is \
                 geocoded and added as a waypoint, :route connects the \
                 waypoints, :reset starts over and :quit (or end of input) \
                 prints the map as a GeoJSON FeatureCollection.",
    about = "Plan a walking route interactively"
)]
#[ortho_config(prefix = "PINROUTE")]
pub(crate) struct PlanArgs {
    /// Base URL of the Nominatim geocoding service.
    #[arg(long = ARG_GEOCODER_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) geocoder_url: Option<String>,
    /// Base URL of the OSRM route service (e.g. "http://localhost:5000").
    #[arg(long = ARG_ROUTER_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) router_url: Option<String>,
    /// User agent sent with every request.
    #[arg(long = ARG_USER_AGENT, value_name = "agent")]
    #[serde(default)]
    pub(crate) user_agent: Option<String>,
    /// Per-request timeout in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "secs")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    pub(crate) geocoder_url: String,
    pub(crate) router_url: String,
    pub(crate) user_agent: String,
    pub(crate) timeout: Duration,
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let timeout = match args.timeout_secs {
            Some(0) => {
                return Err(CliError::InvalidTimeout {
                    field: ARG_TIMEOUT_SECS,
                    env: ENV_TIMEOUT_SECS,
                });
            }
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_TIMEOUT,
        };
        Ok(Self {
            geocoder_url: args
                .geocoder_url
                .unwrap_or_else(|| DEFAULT_GEOCODER_URL.to_owned()),
            router_url: args
                .router_url
                .unwrap_or_else(|| DEFAULT_ROUTER_URL.to_owned()),
            user_agent: args
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
            timeout,
        })
    }
}

/// The external services a planning session talks to.
pub(crate) struct Services {
    pub(crate) geocoder: Arc<dyn Geocoder>,
    pub(crate) directions: Arc<dyn DirectionsProvider>,
}

/// Builds the services for the current plan invocation.
pub(crate) trait ServicesBuilder {
    fn build(&self, config: &PlanConfig) -> Result<Services, CliError>;
}

pub(crate) struct HttpServicesBuilder;

impl ServicesBuilder for HttpServicesBuilder {
    fn build(&self, config: &PlanConfig) -> Result<Services, CliError> {
        let geocoder = HttpGeocoder::with_config(
            HttpGeocoderConfig::new(config.geocoder_url.clone())
                .with_timeout(config.timeout)
                .with_user_agent(config.user_agent.clone()),
        )
        .map_err(|source| CliError::BuildGeocoder {
            base_url: config.geocoder_url.clone(),
            source,
        })?;
        let directions = HttpDirectionsProvider::with_config(
            HttpDirectionsProviderConfig::new(config.router_url.clone())
                .with_timeout(config.timeout)
                .with_user_agent(config.user_agent.clone()),
        )
        .map_err(|source| CliError::BuildDirectionsProvider {
            base_url: config.router_url.clone(),
            source,
        })?;
        Ok(Services {
            geocoder: Arc::new(geocoder),
            directions: Arc::new(directions),
        })
    }
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    run_plan_with(
        args,
        &HttpServicesBuilder,
        &mut stdin,
        &mut stdout,
        std::io::stderr(),
    )?;
    Ok(())
}

/// Run a planning session and write the final map to `output`.
///
/// Prompts and alerts go to `notices`, which is handed back once the map
/// has been written.
pub(crate) fn run_plan_with<W: Write>(
    args: PlanArgs,
    builder: &dyn ServicesBuilder,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    notices: W,
) -> Result<W, CliError> {
    let config = args.into_config()?;
    let services = builder.build(&config)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::StartRuntime)?;

    let mut planner = RoutePlanner::new(
        services.geocoder,
        services.directions,
        GeoJsonSurface::new(notices),
        PlannerConfig::default(),
    );
    let prompt = planner.prompt().clone();
    planner
        .surface_mut()
        .notice(&format!("{}: {}", prompt.title, prompt.placeholder));

    run_session(&mut planner, &runtime, input)?;

    let summary = planner.summary();
    info!(
        "rendered {} segments covering {:.0} m",
        summary.segments, summary.distance_m
    );
    let surface = planner.into_surface();
    surface.write_to(output)?;
    Ok(surface.into_notices())
}
