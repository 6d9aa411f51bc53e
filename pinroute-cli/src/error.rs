//! Error types emitted by the pinroute CLI.

use std::sync::Arc;

use pinroute_data::ProviderBuildError;
use pinroute_planner::PlannerError;
use thiserror::Error;

/// Errors emitted by the pinroute CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The configured timeout cannot be used.
    #[error("{field} must be greater than zero (set --{field} or {env})")]
    InvalidTimeout {
        field: &'static str,
        env: &'static str,
    },
    /// Constructing the geocoder failed.
    #[error("failed to build geocoder for {base_url:?}: {source}")]
    BuildGeocoder {
        base_url: String,
        #[source]
        source: ProviderBuildError,
    },
    /// Constructing the directions provider failed.
    #[error("failed to build directions provider for {base_url:?}: {source}")]
    BuildDirectionsProvider {
        base_url: String,
        #[source]
        source: ProviderBuildError,
    },
    /// The async runtime could not be started.
    #[error("failed to start async runtime: {0}")]
    StartRuntime(#[source] std::io::Error),
    /// The planner refused to dispatch a request.
    #[error(transparent)]
    Planner(#[from] PlannerError),
    /// Reading a session command failed.
    #[error("failed to read input: {0}")]
    ReadInput(#[source] std::io::Error),
    /// Serialising the map failed.
    #[error("failed to serialise map: {0}")]
    SerialiseMap(#[source] serde_json::Error),
    /// Writing the map failed.
    #[error("failed to write map output: {0}")]
    WriteMap(#[source] std::io::Error),
}
