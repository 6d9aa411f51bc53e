//! Command-line interface for planning walking routes between addresses.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod plan;
mod session;
mod surface;

pub use error::CliError;
pub use surface::GeoJsonSurface;

const ARG_GEOCODER_URL: &str = "geocoder-url";
const ARG_ROUTER_URL: &str = "router-url";
const ARG_USER_AGENT: &str = "user-agent";
const ARG_TIMEOUT_SECS: &str = "timeout-secs";
const ENV_TIMEOUT_SECS: &str = "PINROUTE_TIMEOUT_SECS";

/// Run the pinroute CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns an error when arguments or configuration are invalid, when the
/// HTTP services cannot be set up, or when reading input or writing the map
/// fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => plan::run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "pinroute",
    about = "Plan walking routes between geocoded addresses",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read addresses and commands from stdin and print the map as GeoJSON.
    Plan(plan::PlanArgs),
}

#[cfg(test)]
mod tests;
