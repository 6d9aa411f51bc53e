//! Line-oriented command loop driving a [`RoutePlanner`].

use std::io::BufRead;

use log::{debug, warn};
use pinroute_core::{AlertSink, MapSurface};
use pinroute_planner::RoutePlanner;
use tokio::runtime::Runtime;

use crate::CliError;

/// One line of session input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionCommand<'a> {
    /// Geocode the text and add it as a waypoint.
    Address(&'a str),
    Route,
    Reset,
    Quit,
    Blank,
    Unknown(&'a str),
}

impl<'a> SessionCommand<'a> {
    pub(crate) fn parse(line: &'a str) -> Self {
        match line.trim() {
            "" => Self::Blank,
            ":route" => Self::Route,
            ":reset" => Self::Reset,
            ":quit" | ":q" => Self::Quit,
            other if other.starts_with(':') => Self::Unknown(other),
            other => Self::Address(other),
        }
    }
}

/// Apply commands from `input` until `:quit` or end of input.
///
/// Each command is settled before the next line is read, so waypoints keep
/// the order they were typed in.
pub(crate) fn run_session<S>(
    planner: &mut RoutePlanner<S>,
    runtime: &Runtime,
    input: &mut dyn BufRead,
) -> Result<(), CliError>
where
    S: MapSurface + AlertSink,
{
    for line in input.lines() {
        let line = line.map_err(CliError::ReadInput)?;
        match SessionCommand::parse(&line) {
            SessionCommand::Address(address) => {
                {
                    let _context = runtime.enter();
                    planner.add_address(address)?;
                }
                settle(planner, runtime);
            }
            SessionCommand::Route => {
                {
                    let _context = runtime.enter();
                    planner.build_route()?;
                }
                settle(planner, runtime);
            }
            SessionCommand::Reset => planner.reset(),
            SessionCommand::Quit => break,
            SessionCommand::Blank => {}
            SessionCommand::Unknown(command) => warn!("ignoring unknown command {command}"),
        }
    }
    Ok(())
}

fn settle<S>(planner: &mut RoutePlanner<S>, runtime: &Runtime)
where
    S: MapSurface + AlertSink,
{
    for event in runtime.block_on(planner.run_until_idle()) {
        debug!("applied {event:?}");
    }
}
