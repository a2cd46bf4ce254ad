//! Command-line interface for the campus dispatcher.
//!
//! Two subcommands are provided. `allocate` turns incident history into
//! per-zone officer quotas. `dispatch` builds a full engine from history, a
//! roster and a distance table, then answers a batch of incidents in order,
//! printing one JSON outcome per line.
//!
//! Options are layered with `ortho_config`: defaults, then configuration
//! files, then `CAMPUS_DISPATCH_*` environment variables, then flags.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use std::io::Write;

mod allocate;
mod dispatch;
mod error;
mod json;

pub use error::CliError;

use allocate::{AllocateArgs, run_allocate_with};
use dispatch::{DispatchArgs, TableDistanceSource, run_dispatch_with};

pub(crate) const ARG_HISTORY: &str = "history";
pub(crate) const ARG_ROSTER: &str = "roster";
pub(crate) const ARG_DISTANCES: &str = "distances";
pub(crate) const ARG_INCIDENTS: &str = "incidents";
pub(crate) const ARG_OFFICERS: &str = "officers";
pub(crate) const ARG_CARRY_CAPACITY: &str = "carry-capacity";
pub(crate) const ENV_ALLOCATE_HISTORY: &str = "CAMPUS_DISPATCH_CMDS_ALLOCATE_HISTORY";
pub(crate) const ENV_DISPATCH_INCIDENTS: &str = "CAMPUS_DISPATCH_CMDS_DISPATCH_INCIDENTS_PATH";
pub(crate) const ENV_DISPATCH_HISTORY: &str = "CAMPUS_DISPATCH_CMDS_DISPATCH_HISTORY";
pub(crate) const ENV_DISPATCH_ROSTER: &str = "CAMPUS_DISPATCH_CMDS_DISPATCH_ROSTER";
pub(crate) const ENV_DISPATCH_DISTANCES: &str = "CAMPUS_DISPATCH_CMDS_DISPATCH_DISTANCES";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or inputs are invalid,
/// or when output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &mut stdout)
}

fn run_command(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Allocate(args) => run_allocate_with(args, writer),
        Command::Dispatch(args) => run_dispatch_with(args, &TableDistanceSource, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "campus-dispatch",
    about = "Allocate campus officers to zones and dispatch them to emergencies",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Distribute officers across zones from incident history.
    Allocate(AllocateArgs),
    /// Answer a batch of incidents with the nearest available officers.
    Dispatch(DispatchArgs),
}

#[cfg(test)]
mod tests;
