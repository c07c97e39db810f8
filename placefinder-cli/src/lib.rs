//! Command-line front end for the Placefinder pipeline.
//!
//! `placefinder search` sends a query to a Nominatim service, lists the
//! results as formatted address rows, optionally pins one of them and
//! prints an OpenStreetMap directions link for the pinned place.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod search;
mod terminal;

pub use error::CliError;

const ARG_QUERY: &str = "query";
const ARG_LATITUDE: &str = "latitude";
const ARG_LONGITUDE: &str = "longitude";
const ARG_NOMINATIM_URL: &str = "nominatim-url";
const ARG_LIMIT: &str = "limit";
const ARG_TIMEOUT_SECS: &str = "timeout-secs";
const ARG_SELECT: &str = "select";
const ARG_DIRECTIONS: &str = "directions";
const ARG_WALKING: &str = "walking";
const ENV_QUERY: &str = "PLACEFINDER_CMDS_SEARCH_QUERY";

/// Run the Placefinder CLI with the current process arguments and
/// environment, writing results to stdout.
///
/// # Errors
///
/// Returns a [`CliError`] when arguments or configuration are invalid, the
/// provider cannot be built, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Search(args) => search::run_search(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "placefinder",
    about = "Search places, pin one on the map and get directions to it",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search for places near a location.
    Search(search::SearchArgs),
}

#[cfg(test)]
mod tests;
