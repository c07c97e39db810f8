//! Error types emitted by the Placefinder CLI.
//!
//! Keep this error type reasonably small, as CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use placefinder_data::search::ProviderBuildError;
use thiserror::Error;

/// Errors emitted by the Placefinder CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A coordinate option lies outside its valid range.
    #[error("{field} {value} is outside -{limit}..={limit}")]
    InvalidCoordinate {
        field: &'static str,
        value: f64,
        limit: u8,
    },
    /// Only one half of the search centre was given.
    #[error("--{given} requires --{missing}")]
    IncompleteCentre {
        given: &'static str,
        missing: &'static str,
    },
    /// Constructing the search provider failed.
    #[error("failed to build search provider for {base_url:?}: {source}")]
    BuildProvider {
        base_url: String,
        #[source]
        source: ProviderBuildError,
    },
    /// The async runtime could not be started.
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// The requested row does not exist in the result list.
    #[error("cannot select row {row}: {available} result(s) available")]
    SelectionOutOfRange { row: usize, available: usize },
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
