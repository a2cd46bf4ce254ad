//! Error types emitted by the campus dispatch CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use dispatch_core::{AllocationError, ConfigError, RegistryError};
use thiserror::Error;

/// Errors emitted by the campus dispatch CLI.
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
        /// Flag name of the missing option.
        field: &'static str,
        /// Environment variable that could supply it.
        env: &'static str,
    },
    /// An input file could not be opened.
    #[error("failed to open {field} file at {path:?}: {source}")]
    OpenInput {
        /// Which input was being opened.
        field: &'static str,
        /// Path that failed.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// An input file did not contain the expected JSON.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseInput {
        /// Which input was being parsed.
        field: &'static str,
        /// Path that failed.
        path: Utf8PathBuf,
        /// Underlying decoding error.
        #[source]
        source: serde_json::Error,
    },
    /// The merged options describe an invalid dispatcher configuration.
    #[error("invalid dispatcher configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    /// History could not be tallied or officers could not be allocated.
    #[error("allocation failed: {0}")]
    Allocation(#[from] AllocationError),
    /// The roster could not be assigned to zones.
    #[error("roster assignment failed: {0}")]
    Roster(#[from] RegistryError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
