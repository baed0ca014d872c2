//! Error types emitted by the Porto CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use porto_data::{DatasetError, ProviderBuildError};
use thiserror::Error;

/// Errors emitted by the Porto CLI.
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
    /// A required positional path is missing after configuration merging.
    #[error("missing {field} (pass it as the <path> argument or set {env})")]
    MissingPath {
        field: &'static str,
        env: &'static str,
    },
    /// An option holds a value the command cannot interpret.
    #[error("invalid {field} {value:?}: {reason}")]
    InvalidArgument {
        field: &'static str,
        value: String,
        reason: String,
    },
    /// A coordinate option is not a `latitude,longitude` pair.
    #[error("invalid {field} {value:?}: expected latitude,longitude in degrees")]
    InvalidCoordinate { field: &'static str, value: String },
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Loading the venue dataset failed.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    /// No venue in the dataset carries the requested name.
    #[error("no venue named {name:?} in the dataset")]
    UnknownVenue { name: String },
    /// Reading the page to rewrite failed.
    #[error("failed to read page at {path:?}: {source}")]
    ReadPage {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Constructing the directions provider failed.
    #[error("failed to build directions provider for {base_url:?}: {source}")]
    BuildDirectionsProvider {
        base_url: String,
        #[source]
        source: ProviderBuildError,
    },
    /// Serialising a command report failed.
    #[error("failed to serialise report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
