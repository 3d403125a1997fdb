//! Error types emitted by the hydrosite CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use hydrosite_core::{CriteriaError, GeoPointError, SearchError};
use hydrosite_recommend::RecommendError;
use thiserror::Error;

/// Errors emitted by the hydrosite CLI.
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
        /// Option name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the dataset file failed.
    #[error("failed to open dataset at {path:?}: {source}")]
    OpenDataset {
        /// Dataset path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Dataset JSON could not be decoded or failed validation.
    #[error("failed to parse dataset JSON at {path:?}: {source}")]
    ParseDataset {
        /// Dataset path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The requested site is not a valid coordinate.
    #[error(transparent)]
    InvalidCoordinate(#[from] GeoPointError),
    /// The criteria option did not name a known criteria.
    #[error(transparent)]
    InvalidCriteria(#[from] CriteriaError),
    /// The grid search rejected the request.
    #[error("site search failed: {0}")]
    Search(#[from] SearchError),
    /// Recommendation generation failed.
    #[error("recommendation failed: {0}")]
    Recommend(#[from] RecommendError),
    /// The log level was not recognised.
    #[error("unknown log level '{level}'; expected off, error, warn, info, debug or trace")]
    InvalidLogLevel {
        /// Rejected level.
        level: String,
    },
    /// Installing the logger failed.
    #[error("failed to initialise logging: {0}")]
    InitLogger(#[from] log::SetLoggerError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
