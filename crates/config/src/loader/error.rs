//! Error types for env-file loading.
//!
//! Invariants:
//! - Load errors NEVER include raw env-file line contents, to prevent secret
//!   leakage. Parse failures carry only the byte index of the failure.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by [`Config`](crate::Config) construction.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly supplied path could not be loaded. Never retried and
    /// never falls back to the default search.
    #[error("failed to load env file at {path}")]
    EnvFileLoad {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    /// Search mode exhausted every candidate without a successful load.
    #[error("no env file found in default search paths (.<executable>.env or .config.env)")]
    EnvFileNotFound,

    #[error("unable to determine current executable path")]
    ExecutablePath(#[source] std::io::Error),

    #[error("unable to determine working directory")]
    WorkingDir(#[source] std::io::Error),
}

/// Cause of a single env-file load failure.
///
/// SAFETY: these variants only describe the failure (byte index, io kind),
/// never the offending line content.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file has invalid syntax at the given byte index.
    #[error("invalid syntax at position {error_index}")]
    Parse { error_index: usize },

    /// The file could not be read.
    #[error("io error: {kind}")]
    Io { kind: ErrorKind },

    /// Unknown dotenv error (future variants from the dotenvy crate).
    #[error("unknown env file error")]
    Unknown,
}

impl LoadError {
    pub(crate) fn from_dotenv(err: dotenvy::Error) -> Self {
        match err {
            dotenvy::Error::LineParse(_, error_index) => LoadError::Parse { error_index },
            dotenvy::Error::Io(io_err) => LoadError::Io {
                kind: io_err.kind(),
            },
            _ => LoadError::Unknown,
        }
    }
}
