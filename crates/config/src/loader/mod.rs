//! Env-file discovery and one-time process-wide loading.
//!
//! Responsibilities:
//! - Short-circuit construction when the `ENV_PATH` sentinel marks a prior
//!   successful load.
//! - Load an explicitly supplied env file, or search the default candidate
//!   paths in strict precedence order.
//! - Export loaded pairs into the process environment and record the loaded
//!   file's path under `ENV_PATH`.
//!
//! Does NOT handle:
//! - Dotenv grammar (delegated to the `dotenvy` crate via `source`).
//! - Typed value reads (see `accessor`).
//!
//! Invariants / Assumptions:
//! - Exactly one successful load per process; the sentinel is set only after
//!   a whole file parsed, so a failed candidate leaves no stray keys.
//! - Construction happens before threads are spawned; concurrent constructors
//!   may race on the sentinel check (harmless but wasteful).

mod error;
mod search;
#[cfg(test)]
mod tests;

pub use error::{ConfigError, LoadError};

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::constants::ENV_PATH_KEY;
use crate::source::EnvMap;

/// Handle to a successfully loaded environment.
///
/// Holds the isolated [`EnvMap`] of the loaded file; typed getters live in
/// the `accessor` module. Immutable after construction.
#[derive(Debug)]
pub struct Config {
    pub(crate) vars: EnvMap,
}

impl Config {
    /// Load in search mode.
    ///
    /// Tries, in order: `.<executableBaseName>.env` in the working directory,
    /// `.config.env` there, then `.config.env` in the parent directory. The
    /// first file that parses wins; later candidates are never consulted.
    ///
    /// Returns [`ConfigError::EnvFileNotFound`] when every candidate fails.
    ///
    /// Call once, near process start, before spawning threads.
    pub fn new() -> Result<Self, ConfigError> {
        if already_loaded() {
            debug!("env file already loaded, skipping search");
            return Ok(Self {
                vars: EnvMap::default(),
            });
        }

        for candidate in search::candidate_paths()? {
            match load_file(&candidate) {
                Ok(vars) => return Ok(Self { vars }),
                Err(err) => debug!(path = %candidate.display(), %err, "candidate skipped"),
            }
        }

        Err(ConfigError::EnvFileNotFound)
    }

    /// Load the env file at `path` (resolved to an absolute path).
    ///
    /// On failure returns [`ConfigError::EnvFileLoad`] carrying the attempted
    /// path; explicit mode never falls back to the default search.
    ///
    /// Known quirk, preserved for compatibility: once any load has succeeded
    /// in this process, the `ENV_PATH` sentinel short-circuits construction
    /// and `path` is silently ignored, even when it names a different file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if already_loaded() {
            debug!("env file already loaded, ignoring explicit path");
            return Ok(Self {
                vars: EnvMap::default(),
            });
        }

        let abs = std::path::absolute(path.as_ref()).map_err(ConfigError::WorkingDir)?;
        match load_file(&abs) {
            Ok(vars) => Ok(Self { vars }),
            Err(source) => Err(ConfigError::EnvFileLoad { path: abs, source }),
        }
    }

    /// Path of the env file recorded by the successful load, if any.
    pub fn env_path(&self) -> Option<PathBuf> {
        std::env::var_os(ENV_PATH_KEY)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    /// The isolated key-value pairs parsed from the loaded file.
    ///
    /// Empty when construction short-circuited on the sentinel.
    pub fn vars(&self) -> &EnvMap {
        &self.vars
    }
}

fn already_loaded() -> bool {
    std::env::var(ENV_PATH_KEY).is_ok_and(|value| !value.is_empty())
}

/// Parse `path`, export its pairs, and record the sentinel.
fn load_file(path: &Path) -> Result<EnvMap, LoadError> {
    let vars = EnvMap::from_file(path)?;
    vars.export();
    // SAFETY: loading happens once, near process start, before any threads
    // are spawned (documented crate-level contract).
    unsafe { std::env::set_var(ENV_PATH_KEY, path) };
    info!(path = %path.display(), keys = vars.len(), "loaded env file");
    Ok(vars)
}
