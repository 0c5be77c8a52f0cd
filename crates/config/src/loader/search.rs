//! Candidate path computation for search-mode loading.
//!
//! Responsibilities:
//! - Compute the ordered list of env-file candidates from the current
//!   executable's base name, the working directory, and its parent.
//!
//! Invariants:
//! - Precedence is strict: `.<exe>.env` in the working directory, then
//!   `.config.env` there, then `.config.env` in the parent directory.
//! - When the working directory is a filesystem root, the parent candidate
//!   is omitted.

use std::path::PathBuf;

use super::error::ConfigError;
use crate::constants::SHARED_ENV_FILE;

/// Compute the ordered env-file candidates for the current process.
pub(crate) fn candidate_paths() -> Result<Vec<PathBuf>, ConfigError> {
    let exe = std::env::current_exe().map_err(ConfigError::ExecutablePath)?;
    let exe_name = exe
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let cwd = std::env::current_dir().map_err(ConfigError::WorkingDir)?;

    let mut candidates = vec![
        cwd.join(format!(".{exe_name}.env")),
        cwd.join(SHARED_ENV_FILE),
    ];
    if let Some(parent) = cwd.parent() {
        candidates.push(parent.join(SHARED_ENV_FILE));
    }

    Ok(candidates)
}
