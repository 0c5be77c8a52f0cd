//! Centralized constants for env-file discovery.

/// Sentinel environment variable recording the path of the loaded env file.
///
/// Once set (non-empty), every subsequent construction short-circuits without
/// touching the filesystem.
pub const ENV_PATH_KEY: &str = "ENV_PATH";

/// Shared fallback env file name, tried in the working directory and its
/// parent after the executable-specific candidate.
pub const SHARED_ENV_FILE: &str = ".config.env";

/// Separator for slice-valued variables (e.g. `HOSTS=a,b,c`).
pub const SLICE_SEPARATOR: char = ',';
