//! Env-file discovery and typed environment accessors.
//!
//! This crate locates a dotenv-style environment file (by executable name and
//! working directory), loads it once per process, and exposes typed getters
//! with optional default values on the resulting [`Config`] handle.
//!
//! ```no_run
//! use env_config::Config;
//!
//! let cfg = Config::new()?;
//! let port = cfg.int("PORT", 8080);
//! let hosts = cfg.string_slice("HOSTS", None);
//! # Ok::<(), env_config::ConfigError>(())
//! ```
//!
//! Call [`Config::new`] (or [`Config::from_path`]) exactly once, near process
//! start and before spawning threads: loading writes process-wide environment
//! variables, and no internal locking guards concurrent constructors.

mod accessor;
mod constants;
mod loader;
mod source;

pub use constants::ENV_PATH_KEY;
pub use loader::{Config, ConfigError, LoadError};
pub use source::EnvMap;
