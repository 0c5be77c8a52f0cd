//! Isolated in-memory store for a loaded env file.
//!
//! Responsibilities:
//! - Parse an env file into an owned key-value map via `dotenvy`, without
//!   touching process-wide environment state.
//! - Export the map into the process environment as an explicit, separate
//!   step (never overriding variables that already exist).
//!
//! Does NOT handle:
//! - Deciding which file to load (see `loader`).
//! - Typed value conversion (see `accessor`).
//!
//! Invariants:
//! - `from_file` either yields the complete file contents or nothing; a parse
//!   failure mid-file leaves no partial state anywhere.
//! - `export` skips keys already present in the process environment.

use std::collections::HashMap;
use std::path::Path;

use tracing::trace;

use crate::loader::LoadError;

/// Key-value pairs parsed from a single env file.
///
/// This is the primary store of a loaded [`Config`](crate::Config); writing
/// the pairs into the process environment is a side effect layered on top.
/// Use [`EnvMap::from_file`] directly for a load with no global side effects.
#[derive(Debug, Default, Clone)]
pub struct EnvMap {
    vars: HashMap<String, String>,
}

impl EnvMap {
    /// Parse `path` into an isolated map. Process environment is not touched.
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let iter = dotenvy::from_path_iter(path).map_err(LoadError::from_dotenv)?;
        let mut vars = HashMap::new();
        for item in iter {
            let (key, value) = item.map_err(LoadError::from_dotenv)?;
            vars.insert(key, value);
        }
        Ok(Self { vars })
    }

    /// Look up a raw value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate over all loaded pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy every pair into the process environment, skipping keys that are
    /// already set there.
    pub(crate) fn export(&self) {
        for (key, value) in &self.vars {
            if std::env::var_os(key).is_some() {
                trace!(key, "already set in process environment, not overridden");
                continue;
            }
            // SAFETY: loading happens once, near process start, before any
            // threads are spawned (documented crate-level contract).
            unsafe { std::env::set_var(key, value) };
        }
    }

    #[cfg(test)]
    pub(crate) fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            vars: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}
