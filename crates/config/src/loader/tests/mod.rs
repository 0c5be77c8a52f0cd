//! Tests for env-file discovery and loading.
//!
//! Invariants / Assumptions:
//! - Tests hold `env_lock()` for the whole test body: they mutate process
//!   globals (working directory, `ENV_PATH`, loaded keys).
//! - Each test uses its own key names, since exported keys outlive a test.

use std::path::{Path, PathBuf};
use std::sync::Mutex;


use crate::constants::ENV_PATH_KEY;

/// Global lock serializing tests that touch process-wide state.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// RAII guard for temporarily changing the current working directory.
pub struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    pub fn new(dir: &Path) -> Self {
        let original_dir = std::env::current_dir().expect("failed to get current directory");
        std::env::set_current_dir(dir).expect("failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

/// Clear the load marker so the next construction performs a real load.
pub fn clear_sentinel() {
    unsafe {
        std::env::remove_var(ENV_PATH_KEY);
    }
}

/// Remove keys a test exported into the process environment.
pub fn scrub_keys(keys: &[&str]) {
    for key in keys {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

/// The search candidate file name specific to the current (test) executable.
pub fn exe_env_file_name() -> String {
    let exe = std::env::current_exe().expect("failed to get current executable");
    let name = exe.file_name().unwrap().to_string_lossy().into_owned();
    format!(".{name}.env")
}
