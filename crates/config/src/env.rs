//! Environment variable access.
//!
//! Some backends read their settings from the process environment instead of
//! the config file. Going through [`EnvSource`] keeps that channel explicit
//! and lets tests supply a fixed environment.

use std::collections::HashMap;

/// A read-only view of environment variables.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;

    /// Like `var`, but blank values count as unset.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|v| !v.trim().is_empty())
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
