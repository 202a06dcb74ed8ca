//! Per-backend settings resolution.
//!
//! Each backend draws its settings from its own channel: the OpenAI and Ollama
//! backends read the config file, the Azure backend reads the process
//! environment. Every implementation gets both sources and picks what it needs.

use ingen_config::{ConfigError, Configuration, EnvSource};

/// Settings a backend needs before it can be constructed.
pub trait BackendSettings: Sized {
    /// Where these settings come from, for diagnostics.
    const SOURCE: &'static str;

    /// Extract and validate the settings. Fails without side effects when a
    /// required value is missing.
    fn resolve(config: &Configuration, env: &dyn EnvSource) -> Result<Self, ConfigError>;
}
