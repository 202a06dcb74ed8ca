//! Configuration loading and lookup for inGen.
//!
//! Loads an INI file (Python `configparser` dialect) once at startup. Every
//! lookup names its own fallback, so a missing file or a missing option
//! degrades to a documented default instead of failing. Only a file that
//! exists but cannot be read or parsed is an error.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use configparser::ini::{Ini, IniDefault};
pub use ingen_core::ConfigError;

pub mod env;

pub use env::{EnvSource, ProcessEnv};

/// Default location of the configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/config.ini";

/// Default location of the adaptation log, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "data/system_adaptations.log";

/// Section holding backend choice and prompt text.
pub const GENERAL: &str = "General";
/// Section holding the cloud-completion settings.
pub const OPENAI: &str = "OpenAI";
/// Section holding the local-runner settings.
pub const OLLAMA: &str = "Ollama";

/// Immutable section → option → value mapping.
///
/// Section and option names are matched case-insensitively.
#[derive(Clone, Default)]
pub struct Configuration {
    sections: HashMap<String, HashMap<String, String>>,
    source: Option<PathBuf>,
}

impl Configuration {
    /// An empty configuration: every lookup returns its fallback.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load configuration from a file path.
    ///
    /// A missing file yields an empty configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::empty());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut config = Self::parse(content, path)?;
        config.source = Some(path.to_path_buf());
        tracing::debug!(
            path = %path.display(),
            sections = config.sections.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse configuration from INI text held in memory.
    pub fn from_ini_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse(text.to_string(), Path::new("<memory>"))
    }

    fn parse(content: String, origin: &Path) -> Result<Self, ConfigError> {
        // `;` and `#` only start a comment at the beginning of a line.
        let mut defaults = IniDefault::default();
        defaults.multiline = true;
        defaults.enable_inline_comments = false;
        let mut ini = Ini::new_from_defaults(defaults);

        let raw = ini.read(content).map_err(|reason| ConfigError::ParseError {
            path: origin.to_path_buf(),
            reason,
        })?;

        // Options declared without a value count as absent.
        let sections = raw
            .into_iter()
            .map(|(section, options)| {
                let options = options
                    .into_iter()
                    .filter_map(|(option, value)| value.map(|v| (option.to_lowercase(), v)))
                    .collect();
                (section.to_lowercase(), options)
            })
            .collect();

        Ok(Self {
            sections,
            source: None,
        })
    }

    /// The file this configuration was read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(&section.to_lowercase())
    }

    /// Raw lookup without a fallback.
    pub fn get(&self, section: &str, option: &str) -> Option<&str> {
        self.sections
            .get(&section.to_lowercase())
            .and_then(|options| options.get(&option.to_lowercase()))
            .map(String::as_str)
    }

    /// Lookup with an explicit fallback.
    pub fn get_or(&self, section: &str, option: &str, fallback: &str) -> String {
        self.get(section, option).unwrap_or(fallback).to_string()
    }

    /// Lookup that treats an empty value the same as a missing one.
    pub fn get_non_empty(&self, section: &str, option: &str) -> Option<&str> {
        self.get(section, option).filter(|v| !v.trim().is_empty())
    }

    /// Typed lookup. Absent or blank options are `Ok(None)`; unparseable values
    /// are `ConfigError::InvalidValue`.
    pub fn get_parsed<T>(&self, section: &str, option: &str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get_non_empty(section, option) {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse()
                .map(Some)
                .map_err(|e: T::Err| ConfigError::InvalidValue {
                    section: section.into(),
                    option: option.into(),
                    reason: e.to_string(),
                }),
        }
    }
}

/// Option names that hold secrets and must not show up in logs.
fn is_secret(option: &str) -> bool {
    option.contains("key") || option.contains("token") || option.contains("secret")
}

impl std::fmt::Debug for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redacted: HashMap<&str, HashMap<&str, &str>> = self
            .sections
            .iter()
            .map(|(section, options)| {
                let options = options
                    .iter()
                    .map(|(k, v)| {
                        let shown = if is_secret(k) { "[REDACTED]" } else { v.as_str() };
                        (k.as_str(), shown)
                    })
                    .collect();
                (section.as_str(), options)
            })
            .collect();

        f.debug_struct("Configuration")
            .field("source", &self.source)
            .field("sections", &redacted)
            .finish()
    }
}
