//! Backend selector — picks the text-generation backend named in config.
//!
//! `General.llm` is the only dispatch key. Settings are fully resolved before a
//! backend is constructed, and construction performs no network I/O.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use ingen_config::{ConfigError, Configuration, EnvSource, GENERAL};
use ingen_core::Backend;
use tracing::info;

use crate::azure::{AzureOpenAiBackend, AzureSettings};
use crate::ollama::{OllamaBackend, OllamaSettings};
use crate::openai::{OpenAiBackend, OpenAiSettings};
use crate::settings::BackendSettings;

/// Dispatch key used when `General.llm` is not set.
pub const DEFAULT_BACKEND: &str = "openai";

/// The supported backend variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Hosted OpenAI completions (cloud-completion).
    OpenAi,
    /// Azure OpenAI deployment (enterprise-cloud).
    AzureOpenAi,
    /// Local Ollama server (local-runner).
    Ollama,
}

impl BackendKind {
    pub const ALL: [BackendKind; 3] = [
        BackendKind::OpenAi,
        BackendKind::AzureOpenAi,
        BackendKind::Ollama,
    ];

    /// The `General.llm` value that selects this variant.
    pub fn key(&self) -> &'static str {
        match self {
            BackendKind::OpenAi => "openai",
            BackendKind::AzureOpenAi => "azure",
            BackendKind::Ollama => "ollama",
        }
    }

    /// Where this variant reads its settings from.
    pub fn settings_source(&self) -> &'static str {
        match self {
            BackendKind::OpenAi => OpenAiSettings::SOURCE,
            BackendKind::AzureOpenAi => AzureSettings::SOURCE,
            BackendKind::Ollama => OllamaSettings::SOURCE,
        }
    }

    /// Resolve settings and construct the backend.
    pub fn build(
        &self,
        config: &Configuration,
        env: &dyn EnvSource,
    ) -> Result<Arc<dyn Backend>, ConfigError> {
        let backend: Arc<dyn Backend> = match self {
            BackendKind::OpenAi => {
                Arc::new(OpenAiBackend::new(OpenAiSettings::resolve(config, env)?))
            }
            BackendKind::AzureOpenAi => {
                Arc::new(AzureOpenAiBackend::new(AzureSettings::resolve(config, env)?))
            }
            BackendKind::Ollama => {
                Arc::new(OllamaBackend::new(OllamaSettings::resolve(config, env)?))
            }
        };
        Ok(backend)
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        BackendKind::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| ConfigError::UnsupportedBackend(key.to_string()))
    }
}

/// Read `General.llm` (fallback `openai`) and map it to a variant.
pub fn configured_kind(config: &Configuration) -> Result<BackendKind, ConfigError> {
    config.get_or(GENERAL, "llm", DEFAULT_BACKEND).parse()
}

/// Select and construct the configured backend.
///
/// Returns exactly one backend or an error; never a partially-built one.
pub fn select(
    config: &Configuration,
    env: &dyn EnvSource,
) -> Result<Arc<dyn Backend>, ConfigError> {
    let kind = configured_kind(config)?;
    let backend = kind.build(config, env)?;
    info!(backend = %kind, source = kind.settings_source(), "Selected LLM backend");
    Ok(backend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::azure::{ENV_API_KEY, ENV_API_VERSION, ENV_DEPLOYMENT, ENV_ENDPOINT};
    use std::collections::HashMap;

    fn no_env() -> HashMap<String, String> {
        HashMap::new()
    }

    #[test]
    fn missing_llm_selects_openai() {
        let config = Configuration::from_ini_str("[OpenAI]\napi_key = sk-test\n").unwrap();
        assert_eq!(configured_kind(&config).unwrap(), BackendKind::OpenAi);
        assert_eq!(configured_kind(&Configuration::empty()).unwrap(), BackendKind::OpenAi);

        let backend = select(&config, &no_env()).unwrap();
        assert_eq!(backend.name(), "openai");
    }

    #[test]
    fn openai_without_key_is_config_error() {
        let err = select(&Configuration::empty(), &no_env()).err().unwrap();
        assert!(matches!(err, ConfigError::MissingSetting { .. }));
    }

    #[test]
    fn unsupported_backend_names_offending_value() {
        for name in ["bard", "OpenAI", "local-runner"] {
            let config =
                Configuration::from_ini_str(&format!("[General]\nllm = {name}\n")).unwrap();
            let err = select(&config, &no_env()).err().unwrap();
            assert!(
                matches!(err, ConfigError::UnsupportedBackend(ref v) if v == name),
                "unexpected error for {name:?}: {err}"
            );
            assert!(err.to_string().contains(name));
        }
    }

    #[test]
    fn ollama_needs_no_credential() {
        let config = Configuration::from_ini_str("[General]\nllm = ollama\n").unwrap();
        let backend = select(&config, &no_env()).unwrap();
        assert_eq!(backend.name(), "ollama");
    }

    #[test]
    fn azure_is_environment_sourced() {
        let config = Configuration::from_ini_str("[General]\nllm = azure\n").unwrap();
        let err = select(&config, &no_env()).err().unwrap();
        assert!(matches!(err, ConfigError::MissingEnv(_)));

        let env: HashMap<String, String> = [
            (ENV_DEPLOYMENT, "d"),
            (ENV_ENDPOINT, "https://example.openai.azure.com"),
            (ENV_API_VERSION, "2024-02-15-preview"),
            (ENV_API_KEY, "k"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let backend = select(&config, &env).unwrap();
        assert_eq!(backend.name(), "azure");
    }

    #[test]
    fn kind_round_trips_through_key() {
        for kind in BackendKind::ALL {
            assert_eq!(kind.key().parse::<BackendKind>().unwrap(), kind);
            assert!(!kind.settings_source().is_empty());
        }
    }
}
