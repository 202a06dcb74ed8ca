//! Ollama backend (local-runner).
//!
//! Calls a local Ollama server's `/api/generate` endpoint with streaming
//! disabled. No credential is involved.

use async_trait::async_trait;
use ingen_config::{ConfigError, Configuration, EnvSource, OLLAMA};
use ingen_core::{Backend, BackendError, Prompt};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::http::{REQUEST_TIMEOUT, check_status, normalize_base, transport_error};
use crate::settings::BackendSettings;

pub const DEFAULT_MODEL: &str = "llama3";
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Settings for [`OllamaBackend`], read from the `[Ollama]` config section.
#[derive(Debug, Clone)]
pub struct OllamaSettings {
    pub model: String,
    pub base_url: String,
}

impl BackendSettings for OllamaSettings {
    const SOURCE: &'static str = "config file [Ollama]";

    fn resolve(config: &Configuration, _env: &dyn EnvSource) -> Result<Self, ConfigError> {
        Ok(Self {
            model: config.get_or(OLLAMA, "model", DEFAULT_MODEL),
            base_url: config.get_or(OLLAMA, "base_url", DEFAULT_BASE_URL),
        })
    }
}

/// A model served by a local Ollama instance.
pub struct OllamaBackend {
    model: String,
    endpoint: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaBackend {
    pub fn new(settings: OllamaSettings) -> Self {
        Self {
            endpoint: normalize_base(&settings.base_url),
            model: settings.model,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Backend for OllamaBackend {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn generate(&self, prompt: &Prompt) -> Result<String, BackendError> {
        let url = format!("{}/api/generate", self.endpoint);
        let request = GenerateRequest {
            model: &self.model,
            prompt: prompt.as_str(),
            stream: false,
        };

        debug!(model = %self.model, chars = prompt.char_len(), "Sending generate request");

        let response = self
            .client
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(BackendError::ModelNotFound(self.model.clone()));
        }

        let response = check_status(self.name(), response).await?;
        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| {
                BackendError::MalformedResponse(format!("Failed to parse response: {e}"))
            })?;

        Ok(parsed.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use std::collections::HashMap;

    #[test]
    fn resolve_defaults_to_llama3() {
        let env = HashMap::<String, String>::new();
        let s = OllamaSettings::resolve(&Configuration::empty(), &env).unwrap();
        assert_eq!(s.model, "llama3");
        assert_eq!(s.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn resolve_reads_model_from_config() {
        let config = Configuration::from_ini_str("[Ollama]\nmodel = phi3\n").unwrap();
        let s = OllamaSettings::resolve(&config, &HashMap::<String, String>::new()).unwrap();
        assert_eq!(s.model, "phi3");
    }

    #[tokio::test]
    async fn generate_disables_streaming() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/generate")
            .match_body(Matcher::Json(serde_json::json!({
                "model": "llama3",
                "prompt": "explain",
                "stream": false,
            })))
            .with_status(200)
            .with_body(r#"{"model":"llama3","response":"Local answer.","done":true}"#)
            .create_async()
            .await;

        let backend = OllamaBackend::new(OllamaSettings {
            model: "llama3".into(),
            base_url: server.url(),
        });
        let out = backend.generate(&Prompt::new("explain")).await.unwrap();

        assert_eq!(out, "Local answer.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn unknown_model_is_reported() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/api/generate")
            .with_status(404)
            .with_body(r#"{"error":"model 'nope' not found"}"#)
            .create_async()
            .await;

        let backend = OllamaBackend::new(OllamaSettings {
            model: "nope".into(),
            base_url: server.url(),
        });
        let err = backend.generate(&Prompt::new("x")).await.unwrap_err();
        assert!(matches!(err, BackendError::ModelNotFound(ref m) if m == "nope"));
    }
}
