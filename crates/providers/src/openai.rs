//! OpenAI completions backend (cloud-completion).
//!
//! Talks to the legacy `/v1/completions` endpoint: a single prompt in, a single
//! text completion out. Settings come from the `[OpenAI]` config section.

use async_trait::async_trait;
use ingen_config::{ConfigError, Configuration, EnvSource, OPENAI};
use ingen_core::{Backend, BackendError, Prompt};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::http::{REQUEST_TIMEOUT, check_status, normalize_base, transport_error};
use crate::settings::BackendSettings;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-instruct";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 256;

/// Settings for [`OpenAiBackend`], read from the config file only.
#[derive(Clone)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl std::fmt::Debug for OpenAiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiSettings")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl BackendSettings for OpenAiSettings {
    const SOURCE: &'static str = "config file [OpenAI]";

    fn resolve(config: &Configuration, _env: &dyn EnvSource) -> Result<Self, ConfigError> {
        let api_key = config
            .get_non_empty(OPENAI, "api_key")
            .ok_or_else(|| ConfigError::MissingSetting {
                section: OPENAI.into(),
                option: "api_key".into(),
            })?
            .trim()
            .to_string();

        Ok(Self {
            api_key,
            model: config.get_or(OPENAI, "model", DEFAULT_MODEL),
            base_url: config.get_or(OPENAI, "base_url", DEFAULT_BASE_URL),
            temperature: config
                .get_parsed(OPENAI, "temperature")?
                .unwrap_or(DEFAULT_TEMPERATURE),
            max_tokens: config
                .get_parsed(OPENAI, "max_tokens")?
                .unwrap_or(DEFAULT_MAX_TOKENS),
        })
    }
}

/// The hosted OpenAI completions API.
pub struct OpenAiBackend {
    settings: OpenAiSettings,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiBackend {
    pub fn new(settings: OpenAiSettings) -> Self {
        Self {
            base_url: normalize_base(&settings.base_url),
            settings,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Backend for OpenAiBackend {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, prompt: &Prompt) -> Result<String, BackendError> {
        let url = format!("{}/completions", self.base_url);

        let body = CompletionRequest {
            model: Some(self.settings.model.as_str()),
            prompt: prompt.as_str(),
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        debug!(
            model = %self.settings.model,
            chars = prompt.char_len(),
            "Sending completion request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.settings.api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let response = check_status(self.name(), response).await?;
        first_completion(response).await
    }
}

// --- Completions API types (shared with the Azure backend) ---

#[derive(Debug, Serialize)]
pub(crate) struct CompletionRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<&'a str>,
    pub prompt: &'a str,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    text: String,
}

/// Extract the first choice's text from a completions response.
pub(crate) async fn first_completion(response: reqwest::Response) -> Result<String, BackendError> {
    let parsed: CompletionResponse = response
        .json()
        .await
        .map_err(|e| BackendError::MalformedResponse(format!("Failed to parse response: {e}")))?;

    parsed
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.text)
        .ok_or_else(|| BackendError::MalformedResponse("No choices in response".into()))
}
