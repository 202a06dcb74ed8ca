//! Azure OpenAI backend (enterprise-cloud).
//!
//! Unlike the other backends, every setting comes from the process
//! environment. The config file is never consulted for Azure.

use async_trait::async_trait;
use ingen_config::{ConfigError, Configuration, EnvSource};
use ingen_core::{Backend, BackendError, Prompt};
use tracing::debug;

use crate::http::{REQUEST_TIMEOUT, check_status, normalize_base, transport_error};
use crate::openai::{CompletionRequest, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, first_completion};
use crate::settings::BackendSettings;

pub const ENV_DEPLOYMENT: &str = "AZURE_DEPLOYMENT_NAME";
pub const ENV_ENDPOINT: &str = "AZURE_OPENAI_ENDPOINT";
pub const ENV_API_VERSION: &str = "AZURE_OPENAI_API_VERSION";
pub const ENV_API_KEY: &str = "AZURE_OPENAI_KEY";

/// Settings for [`AzureOpenAiBackend`], read from the environment only.
#[derive(Clone)]
pub struct AzureSettings {
    pub deployment: String,
    pub endpoint: String,
    pub api_version: String,
    pub api_key: String,
}

impl std::fmt::Debug for AzureSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureSettings")
            .field("deployment", &self.deployment)
            .field("endpoint", &self.endpoint)
            .field("api_version", &self.api_version)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

fn required(env: &dyn EnvSource, key: &str) -> Result<String, ConfigError> {
    env.non_empty(key)
        .map(|v| v.trim().to_string())
        .ok_or_else(|| ConfigError::MissingEnv(key.into()))
}

impl BackendSettings for AzureSettings {
    const SOURCE: &'static str = "environment (AZURE_*)";

    fn resolve(_config: &Configuration, env: &dyn EnvSource) -> Result<Self, ConfigError> {
        Ok(Self {
            deployment: required(env, ENV_DEPLOYMENT)?,
            endpoint: required(env, ENV_ENDPOINT)?,
            api_version: required(env, ENV_API_VERSION)?,
            api_key: required(env, ENV_API_KEY)?,
        })
    }
}

/// A deployment on an Azure OpenAI resource.
pub struct AzureOpenAiBackend {
    settings: AzureSettings,
    client: reqwest::Client,
}

impl AzureOpenAiBackend {
    pub fn new(settings: AzureSettings) -> Self {
        Self {
            settings,
            client: reqwest::Client::new(),
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/completions",
            normalize_base(&self.settings.endpoint),
            self.settings.deployment
        )
    }
}

#[async_trait]
impl Backend for AzureOpenAiBackend {
    fn name(&self) -> &str {
        "azure"
    }

    async fn generate(&self, prompt: &Prompt) -> Result<String, BackendError> {
        // The deployment fixes the model, so none is sent.
        let body = CompletionRequest {
            model: None,
            prompt: prompt.as_str(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        };

        debug!(
            deployment = %self.settings.deployment,
            api_version = %self.settings.api_version,
            chars = prompt.char_len(),
            "Sending Azure completion request"
        );

        let response = self
            .client
            .post(self.completions_url())
            .query(&[("api-version", self.settings.api_version.as_str())])
            .header("api-key", &self.settings.api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let response = check_status(self.name(), response).await?;
        first_completion(response).await
    }
}
