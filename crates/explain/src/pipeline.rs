//! The explanation pipeline.
//!
//! One call to [`ExplanationPipeline::generate`] runs, in order:
//! read log → build prompt → obtain backend → invoke backend once.
//! Any failure along the way is returned unchanged; nothing is retried.

use std::path::PathBuf;
use std::sync::Arc;

use ingen_config::{Configuration, EnvSource, ProcessEnv};
use ingen_core::{Backend, Prompt, Result};
use tracing::{Instrument, info, info_span};

use crate::log::LogReader;
use crate::prompt::PromptAssembler;

/// Generates natural-language explanations of logged system adaptations.
pub struct ExplanationPipeline {
    config: Configuration,
    log_path: PathBuf,
    backend: Option<Arc<dyn Backend>>,
    env: Box<dyn EnvSource + Send + Sync>,
}

impl ExplanationPipeline {
    /// Create a pipeline that selects its backend from `config` on each call.
    pub fn new(config: Configuration, log_path: impl Into<PathBuf>) -> Self {
        Self {
            config,
            log_path: log_path.into(),
            backend: None,
            env: Box::new(ProcessEnv),
        }
    }

    /// Use this backend instead of selecting one from configuration.
    pub fn with_backend(mut self, backend: Arc<dyn Backend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Read backend environment variables from `env` instead of the process.
    pub fn with_env(mut self, env: impl EnvSource + Send + Sync + 'static) -> Self {
        self.env = Box::new(env);
        self
    }

    /// Read the log and render the prompt without contacting any backend.
    pub fn render_prompt(&self) -> Result<Prompt> {
        info!("Reading log entries");
        let lines = LogReader::new(&self.log_path).read()?;

        info!(lines = lines.len(), "Generating prompt");
        let prompt = PromptAssembler::from_config(&self.config)?.build(&lines);
        Ok(prompt)
    }

    /// Resolve the backend: the injected one, or a fresh selection from config.
    pub fn backend(&self) -> Result<Arc<dyn Backend>> {
        match &self.backend {
            Some(backend) => Ok(Arc::clone(backend)),
            None => Ok(ingen_providers::select(&self.config, self.env.as_ref())?),
        }
    }

    /// Generate an explanation.
    ///
    /// `intent_id` is recorded for tracing only. The whole log is always used.
    pub async fn generate(&self, intent_id: &str) -> Result<String> {
        let span = info_span!("explain", intent_id = %intent_id);
        async {
            let prompt = self.render_prompt()?;

            info!("Selecting backend");
            let backend = self.backend()?;

            info!(backend = backend.name(), chars = prompt.char_len(), "Invoking backend");
            let explanation = backend.generate(&prompt).await?;

            info!(chars = explanation.chars().count(), "Explanation generated");
            Ok::<String, ingen_core::Error>(explanation)
        }
        .instrument(span)
        .await
    }
}

impl std::fmt::Debug for ExplanationPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExplanationPipeline")
            .field("config", &self.config)
            .field("log_path", &self.log_path)
            .field("backend", &self.backend.as_ref().map(|b| b.name().to_string()))
            .finish()
    }
}
