//! Backend trait — the abstraction over text-generation services.
//!
//! A Backend takes a fully-rendered prompt and returns generated text.
//! Implementations: OpenAI completions, Azure OpenAI, Ollama.

use async_trait::async_trait;

use crate::error::BackendError;
use crate::prompt::Prompt;

/// The core Backend trait.
///
/// The pipeline calls `generate()` without knowing which service is behind it.
/// Retries, if any, belong to the implementation; callers invoke it at most once
/// per explanation.
#[async_trait]
pub trait Backend: Send + Sync {
    /// A human-readable name for this backend (e.g., "openai", "ollama").
    fn name(&self) -> &str;

    /// Generate text from the prompt.
    async fn generate(&self, prompt: &Prompt) -> std::result::Result<String, BackendError>;
}
