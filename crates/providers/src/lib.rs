//! Text-generation backends for inGen.
//!
//! All backends implement the `ingen_core::Backend` trait.
//! The selector picks exactly one of them based on configuration.

pub mod azure;
mod http;
pub mod ollama;
pub mod openai;
pub mod selector;
pub mod settings;

pub use azure::{AzureOpenAiBackend, AzureSettings};
pub use ollama::{OllamaBackend, OllamaSettings};
pub use openai::{OpenAiBackend, OpenAiSettings};
pub use selector::{BackendKind, configured_kind, select};
pub use settings::BackendSettings;
