//! Explanation generation for inGen system adaptations.
//!
//! - [`LogReader`] loads the adaptation log as raw lines.
//! - [`PromptAssembler`] renders context, system prompt, and log into one literal prompt.
//! - [`ExplanationPipeline`] ties them to the configured backend.

pub mod log;
pub mod pipeline;
pub mod prompt;

pub use log::LogReader;
pub use pipeline::ExplanationPipeline;
pub use prompt::{PromptAssembler, build_prompt};
