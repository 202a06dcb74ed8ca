//! Prompt assembly.
//!
//! The rendered prompt is, in fixed order:
//!
//! 1. `General.use_case_context`
//! 2. a blank line (`"\n\n"`)
//! 3. `General.system_prompt`
//! 4. every log line, concatenated as-is
//!
//! The result is literal text. Log content that looks like template syntax is
//! never interpreted.
//!
//! # Size cap
//!
//! `General.max_prompt_chars` optionally bounds the prompt. When set, whole log
//! lines are dropped oldest-first until it fits; the context and system prompt
//! are never cut. Unset, zero, or negative means unbounded.

use ingen_config::{ConfigError, Configuration, GENERAL};
use ingen_core::Prompt;
use tracing::warn;

// ── Types ─────────────────────────────────────────────────────────────────

/// Renders prompts from configuration text and log lines.
#[derive(Debug, Clone, Default)]
pub struct PromptAssembler {
    use_case_context: String,
    system_prompt: String,
    max_chars: Option<usize>,
}

impl PromptAssembler {
    pub fn new(use_case_context: impl Into<String>, system_prompt: impl Into<String>) -> Self {
        Self {
            use_case_context: use_case_context.into(),
            system_prompt: system_prompt.into(),
            max_chars: None,
        }
    }

    /// Cap the rendered prompt at `max_chars` characters.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = Some(max_chars);
        self
    }

    /// Read context, system prompt, and the optional size cap from config.
    pub fn from_config(config: &Configuration) -> Result<Self, ConfigError> {
        let assembler = Self::new(
            config.get_or(GENERAL, "use_case_context", ""),
            config.get_or(GENERAL, "system_prompt", ""),
        );

        // Non-positive disables the cap, same as leaving it unset.
        Ok(match config.get_parsed::<i64>(GENERAL, "max_prompt_chars")? {
            Some(limit) if limit > 0 => {
                assembler.with_max_chars(usize::try_from(limit).unwrap_or(usize::MAX))
            }
            _ => assembler,
        })
    }

    fn header(&self) -> String {
        format!("{}\n\n{}", self.use_case_context, self.system_prompt)
    }

    /// Render the prompt. Identical inputs always produce identical output.
    pub fn build(&self, log_lines: &[String]) -> Prompt {
        let header = self.header();
        let kept = match self.max_chars {
            Some(limit) => self.fit_lines(header.chars().count(), log_lines, limit),
            None => log_lines,
        };

        let body_len: usize = kept.iter().map(String::len).sum();
        let mut text = String::with_capacity(header.len() + body_len);
        text.push_str(&header);
        for line in kept {
            text.push_str(line);
        }
        Prompt::new(text)
    }

    /// Keep the newest suffix of `lines` that fits in `limit` after the header.
    fn fit_lines<'a>(
        &self,
        header_chars: usize,
        lines: &'a [String],
        limit: usize,
    ) -> &'a [String] {
        let mut budget = limit.saturating_sub(header_chars);
        let mut start = lines.len();
        for (i, line) in lines.iter().enumerate().rev() {
            let len = line.chars().count();
            if len > budget {
                break;
            }
            budget -= len;
            start = i;
        }

        if start > 0 {
            warn!(
                dropped = start,
                kept = lines.len() - start,
                limit,
                "Prompt exceeds max_prompt_chars, dropping oldest log lines"
            );
        }
        &lines[start..]
    }
}

/// Convenience wrapper: read settings from `config` and render `log_lines`.
pub fn build_prompt(config: &Configuration, log_lines: &[String]) -> Result<Prompt, ConfigError> {
    Ok(PromptAssembler::from_config(config)?.build(log_lines))
}
