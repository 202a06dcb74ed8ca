//! The fully-rendered prompt handed to a backend.
//!
//! A [`Prompt`] is literal text. Nothing inside it is treated as a template
//! placeholder, so log lines containing `{braces}` reach the model verbatim.

use std::fmt;

/// Literal prompt text, rendered once per explanation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn braces_are_kept_literally() {
        let prompt = Prompt::new("intent {intent_id} switched to {mode}");
        assert_eq!(prompt.as_str(), "intent {intent_id} switched to {mode}");
        assert_eq!(prompt.to_string(), prompt.as_str());
    }

    #[test]
    fn char_len_counts_unicode_scalars() {
        assert_eq!(Prompt::new("héllo").char_len(), 5);
    }
}
