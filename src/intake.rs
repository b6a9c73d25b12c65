// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Prompt intake
//!
//! Validates a prompt before it is handed to code generation. Only a
//! validated [`PromptSubmission`] can become a history record.

use crate::error::{CodesmithError, Result};
use crate::language::Language;

/// Maximum prompt length in characters.
pub const MAX_PROMPT_CHARS: usize = 5000;

/// Decides whether a prompt asks for code.
///
/// Implementations should be stateless and thread-safe.
pub trait PromptCheck: Send + Sync {
    /// Return true if the prompt is a coding request.
    fn is_coding_prompt(&self, text: &str) -> bool;
}

/// Check that accepts every prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl PromptCheck for AcceptAll {
    fn is_coding_prompt(&self, _text: &str) -> bool {
        true
    }
}

/// A prompt that passed intake validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSubmission {
    prompt: String,
    language: Language,
}

impl PromptSubmission {
    /// Validate a prompt for the given language.
    ///
    /// The prompt must be non-blank, at most [`MAX_PROMPT_CHARS`] characters,
    /// and accepted by `check`. The prompt text is kept as typed.
    pub fn new(
        prompt: impl Into<String>,
        language: Language,
        check: &dyn PromptCheck,
    ) -> Result<Self> {
        let prompt: String = prompt.into();

        if prompt.trim().is_empty() {
            return Err(CodesmithError::InvalidInput(
                "Prompt must not be empty".to_string(),
            ));
        }

        let chars = prompt.chars().count();
        if chars > MAX_PROMPT_CHARS {
            return Err(CodesmithError::InvalidInput(format!(
                "Prompt is {} characters, limit is {}",
                chars, MAX_PROMPT_CHARS
            )));
        }

        if !check.is_coding_prompt(&prompt) {
            return Err(CodesmithError::InvalidInput(
                "Only code-generation prompts are accepted. Describe the code you want, \
                 e.g. 'Create a function to sort an array'"
                    .to_string(),
            ));
        }

        Ok(Self { prompt, language })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RejectAll;

    impl PromptCheck for RejectAll {
        fn is_coding_prompt(&self, _text: &str) -> bool {
            false
        }
    }

    #[test]
    fn test_valid_submission() {
        let sub = PromptSubmission::new("sort an array", Language::Python, &AcceptAll).unwrap();
        assert_eq!(sub.prompt(), "sort an array");
        assert_eq!(sub.language(), Language::Python);
    }

    #[test]
    fn test_blank_prompt_rejected() {
        let err = PromptSubmission::new("   \n", Language::Go, &AcceptAll).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_prompt_at_limit_accepted() {
        let prompt = "a".repeat(MAX_PROMPT_CHARS);
        assert!(PromptSubmission::new(prompt, Language::Go, &AcceptAll).is_ok());
    }

    #[test]
    fn test_prompt_over_limit_rejected() {
        let prompt = "a".repeat(MAX_PROMPT_CHARS + 1);
        let err = PromptSubmission::new(prompt, Language::Go, &AcceptAll).unwrap_err();
        assert!(err.to_string().contains("5001"));
    }

    #[test]
    fn test_limit_counts_chars_not_bytes() {
        let prompt = "é".repeat(MAX_PROMPT_CHARS);
        assert!(PromptSubmission::new(prompt, Language::Go, &AcceptAll).is_ok());
    }

    #[test]
    fn test_non_coding_prompt_rejected() {
        let err = PromptSubmission::new("tell me a joke", Language::Go, &RejectAll).unwrap_err();
        assert!(matches!(err, CodesmithError::InvalidInput(_)));
        assert!(err.to_string().contains("code-generation"));
    }
}
