// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! A single completed generation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::intake::PromptSubmission;
use crate::language::Language;

/// One prompt→code generation kept in history.
///
/// Everything except `favorite` is fixed at creation; `favorite` only
/// changes through [`super::HistoryStore::toggle_favorite`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(deserialize_with = "non_blank_prompt")]
    prompt: String,
    language: Language,
    code: String,
    timestamp: DateTime<Utc>,
    #[serde(default)]
    favorite: bool,
}

impl HistoryRecord {
    /// Create a record for a generation that just completed.
    pub fn new(submission: &PromptSubmission, code: impl Into<String>) -> Self {
        Self::with_timestamp(submission, code, Utc::now())
    }

    /// Create a record with an explicit creation time.
    pub fn with_timestamp(
        submission: &PromptSubmission,
        code: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            prompt: submission.prompt().to_string(),
            language: submission.language(),
            code: code.into(),
            timestamp,
            favorite: false,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    /// First line of the generated code.
    pub fn code_preview(&self) -> &str {
        self.code.lines().next().unwrap_or("")
    }

    /// Prompt shortened to at most `max_chars` characters, with `...` when cut.
    pub fn prompt_preview(&self, max_chars: usize) -> String {
        if self.prompt.chars().count() <= max_chars {
            return self.prompt.clone();
        }
        if max_chars < 3 {
            return self.prompt.chars().take(max_chars).collect();
        }
        let keep = max_chars.saturating_sub(3);
        let mut short: String = self.prompt.chars().take(keep).collect();
        short.push_str("...");
        short
    }

    /// Case-insensitive substring match on the prompt.
    ///
    /// `needle_lower` must already be lowercased.
    pub(crate) fn prompt_contains(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.prompt.to_lowercase().contains(needle_lower)
    }

    pub(crate) fn toggle_favorite(&mut self) -> bool {
        self.favorite = !self.favorite;
        self.favorite
    }
}

fn non_blank_prompt<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let prompt = String::deserialize(deserializer)?;
    if prompt.trim().is_empty() {
        return Err(serde::de::Error::custom("prompt must not be blank"));
    }
    Ok(prompt)
}
