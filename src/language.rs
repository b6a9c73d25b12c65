// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Canonical list of target languages
//!
//! Prompt intake and the history filter both draw from [`Language::ALL`],
//! so a record can never carry a language the filter does not know about.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CodesmithError;

/// A supported code-generation target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Javascript,
    Python,
    Typescript,
    Java,
    Cpp,
    Go,
    Rust,
    Csharp,
    Php,
    Ruby,
}

impl Language {
    /// Every supported language, in prompt-intake order.
    pub const ALL: [Language; 10] = [
        Language::Javascript,
        Language::Python,
        Language::Typescript,
        Language::Java,
        Language::Cpp,
        Language::Go,
        Language::Rust,
        Language::Csharp,
        Language::Php,
        Language::Ruby,
    ];

    /// Stable identifier used in storage and on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Python => "python",
            Language::Typescript => "typescript",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Csharp => "csharp",
            Language::Php => "php",
            Language::Ruby => "ruby",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Language::Javascript => "JavaScript",
            Language::Python => "Python",
            Language::Typescript => "TypeScript",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::Csharp => "C#",
            Language::Php => "PHP",
            Language::Ruby => "Ruby",
        }
    }

    /// File extension (with leading dot) for exported code.
    pub fn extension(self) -> &'static str {
        match self {
            Language::Javascript => ".js",
            Language::Python => ".py",
            Language::Typescript => ".ts",
            Language::Java => ".java",
            Language::Cpp => ".cpp",
            Language::Go => ".go",
            Language::Rust => ".rs",
            Language::Csharp => ".cs",
            Language::Php => ".php",
            Language::Ruby => ".rb",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Language {
    type Err = CodesmithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.id() == wanted)
            .ok_or_else(|| {
                CodesmithError::InvalidInput(format!(
                    "Unknown language '{}'. Supported: {}",
                    s,
                    Language::ALL
                        .iter()
                        .map(|l| l.id())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

/// Language restriction applied when querying history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguageFilter {
    /// Every language matches
    #[default]
    All,
    /// Only records in this language match
    Only(Language),
}

impl LanguageFilter {
    /// Check whether a record language passes the filter.
    pub fn matches(self, language: Language) -> bool {
        match self {
            LanguageFilter::All => true,
            LanguageFilter::Only(wanted) => wanted == language,
        }
    }
}

impl fmt::Display for LanguageFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageFilter::All => f.write_str("all"),
            LanguageFilter::Only(lang) => write!(f, "{}", lang),
        }
    }
}

impl FromStr for LanguageFilter {
    type Err = CodesmithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(LanguageFilter::All);
        }
        s.parse().map(LanguageFilter::Only)
    }
}

impl From<Language> for LanguageFilter {
    fn from(language: Language) -> Self {
        LanguageFilter::Only(language)
    }
}
