// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for codesmith
//!
//! Handles loading and saving settings from ~/.codesmith/settings.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::language::Language;

mod io;
mod keys;
mod merge;
mod validation;

pub use keys::SETTING_KEYS;

/// Main settings structure, stored in ~/.codesmith/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Settings {
    /// Defaults for new prompts
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// History storage and listing
    #[serde(default)]
    pub history: HistoryConfig,

    /// Appearance settings
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

/// Defaults for new prompts
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DefaultsConfig {
    /// Language used when a prompt does not name one
    #[serde(default)]
    pub language: Language,
}

/// History storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryConfig {
    /// History file (defaults to ~/.codesmith/history.json)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Number of most recent matches shown by `history list`
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: None,
            list_limit: default_list_limit(),
        }
    }
}

/// Appearance settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceConfig {
    /// Colour terminal output
    #[serde(default = "default_true")]
    pub color: bool,

    /// chrono format string for record timestamps (local time)
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            color: true,
            timestamp_format: default_timestamp_format(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_list_limit() -> usize {
    20
}

fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}
