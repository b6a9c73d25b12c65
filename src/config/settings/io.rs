// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::history::HistoryFile;

use super::merge::deep_merge;
use super::Settings;

impl Settings {
    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        Self::codesmith_home().join("settings.json")
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let raw_value: serde_json::Value = serde_json::from_str(&content)?;
        let settings: Settings = serde_json::from_value(raw_value)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a specific path, merging with existing file content
    /// to preserve unknown keys from other versions or hand edits.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let new_value = serde_json::to_value(self)?;

        let merged = if path.exists() {
            let existing_content = std::fs::read_to_string(path)?;
            match serde_json::from_str::<serde_json::Value>(&existing_content) {
                Ok(existing_value) => deep_merge(existing_value, new_value),
                Err(_) => new_value, // Corrupt file, overwrite entirely.
            }
        } else {
            new_value
        };

        let content = serde_json::to_string_pretty(&merged)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save settings to a specific path, fully overwriting (no merge).
    /// Used for explicit resets.
    pub fn save_to_clean(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the codesmith home directory (~/.codesmith or $CODESMITH_HOME).
    pub fn codesmith_home() -> PathBuf {
        if let Ok(home) = std::env::var("CODESMITH_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".codesmith")
    }

    /// The history file these settings point at.
    pub fn history_file(&self) -> HistoryFile {
        let path = self
            .history
            .path
            .clone()
            .unwrap_or_else(|| Self::codesmith_home().join("history.json"));
        HistoryFile::new(path)
    }
}
