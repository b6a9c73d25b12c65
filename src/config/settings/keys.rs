// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::PathBuf;

use crate::error::{CodesmithError, Result};
use crate::language::Language;

use super::validation::validate_timestamp_format;
use super::Settings;

/// Keys accepted by `settings get` and `settings set`.
pub const SETTING_KEYS: [&str; 5] = [
    "language",
    "history.path",
    "history.list_limit",
    "appearance.color",
    "appearance.timestamp_format",
];

impl Settings {
    /// Read a setting by its dotted key.
    pub fn get_key(&self, key: &str) -> Result<String> {
        let value = match key {
            "language" => self.defaults.language.to_string(),
            "history.path" => self.history_file().path().display().to_string(),
            "history.list_limit" => self.history.list_limit.to_string(),
            "appearance.color" => self.appearance.color.to_string(),
            "appearance.timestamp_format" => self.appearance.timestamp_format.clone(),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Update a setting by its dotted key.
    pub fn set_key(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "language" => {
                self.defaults.language = value.parse::<Language>()?;
            }
            "history.path" => {
                self.history.path = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "history.list_limit" => {
                let limit: usize = value.parse().map_err(|_| {
                    CodesmithError::InvalidInput("Invalid list limit value".to_string())
                })?;
                if limit == 0 {
                    return Err(CodesmithError::InvalidInput(
                        "List limit must be at least 1".to_string(),
                    ));
                }
                self.history.list_limit = limit;
            }
            "appearance.color" => {
                self.appearance.color = value
                    .parse()
                    .map_err(|_| CodesmithError::InvalidInput("Invalid boolean value".to_string()))?;
            }
            "appearance.timestamp_format" => {
                validate_timestamp_format(value)?;
                self.appearance.timestamp_format = value.to_string();
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> CodesmithError {
    CodesmithError::InvalidInput(format!(
        "Unknown setting '{}'. Valid settings: {}",
        key,
        SETTING_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_is_readable() {
        let settings = Settings::default();
        for key in SETTING_KEYS {
            assert!(settings.get_key(key).is_ok(), "key {} unreadable", key);
        }
    }

    #[test]
    fn test_set_language() {
        let mut settings = Settings::default();
        settings.set_key("language", "Python").unwrap();
        assert_eq!(settings.defaults.language, Language::Python);
        assert_eq!(settings.get_key("language").unwrap(), "python");
    }

    #[test]
    fn test_set_invalid_language() {
        let mut settings = Settings::default();
        assert!(settings.set_key("language", "cobol").is_err());
        assert_eq!(settings.defaults.language, Language::Javascript);
    }

    #[test]
    fn test_set_history_path_and_unset() {
        let mut settings = Settings::default();
        settings.set_key("history.path", "/tmp/h.json").unwrap();
        assert_eq!(settings.history.path, Some(PathBuf::from("/tmp/h.json")));
        settings.set_key("history.path", "").unwrap();
        assert!(settings.history.path.is_none());
    }

    #[test]
    fn test_set_list_limit() {
        let mut settings = Settings::default();
        settings.set_key("history.list_limit", "50").unwrap();
        assert_eq!(settings.history.list_limit, 50);
        assert!(settings.set_key("history.list_limit", "0").is_err());
        assert!(settings.set_key("history.list_limit", "many").is_err());
    }

    #[test]
    fn test_set_color() {
        let mut settings = Settings::default();
        settings.set_key("appearance.color", "false").unwrap();
        assert!(!settings.appearance.color);
        assert!(settings.set_key("appearance.color", "maybe").is_err());
    }

    #[test]
    fn test_set_timestamp_format() {
        let mut settings = Settings::default();
        settings
            .set_key("appearance.timestamp_format", "%Y-%m-%d")
            .unwrap();
        assert_eq!(settings.appearance.timestamp_format, "%Y-%m-%d");
        assert!(settings
            .set_key("appearance.timestamp_format", "%Q")
            .is_err());
    }

    #[test]
    fn test_unknown_key() {
        let mut settings = Settings::default();
        let err = settings.get_key("model").unwrap_err();
        assert!(err.to_string().contains("Unknown setting 'model'"));
        assert!(settings.set_key("model", "x").is_err());
    }
}
