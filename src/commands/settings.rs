// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings command

use std::io::Write;
use std::path::Path;

use crate::cli::args::{SettingsArgs, SettingsCommands};
use crate::config::Settings;
use crate::error::Result;

/// Execute a settings subcommand. Changes are written to `path`.
pub fn execute<W: Write>(
    args: &SettingsArgs,
    mut settings: Settings,
    path: &Path,
    out: &mut W,
) -> Result<()> {
    match &args.command {
        SettingsCommands::Show => {
            let json = serde_json::to_string_pretty(&settings)?;
            writeln!(out, "{}", json)?;
        }
        SettingsCommands::Set { key, value } => {
            settings.set_key(key, value)?;
            settings.save_to(path)?;
            tracing::debug!(key = %key, path = %path.display(), "setting updated");
            writeln!(out, "Setting '{}' updated.", key)?;
        }
        SettingsCommands::Get { key } => {
            writeln!(out, "{}", settings.get_key(key)?)?;
        }
        SettingsCommands::Reset => {
            Settings::default().save_to_clean(path)?;
            writeln!(out, "Settings reset to defaults.")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use tempfile::TempDir;

    fn args(command: SettingsCommands) -> SettingsArgs {
        SettingsArgs { command }
    }

    #[test]
    fn test_set_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        let mut out = Vec::new();

        execute(
            &args(SettingsCommands::Set {
                key: "language".to_string(),
                value: "go".to_string(),
            }),
            Settings::default(),
            &path,
            &mut out,
        )
        .unwrap();

        assert_eq!(
            Settings::load_from(&path).unwrap().defaults.language,
            Language::Go
        );
        assert!(String::from_utf8(out).unwrap().contains("updated"));
    }

    #[test]
    fn test_set_invalid_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        let mut out = Vec::new();

        let result = execute(
            &args(SettingsCommands::Set {
                key: "history.list_limit".to_string(),
                value: "zero".to_string(),
            }),
            Settings::default(),
            &path,
            &mut out,
        );

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_get() {
        let temp_dir = TempDir::new().unwrap();
        let mut out = Vec::new();
        execute(
            &args(SettingsCommands::Get {
                key: "history.list_limit".to_string(),
            }),
            Settings::default(),
            &temp_dir.path().join("settings.json"),
            &mut out,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "20\n");
    }

    #[test]
    fn test_reset() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{"defaults": {"language": "ruby"}, "other": 1}"#).unwrap();

        let mut out = Vec::new();
        execute(
            &args(SettingsCommands::Reset),
            Settings::load_from(&path).unwrap(),
            &path,
            &mut out,
        )
        .unwrap();

        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
        assert!(!std::fs::read_to_string(&path).unwrap().contains("other"));
    }

    #[test]
    fn test_show_is_json() {
        let temp_dir = TempDir::new().unwrap();
        let mut out = Vec::new();
        execute(
            &args(SettingsCommands::Show),
            Settings::default(),
            &temp_dir.path().join("settings.json"),
            &mut out,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["defaults"]["language"], "javascript");
    }
}
