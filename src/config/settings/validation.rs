// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use chrono::format::{Item, StrftimeItems};

use crate::error::{CodesmithError, Result};

use super::Settings;

impl Settings {
    /// Reject values the rest of the program cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.history.list_limit == 0 {
            return Err(CodesmithError::Config(
                "history.list_limit must be at least 1".to_string(),
            ));
        }
        validate_timestamp_format(&self.appearance.timestamp_format)
    }
}

pub(super) fn validate_timestamp_format(format: &str) -> Result<()> {
    if format.is_empty() {
        return Err(CodesmithError::Config(
            "appearance.timestamp_format must not be empty".to_string(),
        ));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(CodesmithError::Config(format!(
            "appearance.timestamp_format '{}' is not a valid format string",
            format
        )));
    }
    Ok(())
}
