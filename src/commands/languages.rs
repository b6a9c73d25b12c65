// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Supported languages command

use std::io::Write;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::language::Language;

#[derive(Serialize)]
struct LanguageInfo {
    id: &'static str,
    label: &'static str,
    extension: &'static str,
}

/// Execute the languages command
pub fn execute<W: Write>(format: &OutputFormat, out: &mut W) -> Result<()> {
    if matches!(format, OutputFormat::Json) {
        let infos: Vec<LanguageInfo> = Language::ALL
            .iter()
            .map(|lang| LanguageInfo {
                id: lang.id(),
                label: lang.label(),
                extension: lang.extension(),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &infos)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "\nSupported languages:\n")?;
    for lang in Language::ALL {
        writeln!(
            out,
            "  {:<12} {:<12} {}",
            lang.id(),
            lang.label(),
            lang.extension()
        )?;
    }
    writeln!(out)?;
    Ok(())
}
