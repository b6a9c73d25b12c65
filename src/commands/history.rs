// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! History command
//!
//! Loads the history file into a [`HistoryPanel`], applies one user action,
//! renders the result and flushes any change back to disk.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::QueueableCommand;
use serde::Serialize;

use crate::cli::args::{HistoryArgs, HistoryCommands, OutputFormat};
use crate::config::Settings;
use crate::error::Result;
use crate::history::{HistoryPanel, HistoryRecord, HistoryWriter, QueryMatch};
use crate::intake::{AcceptAll, PromptSubmission};
use crate::language::{Language, LanguageFilter};

/// Base name for exported code files
pub const EXPORT_FILE_STEM: &str = "generated-code";

const PROMPT_PREVIEW_CHARS: usize = 60;

#[derive(Serialize)]
struct ListOutput<'a> {
    total: usize,
    matched: usize,
    empty_state: Option<&'static str>,
    records: &'a [QueryMatch<'a>],
}

#[derive(Serialize)]
struct IndexedRecord<'a> {
    index: usize,
    #[serde(flatten)]
    record: &'a HistoryRecord,
}

/// Execute a history subcommand against the configured history file.
///
/// `input` supplies generated code for `history add` when no code file is
/// given.
pub async fn execute<R: Read, W: Write>(
    args: &HistoryArgs,
    settings: &Settings,
    format: &OutputFormat,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let file = settings.history_file();
    let store = file.load()?;
    let mut panel = HistoryPanel::with_writer(store, HistoryWriter::spawn(file));

    let result = run(&args.command, &mut panel, settings, format, input, out);
    let flushed = panel.close().await;

    result?;
    flushed
}

fn run<R: Read, W: Write>(
    command: &HistoryCommands,
    panel: &mut HistoryPanel,
    settings: &Settings,
    format: &OutputFormat,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let json = matches!(format, OutputFormat::Json);
    let color = settings.appearance.color && !json;

    match command {
        HistoryCommands::Add {
            prompt,
            language,
            code_file,
        } => {
            let language = language.unwrap_or(settings.defaults.language);
            let submission = PromptSubmission::new(prompt.as_str(), language, &AcceptAll)?;
            let code = read_code(code_file.as_deref(), input)?;

            panel.record_generation(&submission, code);
            let index = panel.store().len() - 1;
            let record = panel.on_select_history(index)?;

            if json {
                write_json(out, &IndexedRecord { index, record })?;
            } else {
                writeln!(out, "Recorded #{} ({}).", index, record.language().label())?;
            }
        }

        HistoryCommands::List {
            search,
            language,
            favorites,
            limit,
        } => {
            panel.set_search_query(search.as_str());
            panel.set_language_filter(*language);
            panel.set_favorites_only(*favorites);
            tracing::debug!(
                filter = %describe_filter(search, *language, *favorites),
                "listing history"
            );

            let view = panel.view();
            let limit = limit.map_or(settings.history.list_limit, |n| n as usize);
            let shown = tail(view.matches(), limit);

            if json {
                write_json(
                    out,
                    &ListOutput {
                        total: view.total(),
                        matched: view.len(),
                        empty_state: view.empty_state().map(|s| s.message()),
                        records: shown,
                    },
                )?;
                return Ok(());
            }

            if let Some(empty) = view.empty_state() {
                writeln!(out, "\n{}.", empty.message())?;
                if view.total() == 0 {
                    writeln!(out, "Generated code will appear here.")?;
                }
                writeln!(out)?;
                return Ok(());
            }

            writeln!(
                out,
                "\nPrompt history ({} of {} matching, {} total):\n",
                shown.len(),
                view.len(),
                view.total()
            )?;
            for m in shown {
                write_list_entry(out, m, settings, color)?;
            }
            writeln!(out)?;
        }

        HistoryCommands::Show { index } => {
            let record = panel.on_select_history(*index)?;

            if json {
                write_json(
                    out,
                    &IndexedRecord {
                        index: *index,
                        record,
                    },
                )?;
                return Ok(());
            }

            writeln!(out, "\nRecord #{}", index)?;
            writeln!(out, "Prompt: {}", record.prompt())?;
            writeln!(out, "Language: {}", record.language().label())?;
            writeln!(
                out,
                "Created: {}",
                format_timestamp(record, &settings.appearance.timestamp_format)
            )?;
            writeln!(
                out,
                "Favorite: {}",
                if record.is_favorite() { "yes" } else { "no" }
            )?;
            writeln!(out, "\n{}\n", record.code())?;
        }

        HistoryCommands::Favorite { index } => {
            let favorite = panel.on_toggle_favorite(*index)?;

            if json {
                write_json(
                    out,
                    &serde_json::json!({ "index": index, "favorite": favorite }),
                )?;
            } else if favorite {
                writeln!(out, "Record #{} added to favorites.", index)?;
            } else {
                writeln!(out, "Record #{} removed from favorites.", index)?;
            }
        }

        HistoryCommands::Export { index, output } => {
            let record = panel.on_select_history(*index)?;
            let dir = output.clone().unwrap_or_else(|| PathBuf::from("."));
            let path = export_path(&dir, record.language());

            std::fs::create_dir_all(&dir)?;
            std::fs::write(&path, record.code())?;
            tracing::debug!(index, path = %path.display(), "exported generated code");

            if json {
                write_json(out, &serde_json::json!({ "index": index, "path": path }))?;
            } else {
                writeln!(out, "Wrote {}", path.display())?;
            }
        }

        HistoryCommands::Clear { force } => {
            if !force {
                writeln!(out, "This will delete ALL prompt history.")?;
                writeln!(out, "Run with --force to confirm.")?;
                return Ok(());
            }

            let removed = panel.store().len();
            panel.on_clear_history();

            if json {
                write_json(out, &serde_json::json!({ "removed": removed }))?;
            } else {
                writeln!(out, "Cleared {} records from history.", removed)?;
            }
        }
    }

    Ok(())
}

/// Path an exported record is written to inside `dir`.
pub fn export_path(dir: &Path, language: Language) -> PathBuf {
    dir.join(format!("{}{}", EXPORT_FILE_STEM, language.extension()))
}

fn read_code<R: Read>(code_file: Option<&Path>, input: &mut R) -> Result<String> {
    match code_file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut code = String::new();
            input.read_to_string(&mut code)?;
            Ok(code)
        }
    }
}

/// The last `limit` items: the most recent matches.
fn tail<T>(items: &[T], limit: usize) -> &[T] {
    &items[items.len().saturating_sub(limit)..]
}

fn format_timestamp(record: &HistoryRecord, format: &str) -> String {
    record
        .timestamp()
        .with_timezone(&chrono::Local)
        .format(format)
        .to_string()
}

fn write_list_entry<W: Write>(
    out: &mut W,
    m: &QueryMatch<'_>,
    settings: &Settings,
    color: bool,
) -> Result<()> {
    let record = m.record;

    write!(out, "  {:>3} ", m.index)?;
    let star = if record.is_favorite() { "*" } else { " " };
    write_colored(out, star, color.then_some(Color::Yellow))?;
    write!(out, " ")?;
    write_colored(
        out,
        &format!("{:<10}", record.language().id()),
        color.then_some(Color::Cyan),
    )?;
    writeln!(
        out,
        " {}  {}",
        format_timestamp(record, &settings.appearance.timestamp_format),
        record.prompt_preview(PROMPT_PREVIEW_CHARS)
    )?;

    let preview = record.code_preview();
    if !preview.is_empty() {
        write_colored(
            out,
            &format!("         {}\n", preview),
            color.then_some(Color::DarkGrey),
        )?;
    }
    Ok(())
}

fn write_colored<W: Write>(out: &mut W, text: &str, color: Option<Color>) -> Result<()> {
    match color {
        Some(color) => {
            out.queue(SetForegroundColor(color))?
                .queue(Print(text))?
                .queue(ResetColor)?;
        }
        None => write!(out, "{}", text)?,
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Filter description used in log output.
fn describe_filter(search: &str, language: LanguageFilter, favorites: bool) -> String {
    let mut parts = vec![format!("language={}", language)];
    if !search.is_empty() {
        parts.push(format!("search={:?}", search));
    }
    if favorites {
        parts.push("favorites".to_string());
    }
    parts.join(" ")
}
