// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for codesmith.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::language::{Language, LanguageFilter};

/// codesmith - prompt history for AI code generation
#[derive(Parser, Debug)]
#[command(name = "codesmith")]
#[command(version, about = "Prompt history for AI code generation")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prompt history management
    History(HistoryArgs),

    /// List supported languages
    Languages,

    /// Show or change configuration
    #[command(alias = "config")]
    Settings(SettingsArgs),
}

/// Arguments for history management
#[derive(clap::Args, Debug)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: HistoryCommands,
}

/// History subcommands
#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// Record a completed generation
    Add {
        /// The prompt that produced the code
        prompt: String,

        /// Target language (defaults to the configured language)
        #[arg(short, long)]
        language: Option<Language>,

        /// Read generated code from this file instead of stdin
        #[arg(long, value_name = "PATH")]
        code_file: Option<PathBuf>,
    },

    /// List history, optionally filtered
    List {
        /// Only prompts containing this text (case-insensitive)
        #[arg(short, long, default_value = "")]
        search: String,

        /// Language filter ("all" or a language)
        #[arg(short, long, default_value = "all")]
        language: LanguageFilter,

        /// Only favorite records
        #[arg(long)]
        favorites: bool,

        /// Maximum number of most recent matches to show
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..))]
        limit: Option<u32>,
    },

    /// Show a record in full
    Show {
        /// History index
        index: usize,
    },

    /// Toggle the favorite flag of a record
    #[command(alias = "fav")]
    Favorite {
        /// History index
        index: usize,
    },

    /// Write a record's code to generated-code.<ext>
    Export {
        /// History index
        index: usize,

        /// Output directory (defaults to current)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Clear all history
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Arguments for settings/config
#[derive(clap::Args, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommands,
}

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "language", "history.list_limit")
        key: String,

        /// Value to set
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Reset configuration to defaults
    Reset,
}

/// Output format for responses
#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}
