// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! codesmith - prompt history for an AI code-generation assistant.
//!
//! This crate exposes the state a code-generation front end keeps about past
//! generations, plus the `codesmith` CLI (`src/main.rs`) that hosts it.
//!
//! Architecture highlights:
//! - `history`: ordered record store, filtered queries, host-owned panel
//!   state and JSON persistence with a background writer
//! - `language`: the canonical list of target languages
//! - `intake`: prompt validation before generation
//! - `config`: user settings in `~/.codesmith/settings.json`
//! - `cli`, `commands`: argument parsing and subcommand execution

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod intake;
pub mod language;

pub use error::{CodesmithError, Result};
