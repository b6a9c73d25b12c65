// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand implementations
//!
//! Each command writes its output to the supplied writer so the binary can
//! pass stdout and tests can capture it.

pub mod history;
pub mod languages;
pub mod settings;
