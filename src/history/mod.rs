// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Prompt history for codesmith
//!
//! Keeps every completed generation in an ordered store, derives filtered
//! views by search text and language, and persists the store to disk.

pub mod panel;
pub mod persistence;
pub mod query;
pub mod record;
pub mod store;

pub use panel::HistoryPanel;
pub use persistence::{HistoryFile, HistoryWriter};
pub use query::{EmptyState, HistoryQuery, QueryMatch, QueryResult};
pub use record::HistoryRecord;
pub use store::HistoryStore;
