// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Filtered views over the history store
//!
//! A [`HistoryQuery`] is recomputed from scratch on every call; the store is
//! small enough that caching buys nothing.

use serde::Serialize;

use crate::language::LanguageFilter;

use super::record::HistoryRecord;
use super::store::HistoryStore;

/// Search text and language filter applied to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryQuery {
    /// Case-insensitive substring to look for in prompts; empty matches all
    pub search: String,
    /// Language restriction
    pub language: LanguageFilter,
    /// Only keep favorite records
    pub favorites_only: bool,
}

impl HistoryQuery {
    /// Query matching every record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_language(mut self, language: LanguageFilter) -> Self {
        self.language = language;
        self
    }

    pub fn favorites_only(mut self, favorites_only: bool) -> Self {
        self.favorites_only = favorites_only;
        self
    }

    /// Compute the matching records, in store order.
    pub fn apply<'a>(&self, store: &'a HistoryStore) -> QueryResult<'a> {
        let needle = self.search.to_lowercase();
        let matches = store
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                self.language.matches(record.language())
                    && (!self.favorites_only || record.is_favorite())
                    && record.prompt_contains(&needle)
            })
            .map(|(index, record)| QueryMatch { index, record })
            .collect();

        QueryResult {
            matches,
            total: store.len(),
        }
    }
}

/// A record that matched, with its position in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryMatch<'a> {
    /// Store index, valid for `toggle_favorite` and selection
    pub index: usize,
    #[serde(flatten)]
    pub record: &'a HistoryRecord,
}

/// Why a query produced nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The store itself is empty
    NoHistory,
    /// The store has records but none matched
    NoMatches,
}

impl EmptyState {
    pub fn message(self) -> &'static str {
        match self {
            EmptyState::NoHistory => "No history yet",
            EmptyState::NoMatches => "No matching results",
        }
    }
}

/// Output of [`HistoryQuery::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult<'a> {
    matches: Vec<QueryMatch<'a>>,
    total: usize,
}

impl<'a> QueryResult<'a> {
    pub fn matches(&self) -> &[QueryMatch<'a>] {
        &self.matches
    }

    /// Matching records without their store indices.
    pub fn records(&self) -> Vec<&'a HistoryRecord> {
        self.matches.iter().map(|m| m.record).collect()
    }

    /// Number of matching records.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Number of records in the store the query ran against.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.total == 0 {
            Some(EmptyState::NoHistory)
        } else if self.matches.is_empty() {
            Some(EmptyState::NoMatches)
        } else {
            None
        }
    }
}
