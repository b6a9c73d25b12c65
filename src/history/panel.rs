// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! History panel state
//!
//! [`HistoryPanel`] is the state a host application owns for the history
//! view: the store, the current search and language filter, and the record
//! last selected for the output view. Every user action maps to one method
//! call; the visible list is recomputed by [`HistoryPanel::view`].

use crate::error::Result;
use crate::intake::PromptSubmission;
use crate::language::LanguageFilter;

use super::persistence::HistoryWriter;
use super::query::{HistoryQuery, QueryResult};
use super::record::HistoryRecord;
use super::store::HistoryStore;

/// Host-owned history state.
pub struct HistoryPanel {
    store: HistoryStore,
    query: HistoryQuery,
    selected: Option<usize>,
    writer: Option<HistoryWriter>,
}

impl HistoryPanel {
    /// Panel over an in-memory store, without persistence
    pub fn new(store: HistoryStore) -> Self {
        Self {
            store,
            query: HistoryQuery::new(),
            selected: None,
            writer: None,
        }
    }

    /// Panel whose mutations are handed to `writer`
    pub fn with_writer(store: HistoryStore, writer: HistoryWriter) -> Self {
        Self {
            writer: Some(writer),
            ..Self::new(store)
        }
    }

    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    pub fn query(&self) -> &HistoryQuery {
        &self.query
    }

    /// Records matching the current search and filter
    pub fn view(&self) -> QueryResult<'_> {
        self.query.apply(&self.store)
    }

    /// Add the result of a completed generation
    pub fn record_generation(
        &mut self,
        submission: &PromptSubmission,
        code: impl Into<String>,
    ) -> &HistoryRecord {
        self.store.append(HistoryRecord::new(submission, code));
        self.persist();
        let last = self.store.len() - 1;
        &self.store.all()[last]
    }

    /// Select a record to reload into the output view
    pub fn on_select_history(&mut self, index: usize) -> Result<&HistoryRecord> {
        let record = self.store.get(index)?;
        tracing::debug!(index, "selected history record");
        self.selected = Some(index);
        Ok(record)
    }

    /// Empty the store and drop the selection
    pub fn on_clear_history(&mut self) {
        self.store.clear();
        self.selected = None;
        self.persist();
    }

    /// Flip the favorite flag of the record at store `index`
    pub fn on_toggle_favorite(&mut self, index: usize) -> Result<bool> {
        let favorite = self.store.toggle_favorite(index)?;
        self.persist();
        Ok(favorite)
    }

    pub fn set_search_query(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    pub fn set_language_filter(&mut self, language: LanguageFilter) {
        self.query.language = language;
    }

    pub fn set_favorites_only(&mut self, favorites_only: bool) {
        self.query.favorites_only = favorites_only;
    }

    /// The record last passed to [`Self::on_select_history`], if still present
    pub fn selected(&self) -> Option<&HistoryRecord> {
        self.selected.and_then(|index| self.store.get(index).ok())
    }

    /// Flush pending writes and stop the writer, if any
    pub async fn close(self) -> Result<()> {
        match self.writer {
            Some(writer) => writer.shutdown().await,
            None => Ok(()),
        }
    }

    fn persist(&self) {
        if let Some(writer) = &self.writer {
            writer.submit(self.store.all().to_vec());
        }
    }
}
