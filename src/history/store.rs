// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! History store implementation
//!
//! Holds generation records in insertion order, most recent last. The store
//! does no I/O; see [`super::persistence`] for loading and saving.

use crate::error::{CodesmithError, Result};

use super::record::HistoryRecord;

/// Ordered collection of generation records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryStore {
    records: Vec<HistoryRecord>,
}

impl HistoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from records already in store order
    pub fn from_records(records: Vec<HistoryRecord>) -> Self {
        Self { records }
    }

    /// Append a record at the end
    pub fn append(&mut self, record: HistoryRecord) {
        tracing::debug!(
            language = %record.language(),
            position = self.records.len(),
            "appending history record"
        );
        self.records.push(record);
    }

    /// Remove every record
    pub fn clear(&mut self) {
        tracing::debug!(removed = self.records.len(), "clearing history");
        self.records.clear();
    }

    /// Flip the favorite flag at `index` and return its new value
    pub fn toggle_favorite(&mut self, index: usize) -> Result<bool> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(CodesmithError::IndexOutOfRange { index, len })?;
        let favorite = record.toggle_favorite();
        tracing::debug!(index, favorite, "toggled favorite");
        Ok(favorite)
    }

    /// All records in store order
    pub fn all(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Get the record at `index`
    pub fn get(&self, index: usize) -> Result<&HistoryRecord> {
        self.records
            .get(index)
            .ok_or(CodesmithError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the store, returning its records in store order
    pub fn into_records(self) -> Vec<HistoryRecord> {
        self.records
    }
}
