// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for codesmith
//!
//! This module defines all error types used throughout the application.

use thiserror::Error;

/// Main error type for codesmith operations
#[derive(Error, Debug)]
pub enum CodesmithError {
    /// A history index that does not address a record
    #[error("Index {index} out of range: history holds {len} records")]
    IndexOutOfRange { index: usize, len: usize },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// History persistence errors
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for codesmith operations
pub type Result<T> = std::result::Result<T, CodesmithError>;

impl From<tokio::task::JoinError> for CodesmithError {
    fn from(err: tokio::task::JoinError) -> Self {
        CodesmithError::Persistence(err.to_string())
    }
}
