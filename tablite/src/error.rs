// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for table storage and query execution

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the table store and the query executor
///
/// The executor never translates storage errors; whatever a [`crate::Table`]
/// raises reaches the caller unchanged.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Table not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Unknown column '{column}' in table '{table}'")]
    UnknownColumn { column: String, table: String },

    #[error("Query not ready: {0}")]
    NotReady(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Malformed table file {} at line {line}: {reason}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

impl TableError {
    pub(crate) fn unknown_column(column: impl Into<String>, table: impl Into<String>) -> Self {
        TableError::UnknownColumn {
            column: column.into(),
            table: table.into(),
        }
    }

    pub(crate) fn malformed(
        path: impl Into<PathBuf>,
        line: usize,
        reason: impl Into<String>,
    ) -> Self {
        TableError::Malformed {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TableError>;
