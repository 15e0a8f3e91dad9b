// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Engine configuration
//!
//! Controls where table files live and how they are encoded. A configuration
//! can be built in code or loaded from a JSON file; fields missing from the
//! file fall back to their defaults.

use crate::error::{Result, TableError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How rows whose field count differs from the header are handled at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArityPolicy {
    /// Pad short rows with empty fields; reject rows longer than the header
    #[default]
    Pad,
    /// Reject any row whose field count differs from the header
    Strict,
}

/// Global engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Directory holding the table files
    pub data_dir: PathBuf,

    /// Extension appended to bare table names
    pub extension: String,

    /// Field delimiter
    pub delimiter: char,

    /// Column receiving generated ids on insert
    pub id_column: String,

    /// Row arity handling at load time
    pub arity: ArityPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            extension: "csv".to_string(),
            delimiter: ',',
            id_column: "id".to_string(),
            arity: ArityPolicy::Pad,
        }
    }
}

impl EngineConfig {
    /// Default configuration rooted at `data_dir`
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Load a configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|source| TableError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve a table name to its backing file
    ///
    /// Names that already carry an extension are taken as paths relative to
    /// `data_dir`; bare names get the configured extension appended.
    pub fn table_path(&self, table: &str) -> PathBuf {
        if Path::new(table).extension().is_some() {
            self.data_dir.join(table)
        } else {
            self.data_dir.join(format!("{}.{}", table, self.extension))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_path_resolution() {
        let config = EngineConfig::with_data_dir("/data");
        assert_eq!(config.table_path("students"), PathBuf::from("/data/students.csv"));
        assert_eq!(config.table_path("people.tsv"), PathBuf::from("/data/people.tsv"));
        assert_eq!(config.table_path("/abs/t.csv"), PathBuf::from("/abs/t.csv"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"delimiter": ";", "arity": "strict"}"#).unwrap();
        assert_eq!(config.delimiter, ';');
        assert_eq!(config.arity, ArityPolicy::Strict);
        assert_eq!(config.id_column, "id");
        assert_eq!(config.extension, "csv");
    }

    #[test]
    fn test_from_file_reports_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        std::fs::write(&good, r#"{"id_column": "key"}"#).unwrap();
        std::fs::write(&bad, r#"{"delimiter": ";""#).unwrap();

        assert_eq!(EngineConfig::from_file(&good).unwrap().id_column, "key");

        let err = EngineConfig::from_file(&bad).unwrap_err();
        assert!(matches!(err, TableError::Config { ref path, .. } if *path == bad));
        assert!(err.to_string().starts_with("Invalid configuration file"));

        let err = EngineConfig::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, TableError::Io(_)));
    }
}
