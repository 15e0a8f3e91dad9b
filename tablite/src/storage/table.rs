// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Table store backed by one delimited text file
//!
//! A `Table` owns its file and in-memory rows for the duration of a single
//! operation. It is always loaded fresh from disk; nothing is cached between
//! operations and no state is shared between instances, so two tables opened
//! for a join never interfere.

use crate::config::{ArityPolicy, EngineConfig};
use crate::error::{Result, TableError};
use crate::query::{Filter, Payload};
use crate::storage::codec;
use crate::storage::row_set::RowSet;
use crate::storage::sort_key::Integer;
use log::{debug, info, warn};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// One table loaded from its backing file
#[derive(Debug, Clone)]
pub struct Table {
    path: PathBuf,
    delimiter: char,
    id_column: String,
    data: RowSet,
}

impl Table {
    /// Open a table by name, resolving its file through the configuration
    pub fn open(name: &str, config: &EngineConfig) -> Result<Self> {
        Self::load(config.table_path(name), config)
    }

    /// Load a table file
    ///
    /// The first record is the header, every following record a row. A file
    /// holding only a header yields a table with zero rows.
    pub fn load(path: impl AsRef<Path>, config: &EngineConfig) -> Result<Self> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TableError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let mut records = codec::decode(&text, config.delimiter)
            .map_err(|e| TableError::malformed(path, e.line, e.reason))?
            .into_iter();

        let header = records
            .next()
            .ok_or_else(|| TableError::malformed(path, 1, "missing header line"))?
            .fields;

        let mut seen = HashSet::new();
        if let Some(duplicate) = header.iter().find(|c| !seen.insert(c.as_str())) {
            return Err(TableError::malformed(
                path,
                1,
                format!("duplicate column '{}'", duplicate),
            ));
        }

        let mut rows = Vec::new();
        for record in records {
            let mut fields = record.fields;
            if fields.len() != header.len() {
                if config.arity == ArityPolicy::Strict || fields.len() > header.len() {
                    return Err(TableError::malformed(
                        path,
                        record.line,
                        format!("expected {} fields, found {}", header.len(), fields.len()),
                    ));
                }
                warn!(
                    "{}:{}: padding row with {} of {} fields",
                    path.display(),
                    record.line,
                    fields.len(),
                    header.len()
                );
                fields.resize(header.len(), String::new());
            }
            rows.push(fields);
        }

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        debug!(
            "Loaded table '{}' from {}: {} columns, {} rows",
            name,
            path.display(),
            header.len(),
            rows.len()
        );

        Ok(Self {
            path: path.to_path_buf(),
            delimiter: config.delimiter,
            id_column: config.id_column.clone(),
            data: RowSet::new(name, header, rows),
        })
    }

    pub fn name(&self) -> &str {
        self.data.name()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn header(&self) -> &[String] {
        self.data.header()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        self.data.rows()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn column_exists(&self, column: &str) -> bool {
        self.data.column_exists(column)
    }

    pub fn into_row_set(self) -> RowSet {
        self.data
    }

    /// Inner join this table's `column` against `other`'s `other_column`
    pub fn join(&self, other: &Table, column: &str, other_column: &str) -> Result<RowSet> {
        self.data.join(&other.data, column, other_column)
    }

    /// Append a row and persist; returns the generated id
    ///
    /// The id is one more than the largest integer currently in the id
    /// column, or 1 for a table without numeric ids. Columns absent from
    /// `data` are left empty.
    pub fn insert(&mut self, data: &Payload) -> Result<i64> {
        let id_index = self.data.column_index(&self.id_column)?;
        self.validate_columns(data.keys())?;

        let next_id = match self.max_id(id_index)? {
            None => 1,
            Some(max) => max.checked_add(1).ok_or_else(|| self.no_successor())?,
        };

        let row: Vec<String> = self
            .data
            .header()
            .iter()
            .enumerate()
            .map(|(i, column)| {
                if i == id_index {
                    next_id.to_string()
                } else {
                    data.get(column).cloned().unwrap_or_default()
                }
            })
            .collect();

        self.data.rows_mut().push(row);
        self.persist()?;

        info!("Inserted row {} into '{}'", next_id, self.name());
        Ok(next_id)
    }

    /// Overwrite `data` columns on every row matching `filter` (all rows when
    /// `None`); returns the number of rows changed
    ///
    /// Nothing is written when no row matches.
    pub fn update(&mut self, data: &Payload, filter: Option<&Filter>) -> Result<usize> {
        let assignments = data
            .iter()
            .map(|(column, value)| Ok((self.data.column_index(column)?, value)))
            .collect::<Result<Vec<_>>>()?;
        let filter_index = filter
            .map(|f| self.data.column_index(&f.column))
            .transpose()?;

        let mut updated = 0;
        for row in self.data.rows_mut().iter_mut() {
            let matches = match (filter, filter_index) {
                (Some(f), Some(index)) => row.get(index).map_or("", String::as_str) == f.value,
                _ => true,
            };
            if matches {
                for (index, value) in &assignments {
                    row[*index] = (*value).clone();
                }
                updated += 1;
            }
        }

        if updated > 0 {
            self.persist()?;
        }
        info!("Updated {} rows in '{}'", updated, self.name());
        Ok(updated)
    }

    /// Remove rows matching `filter` (all rows when `None`); returns the
    /// number removed
    ///
    /// Nothing is written when no row matches.
    pub fn delete(&mut self, filter: Option<&Filter>) -> Result<usize> {
        let filter_index = filter
            .map(|f| self.data.column_index(&f.column))
            .transpose()?;

        let rows = self.data.rows_mut();
        let before = rows.len();
        match (filter, filter_index) {
            (Some(f), Some(index)) => {
                rows.retain(|row| row.get(index).map_or("", String::as_str) != f.value)
            }
            _ => rows.clear(),
        }
        let deleted = before - rows.len();

        if deleted > 0 {
            self.persist()?;
        }
        info!("Deleted {} rows from '{}'", deleted, self.name());
        Ok(deleted)
    }

    /// Rewrite the backing file with the header and every row
    ///
    /// The file is overwritten in place.
    pub fn persist(&self) -> Result<()> {
        let mut out = String::new();
        codec::encode_record(self.data.header(), self.delimiter, &mut out);
        for row in self.data.rows() {
            codec::encode_record(row, self.delimiter, &mut out);
        }
        std::fs::write(&self.path, out)?;
        debug!(
            "Persisted table '{}' to {} ({} rows)",
            self.name(),
            self.path.display(),
            self.data.len()
        );
        Ok(())
    }

    fn validate_columns<'a>(&self, columns: impl IntoIterator<Item = &'a String>) -> Result<()> {
        for column in columns {
            self.data.column_index(column)?;
        }
        Ok(())
    }

    /// Largest integer in the id column, compared without overflow
    fn max_id(&self, id_index: usize) -> Result<Option<i64>> {
        let max = self
            .data
            .rows()
            .iter()
            .filter_map(|row| Integer::parse(row.get(id_index)?))
            .max();
        match max {
            None => Ok(None),
            Some(max) => max.to_i64().map(Some).ok_or_else(|| self.no_successor()),
        }
    }

    fn no_successor(&self) -> TableError {
        TableError::malformed(&self.path, 0, "id column has no successor")
    }
}
