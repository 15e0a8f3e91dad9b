// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! In-memory working set of rows sharing one header
//!
//! A `RowSet` is what the query pipeline operates on: a loaded table's rows,
//! or the joined view of two tables. Every operation resolves column names
//! against the set's *current* header, so after a join a filter or sort may
//! reference columns that came from the right-hand table.

use crate::error::{Result, TableError};
use crate::query::{Projection, Record, SortDirection};
use crate::storage::sort_key::SortKey;
use log::debug;

/// Suffix appended to right-hand column names that collide in a join
pub const JOIN_SUFFIX: &str = "_right";

/// Ordered header plus positionally aligned rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSet {
    name: String,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RowSet {
    pub fn new(name: impl Into<String>, header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            header,
            rows,
        }
    }

    /// Name used in error messages (table name, or both names for a join)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Exact, case-sensitive header membership
    pub fn column_exists(&self, column: &str) -> bool {
        self.header.iter().any(|c| c == column)
    }

    /// Position of `column` in the header
    pub fn column_index(&self, column: &str) -> Result<usize> {
        self.header
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| TableError::unknown_column(column, &self.name))
    }

    /// Restrict rows to the requested columns, in the requested order
    ///
    /// Every column is validated before any row is touched.
    pub fn project(&self, projection: &Projection) -> Result<RowSet> {
        let columns = match projection {
            Projection::All => return Ok(self.clone()),
            Projection::Columns(columns) => columns,
        };

        let indexes = columns
            .iter()
            .map(|c| self.column_index(c))
            .collect::<Result<Vec<_>>>()?;

        let rows = self
            .rows
            .iter()
            .map(|row| indexes.iter().map(|&i| field(row, i).to_string()).collect())
            .collect();

        Ok(RowSet::new(self.name.clone(), columns.clone(), rows))
    }

    /// Keep rows whose `column` field equals `value` exactly
    pub fn filter_equals(self, column: &str, value: &str) -> Result<RowSet> {
        let index = self.column_index(column)?;
        let before = self.rows.len();
        let rows: Vec<Vec<String>> = self
            .rows
            .into_iter()
            .filter(|row| field(row, index) == value)
            .collect();
        debug!(
            "Filter {}='{}' on '{}' kept {} of {} rows",
            column,
            value,
            self.name,
            rows.len(),
            before
        );
        Ok(RowSet::new(self.name, self.header, rows))
    }

    /// Order rows by one column
    ///
    /// Numbers sort before text, text before empty values. The ascending order
    /// of the non-empty rows is reversed for descending direction; rows with an
    /// empty or missing value stay last in their original order either way.
    pub fn sort(self, column: &str, direction: SortDirection) -> Result<RowSet> {
        let index = self.column_index(column)?;
        let (mut valued, empty): (Vec<_>, Vec<_>) = self
            .rows
            .into_iter()
            .partition(|row| !key(row, index).is_empty());

        valued.sort_by(|a, b| key(a, index).cmp(&key(b, index)));
        if direction == SortDirection::Descending {
            valued.reverse();
        }
        valued.extend(empty);

        Ok(RowSet::new(self.name, self.header, valued))
    }

    /// Inner join by nested-loop string equality
    ///
    /// The joined header is the left header followed by the right header, with
    /// colliding right-hand names suffixed until unique. Pairs keep left-major
    /// order.
    pub fn join(&self, other: &RowSet, column: &str, other_column: &str) -> Result<RowSet> {
        let left_index = self.column_index(column)?;
        let right_index = other.column_index(other_column)?;

        let mut header = self.header.clone();
        for name in &other.header {
            let mut renamed = name.clone();
            while header.contains(&renamed) {
                renamed.push_str(JOIN_SUFFIX);
            }
            header.push(renamed);
        }

        let mut rows = Vec::new();
        for left in &self.rows {
            let left_value = field(left, left_index);
            for right in &other.rows {
                if left_value == field(right, right_index) {
                    let mut merged = Vec::with_capacity(header.len());
                    merged.extend(left.iter().cloned());
                    merged.resize(self.header.len(), String::new());
                    merged.extend(right.iter().cloned());
                    merged.resize(header.len(), String::new());
                    rows.push(merged);
                }
            }
        }

        debug!(
            "Joined '{}'.{} with '{}'.{}: {} x {} rows -> {} rows",
            self.name,
            column,
            other.name,
            other_column,
            self.rows.len(),
            other.rows.len(),
            rows.len()
        );

        Ok(RowSet::new(
            format!("{} JOIN {}", self.name, other.name),
            header,
            rows,
        ))
    }

    /// Convert into column-to-value records in row order
    pub fn into_records(self) -> Vec<Record> {
        let header = self.header;
        self.rows
            .into_iter()
            .map(|mut row| {
                row.resize(header.len(), String::new());
                Record::from_pairs(header.iter().cloned().zip(row))
            })
            .collect()
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Vec<String>> {
        &mut self.rows
    }
}

/// Field at `index`, missing trailing fields reading as empty
fn field(row: &[String], index: usize) -> &str {
    row.get(index).map_or("", String::as_str)
}

fn key(row: &[String], index: usize) -> SortKey<'_> {
    SortKey::classify(row.get(index).map(String::as_str))
}
