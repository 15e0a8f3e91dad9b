// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Query execution results

use crate::query::OperationKind;
use crate::storage::RowSet;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Value of one output field
///
/// Selected fields are text; mutation results carry integers, which
/// serialize as JSON numbers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text.as_str()),
            FieldValue::Integer(_) => None,
        }
    }

    /// Integer value, parsing text fields
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Text(text) => text.parse().ok(),
            FieldValue::Integer(n) => Some(*n),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Integer(n) => write!(f, "{}", n),
        }
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

/// One output row: column names mapped to field values, in column order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn from_pairs<V>(pairs: impl IntoIterator<Item = (String, V)>) -> Self
    where
        V: Into<FieldValue>,
    {
        Self {
            fields: pairs.into_iter().map(|(c, v)| (c, v.into())).collect(),
        }
    }

    /// Value of `column`, if the record has it
    pub fn value(&self, column: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v)
    }

    /// Text value of `column`
    pub fn get(&self, column: &str) -> Option<&str> {
        self.value(column)?.as_text()
    }

    /// Integer value of `column`, parsing text fields
    pub fn get_integer(&self, column: &str) -> Option<i64> {
        self.value(column)?.as_integer()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(c, _)| c.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
        self.fields.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(c, v)| (c.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (column, value) in &self.fields {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// Uniform result of any query
///
/// SELECT fills `rows` with the matching records (possibly none). Mutations
/// return a single record: `{id}` for INSERT, `{updated_rows}` for UPDATE and
/// `{deleted_rows}` for DELETE.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct QueryResult {
    pub operation: OperationKind,
    /// Output column names, in order
    pub columns: Vec<String>,
    pub rows: Vec<Record>,
    /// Rows returned, inserted, updated or deleted
    pub rows_affected: usize,
    pub execution_time_ms: u64,
}

impl QueryResult {
    pub(crate) fn from_row_set(rows: RowSet) -> Self {
        let columns = rows.header().to_vec();
        let records = rows.into_records();
        Self {
            operation: OperationKind::Select,
            columns,
            rows_affected: records.len(),
            rows: records,
            execution_time_ms: 0,
        }
    }

    /// Single-record result for a mutation
    pub(crate) fn single(
        operation: OperationKind,
        column: &str,
        value: i64,
        rows_affected: usize,
    ) -> Self {
        Self {
            operation,
            columns: vec![column.to_string()],
            rows: vec![Record::from_pairs([(column.to_string(), value)])],
            rows_affected,
            execution_time_ms: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of `column` across all rows, in row order
    pub fn column_values(&self, column: &str) -> Vec<&str> {
        self.rows.iter().filter_map(|r| r.get(column)).collect()
    }

    /// Id generated by an INSERT
    pub fn generated_id(&self) -> Option<i64> {
        match self.operation {
            OperationKind::Insert => self.rows.first()?.get_integer("id"),
            _ => None,
        }
    }
}
