// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Structured query descriptors
//!
//! These are the values a front end (a text parser, a CLI, a test) hands to
//! the executor. They serialize to and from JSON so descriptors can be stored
//! or passed between processes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Column-to-value assignments for INSERT and UPDATE, ordered by column name
pub type Payload = BTreeMap<String, String>;

/// Kind of operation a query performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationKind {
    Select,
    Insert,
    Update,
    Delete,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::Select => "SELECT",
            OperationKind::Insert => "INSERT",
            OperationKind::Update => "UPDATE",
            OperationKind::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

impl FromStr for OperationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SELECT" => Ok(OperationKind::Select),
            "INSERT" => Ok(OperationKind::Insert),
            "UPDATE" => Ok(OperationKind::Update),
            "DELETE" => Ok(OperationKind::Delete),
            _ => Err(format!("unknown operation '{}'", s)),
        }
    }
}

/// Columns returned by a SELECT
///
/// Serialized as `"*"` or as a list of column names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "ProjectionRepr", into = "ProjectionRepr")]
pub enum Projection {
    /// Every column, in header order
    #[default]
    All,
    /// The listed columns, in the listed order
    Columns(Vec<String>),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ProjectionRepr {
    Star(String),
    Columns(Vec<String>),
}

impl TryFrom<ProjectionRepr> for Projection {
    type Error = String;

    fn try_from(repr: ProjectionRepr) -> Result<Self, Self::Error> {
        match repr {
            ProjectionRepr::Star(s) if s == "*" => Ok(Projection::All),
            ProjectionRepr::Star(s) => Err(format!(
                "projection must be \"*\" or a list of columns, got \"{}\"",
                s
            )),
            ProjectionRepr::Columns(columns) => Ok(Projection::Columns(columns)),
        }
    }
}

impl From<Projection> for ProjectionRepr {
    fn from(projection: Projection) -> Self {
        match projection {
            Projection::All => ProjectionRepr::Star("*".to_string()),
            Projection::Columns(columns) => ProjectionRepr::Columns(columns),
        }
    }
}

/// Single equality condition: `column = value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

impl Filter {
    pub fn new(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

/// Inner join of the target table's `column` with `table`'s `other_column`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinSpec {
    pub column: String,
    pub table: String,
    pub other_column: String,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(format!("unknown sort direction '{}'", s)),
        }
    }
}

/// Single-column ordering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: String,
    #[serde(default)]
    pub direction: SortDirection,
}

/// Complete description of one query
///
/// Optional clauses left as `None` are skipped by the executor. Whether the
/// clauses required by the operation are present is checked at execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    pub operation: OperationKind,
    #[serde(default)]
    pub table: Option<String>,
    #[serde(default)]
    pub projection: Projection,
    #[serde(default)]
    pub filter: Option<Filter>,
    #[serde(default)]
    pub join: Option<JoinSpec>,
    #[serde(default)]
    pub sort: Option<SortSpec>,
    #[serde(default)]
    pub payload: Option<Payload>,
}

impl QueryDescriptor {
    /// Empty descriptor for `operation`
    pub fn new(operation: OperationKind) -> Self {
        Self {
            operation,
            table: None,
            projection: Projection::All,
            filter: None,
            join: None,
            sort: None,
            payload: None,
        }
    }

    /// Parse a descriptor from JSON
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
