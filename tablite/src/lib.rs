// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Tablite - A small relational query engine over delimited text files
//!
//! Every table lives in one delimited text file: the first line is the header,
//! each following line is a row. Tablite answers structured requests against
//! those files:
//!
//! - **Projection**: `*` or an ordered column list
//! - **Filtering**: exactly one equality condition
//! - **Sorting**: one column, ascending or descending, empty values last
//! - **Joining**: one inner join against a second table
//! - **Mutation**: insert with generated ids, update and delete
//!
//! # Usage
//!
//! ```no_run
//! use tablite::{EngineConfig, QueryBuilder, QueryExecutor, SortDirection};
//!
//! let executor = QueryExecutor::new(EngineConfig::with_data_dir("./data"));
//!
//! let result = QueryBuilder::select("students")
//!     .columns(["name", "state"])
//!     .filter("state", "CA")
//!     .order_by("name", SortDirection::Ascending)
//!     .execute(&executor)
//!     .expect("query failed");
//! ```
//!
//! Free-text parsing and result display are left to callers; the engine only
//! consumes [`QueryDescriptor`] values and returns [`QueryResult`] values.

pub mod config;
pub mod error;
pub mod query;
pub mod storage;

pub use config::{ArityPolicy, EngineConfig};
pub use error::{Result, TableError};
pub use query::{
    FieldValue, Filter, JoinSpec, OperationKind, Payload, Projection, QueryBuilder, QueryDescriptor,
    QueryExecutor, QueryResult, Record, SortDirection, SortSpec,
};
pub use storage::{RowSet, Table};

/// Tablite version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tablite crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
