// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Table storage over delimited text files
//!
//! This module provides:
//! - Delimited record encoding and decoding
//! - Three-way sort keys (numbers, text, empty)
//! - Row sets with projection, equality filtering, sorting and joining
//! - The table store that loads, mutates and rewrites one table file

pub mod codec;
pub mod row_set;
pub mod sort_key;
pub mod table;

pub use row_set::{RowSet, JOIN_SUFFIX};
pub use sort_key::SortKey;
pub use table::Table;
