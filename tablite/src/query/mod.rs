// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Query descriptors and their execution
//!
//! A query is assembled once (through [`QueryBuilder`] or directly as a
//! [`QueryDescriptor`]), executed once by [`QueryExecutor`], and answered with
//! a [`QueryResult`].

pub mod builder;
pub mod descriptor;
pub mod executor;
pub mod result;

pub use builder::QueryBuilder;
pub use descriptor::{
    Filter, JoinSpec, OperationKind, Payload, Projection, QueryDescriptor, SortDirection, SortSpec,
};
pub use executor::QueryExecutor;
pub use result::{FieldValue, QueryResult, Record};
