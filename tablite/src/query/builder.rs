// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Fluent query construction
//!
//! Each setter consumes the builder and returns it, so a query reads as one
//! chained expression ending in [`QueryBuilder::execute`] or
//! [`QueryBuilder::build`]. Setting a clause twice keeps the last value.

use crate::error::Result;
use crate::query::{
    Filter, JoinSpec, OperationKind, Payload, Projection, QueryDescriptor, QueryExecutor,
    QueryResult, SortDirection, SortSpec,
};

/// Builder for a single-use [`QueryDescriptor`]
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    descriptor: QueryDescriptor,
}

impl QueryBuilder {
    /// Start a query with no target table
    pub fn new(operation: OperationKind) -> Self {
        Self {
            descriptor: QueryDescriptor::new(operation),
        }
    }

    pub fn select(table: impl Into<String>) -> Self {
        Self::new(OperationKind::Select).table(table)
    }

    pub fn insert(table: impl Into<String>) -> Self {
        Self::new(OperationKind::Insert).table(table)
    }

    pub fn update(table: impl Into<String>) -> Self {
        Self::new(OperationKind::Update).table(table)
    }

    pub fn delete(table: impl Into<String>) -> Self {
        Self::new(OperationKind::Delete).table(table)
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.descriptor.table = Some(table.into());
        self
    }

    pub fn projection(mut self, projection: Projection) -> Self {
        self.descriptor.projection = projection;
        self
    }

    /// Project the listed columns, in order
    pub fn columns<I, S>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.projection(Projection::Columns(
            columns.into_iter().map(Into::into).collect(),
        ))
    }

    /// Project every column (`*`)
    pub fn all_columns(self) -> Self {
        self.projection(Projection::All)
    }

    pub fn filter(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.descriptor.filter = Some(Filter::new(column, value));
        self
    }

    pub fn join(
        mut self,
        column: impl Into<String>,
        table: impl Into<String>,
        other_column: impl Into<String>,
    ) -> Self {
        self.descriptor.join = Some(JoinSpec {
            column: column.into(),
            table: table.into(),
            other_column: other_column.into(),
        });
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, direction: SortDirection) -> Self {
        self.descriptor.sort = Some(SortSpec {
            column: column.into(),
            direction,
        });
        self
    }

    /// Replace the whole payload
    pub fn payload(mut self, payload: Payload) -> Self {
        self.descriptor.payload = Some(payload);
        self
    }

    /// Add one column assignment to the payload
    pub fn set(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.descriptor
            .payload
            .get_or_insert_with(Payload::new)
            .insert(column.into(), value.into());
        self
    }

    /// Finish configuration and return the descriptor
    pub fn build(self) -> QueryDescriptor {
        self.descriptor
    }

    /// Finish configuration and run the query
    pub fn execute(self, executor: &QueryExecutor) -> Result<QueryResult> {
        executor.execute(self.descriptor)
    }
}

impl From<QueryBuilder> for QueryDescriptor {
    fn from(builder: QueryBuilder) -> Self {
        builder.build()
    }
}
