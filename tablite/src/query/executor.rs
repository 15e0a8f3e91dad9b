// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Query executor - runs one descriptor against the table store
//!
//! SELECT follows a fixed pipeline: join, then filter, then sort, then
//! projection, each stage resolving columns against the header produced by
//! the previous one. Mutations delegate to the table store. Every call loads
//! its tables fresh and keeps nothing afterwards.
//!
//! Errors raised by the table store are returned unchanged.

use crate::config::EngineConfig;
use crate::error::{Result, TableError};
use crate::query::{OperationKind, Payload, QueryDescriptor, QueryResult};
use crate::storage::Table;
use log::debug;
use std::time::Instant;

/// Executes query descriptors against tables under one configuration
#[derive(Debug, Clone, Default)]
pub struct QueryExecutor {
    config: EngineConfig,
}

impl QueryExecutor {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run a query to completion
    pub fn execute(&self, descriptor: QueryDescriptor) -> Result<QueryResult> {
        let start = Instant::now();
        debug!(
            "Executing {} on {:?}",
            descriptor.operation, descriptor.table
        );

        let mut result = match descriptor.operation {
            OperationKind::Select => self.execute_select(descriptor)?,
            OperationKind::Insert => self.execute_insert(descriptor)?,
            OperationKind::Update => self.execute_update(descriptor)?,
            OperationKind::Delete => self.execute_delete(descriptor)?,
        };

        result.execution_time_ms = start.elapsed().as_millis() as u64;
        Ok(result)
    }

    fn execute_select(&self, descriptor: QueryDescriptor) -> Result<QueryResult> {
        let table = Table::open(required_table(&descriptor)?, &self.config)?;

        let mut rows = match &descriptor.join {
            Some(join) => {
                let other = Table::open(&join.table, &self.config)?;
                table.join(&other, &join.column, &join.other_column)?
            }
            None => table.into_row_set(),
        };

        if let Some(filter) = &descriptor.filter {
            rows = rows.filter_equals(&filter.column, &filter.value)?;
        }

        if let Some(sort) = &descriptor.sort {
            rows = rows.sort(&sort.column, sort.direction)?;
        }

        let projected = rows.project(&descriptor.projection)?;
        debug!("SELECT on '{}' returned {} rows", projected.name(), projected.len());
        Ok(QueryResult::from_row_set(projected))
    }

    fn execute_insert(&self, descriptor: QueryDescriptor) -> Result<QueryResult> {
        let name = required_table(&descriptor)?;
        let payload = required_payload(&descriptor)?;

        let mut table = Table::open(name, &self.config)?;
        let id = table.insert(payload)?;
        Ok(QueryResult::single(OperationKind::Insert, "id", id, 1))
    }

    fn execute_update(&self, descriptor: QueryDescriptor) -> Result<QueryResult> {
        let name = required_table(&descriptor)?;
        let payload = required_payload(&descriptor)?;

        let mut table = Table::open(name, &self.config)?;
        let updated = table.update(payload, descriptor.filter.as_ref())?;
        Ok(QueryResult::single(
            OperationKind::Update,
            "updated_rows",
            updated as i64,
            updated,
        ))
    }

    fn execute_delete(&self, descriptor: QueryDescriptor) -> Result<QueryResult> {
        let name = required_table(&descriptor)?;

        let mut table = Table::open(name, &self.config)?;
        let deleted = table.delete(descriptor.filter.as_ref())?;
        Ok(QueryResult::single(
            OperationKind::Delete,
            "deleted_rows",
            deleted as i64,
            deleted,
        ))
    }
}

fn required_table(descriptor: &QueryDescriptor) -> Result<&str> {
    descriptor.table.as_deref().ok_or_else(|| {
        TableError::NotReady(format!("{} requires a target table", descriptor.operation))
    })
}

fn required_payload(descriptor: &QueryDescriptor) -> Result<&Payload> {
    descriptor.payload.as_ref().ok_or_else(|| {
        TableError::NotReady(format!("{} requires a payload", descriptor.operation))
    })
}
