//! Test fixture for Tablite integration tests
//!
//! Provides an isolated data directory per test using ONLY the public API.

#![allow(dead_code)]

use std::path::PathBuf;
use tablite::{EngineConfig, QueryBuilder, QueryDescriptor, QueryExecutor, QueryResult, TableError};

/// Test fixture with an isolated data directory
pub struct TestFixture {
    executor: QueryExecutor,
    _temp_dir: tempfile::TempDir,
}

impl TestFixture {
    /// Create an empty fixture
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        Self::with_config(EngineConfig::default())
    }

    /// Create a fixture from `config`, with its data directory replaced by a temp dir
    pub fn with_config(config: EngineConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let _ = env_logger::builder().is_test(true).try_init();

        let temp_dir = tempfile::tempdir()?;
        let config = EngineConfig {
            data_dir: temp_dir.path().to_path_buf(),
            ..config
        };

        Ok(TestFixture {
            executor: QueryExecutor::new(config),
            _temp_dir: temp_dir,
        })
    }

    /// Fixture holding the `students` table from the documentation scenario
    pub fn with_students() -> Result<Self, Box<dyn std::error::Error>> {
        let fixture = Self::new()?;
        fixture.write_table("students", "id,name,state\n1,Alice,CA\n2,Bob,TX\n")?;
        Ok(fixture)
    }

    /// Fixture with `students` and `enrollments` tables for join tests
    pub fn with_school_data() -> Result<Self, Box<dyn std::error::Error>> {
        let fixture = Self::new()?;
        fixture.write_table(
            "students",
            "id,name,state\n1,Alice,CA\n2,Bob,TX\n3,Carol,CA\n4,Dan,\n",
        )?;
        fixture.write_table(
            "enrollments",
            "id,student_id,course,grade\n\
             1,1,Math,90\n\
             2,1,History,75\n\
             3,3,Math,100\n\
             4,2,Art,\n\
             5,9,Math,60\n\
             6,3,Art,8\n",
        )?;
        Ok(fixture)
    }

    pub fn executor(&self) -> &QueryExecutor {
        &self.executor
    }

    pub fn table_path(&self, table: &str) -> PathBuf {
        self.executor.config().table_path(table)
    }

    /// Write raw file contents for `table`
    pub fn write_table(&self, table: &str, contents: &str) -> std::io::Result<()> {
        std::fs::write(self.table_path(table), contents)
    }

    /// Raw file contents of `table`
    pub fn read_table(&self, table: &str) -> String {
        std::fs::read_to_string(self.table_path(table)).expect("table file should exist")
    }

    /// Run a builder and return the result
    pub fn run(&self, query: QueryBuilder) -> Result<QueryResult, TableError> {
        query.execute(&self.executor)
    }

    /// Run a descriptor and return the result
    pub fn execute(&self, descriptor: QueryDescriptor) -> Result<QueryResult, TableError> {
        self.executor.execute(descriptor)
    }

    /// Run a query that must succeed
    pub fn assert_query_succeeds(&self, query: QueryBuilder) -> QueryResult {
        match self.run(query) {
            Ok(result) => result,
            Err(e) => panic!("Query should succeed but failed: {}", e),
        }
    }

    /// Run a query that must fail
    pub fn assert_query_fails(&self, query: QueryBuilder) -> TableError {
        match self.run(query) {
            Ok(result) => panic!("Query should fail but returned: {:?}", result),
            Err(e) => e,
        }
    }

    /// Number of rows a full SELECT on `table` returns
    pub fn row_count(&self, table: &str) -> usize {
        self.assert_query_succeeds(QueryBuilder::select(table)).len()
    }
}
