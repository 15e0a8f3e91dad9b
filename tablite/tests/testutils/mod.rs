//! Test utilities for Tablite integration tests
//!
//! TestFixture seeds table files in a private temporary directory and runs
//! queries through the public QueryExecutor API only.

pub mod test_fixture;
