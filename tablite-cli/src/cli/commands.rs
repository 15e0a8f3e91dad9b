// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Command-line argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tablite::{JoinSpec, SortDirection, SortSpec};

#[derive(Parser, Debug)]
#[command(name = "tablite", version, about = "Query delimited text tables")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding table files (overrides the configuration file)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Pretty-print the JSON result
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read rows from a table
    Select {
        table: String,

        /// Comma-separated output columns (all columns when omitted)
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,

        /// Equality filter, COLUMN=VALUE
        #[arg(long = "where", value_parser = parse_assignment)]
        filter: Option<(String, String)>,

        /// Inner join, COLUMN:TABLE:OTHER_COLUMN
        #[arg(long, value_parser = parse_join)]
        join: Option<JoinSpec>,

        /// Sort column with optional direction, COLUMN[:asc|desc]
        #[arg(long, value_parser = parse_sort)]
        order_by: Option<SortSpec>,
    },

    /// Append a row; the id is generated
    Insert {
        table: String,

        /// Column assignment, COLUMN=VALUE (repeatable)
        #[arg(long = "set", value_parser = parse_assignment)]
        assignments: Vec<(String, String)>,
    },

    /// Overwrite columns on matching rows
    Update {
        table: String,

        /// Column assignment, COLUMN=VALUE (repeatable)
        #[arg(long = "set", value_parser = parse_assignment, required = true)]
        assignments: Vec<(String, String)>,

        /// Equality filter, COLUMN=VALUE (all rows when omitted)
        #[arg(long = "where", value_parser = parse_assignment)]
        filter: Option<(String, String)>,
    },

    /// Remove matching rows
    Delete {
        table: String,

        /// Equality filter, COLUMN=VALUE (all rows when omitted)
        #[arg(long = "where", value_parser = parse_assignment)]
        filter: Option<(String, String)>,
    },

    /// Execute a JSON query descriptor read from a file ("-" for stdin)
    Run { descriptor: PathBuf },

    /// Show version information
    Version,
}

/// `COLUMN=VALUE`; the value may be empty or contain further `=`
pub fn parse_assignment(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((column, value)) if !column.is_empty() => {
            Ok((column.to_string(), value.to_string()))
        }
        _ => Err(format!("expected COLUMN=VALUE, got '{}'", s)),
    }
}

/// `COLUMN:TABLE:OTHER_COLUMN`
pub fn parse_join(s: &str) -> Result<JoinSpec, String> {
    let parts: Vec<&str> = s.split(':').collect();
    match parts.as_slice() {
        [column, table, other_column]
            if !column.is_empty() && !table.is_empty() && !other_column.is_empty() =>
        {
            Ok(JoinSpec {
                column: column.to_string(),
                table: table.to_string(),
                other_column: other_column.to_string(),
            })
        }
        _ => Err(format!("expected COLUMN:TABLE:OTHER_COLUMN, got '{}'", s)),
    }
}

/// `COLUMN` or `COLUMN:asc` / `COLUMN:desc`
pub fn parse_sort(s: &str) -> Result<SortSpec, String> {
    let (column, direction) = match s.rsplit_once(':') {
        Some((column, direction)) => (column, direction.parse::<SortDirection>()?),
        None => (s, SortDirection::Ascending),
    };
    if column.is_empty() {
        return Err(format!("expected COLUMN[:asc|desc], got '{}'", s));
    }
    Ok(SortSpec {
        column: column.to_string(),
        direction,
    })
}
