// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Command handlers

use super::commands::{Cli, Commands};
use std::io::Read;
use tablite::{
    EngineConfig, Filter, Payload, Projection, QueryBuilder, QueryDescriptor,
    QueryExecutor, QueryResult,
};

/// Execute a query command and print its result
pub fn handle_command(cli: &Cli, command: &Commands) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli)?;
    log::debug!("Using data directory {}", config.data_dir.display());

    let descriptor = build_descriptor(command)?;
    let result = QueryExecutor::new(config).execute(descriptor)?;
    print_result(&result, cli.pretty)
}

fn load_config(cli: &Cli) -> Result<EngineConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = data_dir.clone();
    }
    Ok(config)
}

fn build_descriptor(command: &Commands) -> Result<QueryDescriptor, Box<dyn std::error::Error>> {
    let descriptor = match command {
        Commands::Select {
            table,
            columns,
            filter,
            join,
            order_by,
        } => {
            let mut descriptor = QueryBuilder::select(table).build();
            if !columns.is_empty() {
                descriptor.projection = Projection::Columns(columns.clone());
            }
            descriptor.filter = to_filter(filter);
            descriptor.join = join.clone();
            descriptor.sort = order_by.clone();
            descriptor
        }
        Commands::Insert { table, assignments } => QueryBuilder::insert(table)
            .payload(to_payload(assignments))
            .build(),
        Commands::Update {
            table,
            assignments,
            filter,
        } => {
            let mut descriptor = QueryBuilder::update(table)
                .payload(to_payload(assignments))
                .build();
            descriptor.filter = to_filter(filter);
            descriptor
        }
        Commands::Delete { table, filter } => {
            let mut descriptor = QueryBuilder::delete(table).build();
            descriptor.filter = to_filter(filter);
            descriptor
        }
        Commands::Run { descriptor } => {
            let mut text = String::new();
            if descriptor.as_os_str() == "-" {
                std::io::stdin().read_to_string(&mut text)?;
            } else {
                text = std::fs::read_to_string(descriptor)?;
            }
            QueryDescriptor::from_json(&text)?
        }
        Commands::Version => return Err("version does not run a query".into()),
    };
    Ok(descriptor)
}

fn to_filter(filter: &Option<(String, String)>) -> Option<Filter> {
    filter
        .as_ref()
        .map(|(column, value)| Filter::new(column.clone(), value.clone()))
}

fn to_payload(assignments: &[(String, String)]) -> Payload {
    assignments.iter().cloned().collect()
}

fn print_result(result: &QueryResult, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tablite::TableError;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("tablite").chain(args.iter().copied()))
    }

    fn run(args: &[&str]) -> Result<(), Box<dyn std::error::Error>> {
        let cli = parse(args);
        handle_command(&cli, &cli.command)
    }

    #[test]
    fn test_errors_reach_the_caller() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().to_str().unwrap();
        std::fs::write(dir.path().join("students.csv"), "id,name\n1,Alice\n").unwrap();
        let bad_config = dir.path().join("bad.json");
        std::fs::write(&bad_config, "{").unwrap();

        run(&["--data-dir", data_dir, "insert", "students", "--set", "name=Bob"]).unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join("students.csv")).unwrap(),
            "id,name\n1,Alice\n2,Bob\n"
        );

        let err = run(&["--data-dir", data_dir, "select", "ghost"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TableError>(),
            Some(TableError::NotFound { .. })
        ));

        let err = run(&["--config", bad_config.to_str().unwrap(), "select", "students"])
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TableError>(),
            Some(TableError::Config { .. })
        ));

        assert!(run(&["version"]).is_err());
    }
}
