// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI module for Tablite
//!
//! Builds one structured query from command-line flags (or reads a JSON
//! descriptor), executes it and prints the result as JSON.

pub mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::handle_command;
