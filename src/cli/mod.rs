//! CLI module for metatype
//!
//! This module provides the command-line interface for inspecting the builtin type catalog.
//!
//! ## Commands
//!
//! - `list [--json]` - Registered types in registration order
//! - `show <TYPE>` - Dependencies and pretty-printed fragments of one type
//! - `check <TYPE> <TEXT>` - Pre-check text against a type's validation pattern
//! - `encode <TYPE> <TEXT>` - Parse text and print the serialized bytes as hex
//! - `decode <TYPE> <HEX>` - Deserialize hex bytes and print the canonical text
//! - `deps [TYPE...]` - Deduplicated `use` items for the named types (or all)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::process;

use clap::{Parser, Subcommand};
use metatype_core::{DuplicatePolicy, FrozenCatalog};

use crate::config::{self, CatalogConfig};

// ============================================================================
// Errors and exit codes
// ============================================================================

/// Process exit status. `check` uses `FAILURE` for text that does not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    /// Usage or configuration problem.
    pub const USAGE: ExitCode = ExitCode(2);
}

/// A failed command: what to print on stderr and the status to exit with.
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Unknown type, rejected text or catalog error.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Bad configuration or malformed hex input.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::USAGE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Inspect the metatype conversion catalog
#[derive(Parser, Debug)]
#[command(name = "metatype")]
#[command(version = VERSION)]
#[command(about = "Inspect registered type conversions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// What re-registering a type name does (overrides METATYPE_ON_DUPLICATE)
    #[arg(long = "on-duplicate", value_name = "POLICY", global = true, value_parser = parse_policy_arg)]
    pub on_duplicate: Option<DuplicatePolicy>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered types in registration order
    List {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show a type's dependencies and fragments
    Show {
        /// Canonical type name
        #[arg(value_name = "TYPE")]
        type_name: String,
        /// Print fragments as stored, without pretty-printing
        #[arg(long)]
        raw: bool,
    },

    /// Check text against a type's validation pattern
    Check {
        #[arg(value_name = "TYPE")]
        type_name: String,
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Parse text and print its serialized bytes as hex
    Encode {
        #[arg(value_name = "TYPE")]
        type_name: String,
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Deserialize hex bytes and print the canonical text
    Decode {
        #[arg(value_name = "TYPE")]
        type_name: String,
        #[arg(value_name = "HEX")]
        hex: String,
    },

    /// Print deduplicated `use` items for the named types (all types if none given)
    Deps {
        #[arg(value_name = "TYPE")]
        type_names: Vec<String>,
    },
}

fn parse_policy_arg(value: &str) -> Result<DuplicatePolicy, String> {
    config::parse_policy("--on-duplicate", value).map_err(|e| e.to_string())
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Parse arguments, run the command, and exit with its status.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Build the catalog and dispatch to the command.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let catalog = load_catalog(cli.on_duplicate)?;

    match cli.command {
        Command::List { json } => commands::list(&catalog, json),
        Command::Show { type_name, raw } => commands::show(&catalog, &type_name, raw),
        Command::Check { type_name, text } => commands::check(&catalog, &type_name, &text),
        Command::Encode { type_name, text } => commands::encode(&catalog, &type_name, &text),
        Command::Decode { type_name, hex } => commands::decode(&catalog, &type_name, &hex),
        Command::Deps { type_names } => commands::deps(&catalog, &type_names),
    }
}

/// Build the builtin catalog from the environment, with the command-line policy taking precedence.
fn load_catalog(on_duplicate: Option<DuplicatePolicy>) -> CliResult<FrozenCatalog> {
    let mut config = CatalogConfig::from_env().map_err(|e| CliError::usage(e.to_string()))?;
    if let Some(policy) = on_duplicate {
        config = config.with_duplicate_policy(policy);
    }
    tracing::debug!(policy = config.duplicate_policy.as_str(), "building catalog");

    crate::build_catalog(&config).map_err(|e| CliError::failure(format!("Catalog error: {}", e)))
}
