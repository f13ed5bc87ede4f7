//! CLI module
//!
//! Provides command-line interface for:
//! - serve: Load catalog and serve HTTP queries
//! - check: Verify a catalog and exit
//! - search: One-shot search against a catalog

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{boot_index, check, resolve_time, run, run_command, search, search_views, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_json, write_response};
