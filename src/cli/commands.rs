//! CLI command implementations
//!
//! Boot sequence shared by every command:
//! 1. Load and verify the catalog (checksum, schema, time windows)
//! 2. Build the interval index
//!
//! `serve` then hands the index to the HTTP server; `check` and `search` are
//! one-shot and print a single JSON object.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::catalog::load_dir;
use crate::codec::parse_timestamp;
use crate::config::AdServerConfig;
use crate::http_server::{AdView, HttpServer};
use crate::index::{build_index, IntervalIndex};
use crate::observability::{init_logging, ObservationScope};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Parse arguments, set up logging and run the requested command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config } => serve(&config),
        Command::Check { ads_dir } => check(&ads_dir),
        Command::Search {
            ads_dir,
            dt,
            tz,
            all,
        } => search(&ads_dir, dt.as_deref(), tz.as_deref(), all),
    }
}

/// Load the catalog from `ads_dir` and build its index.
pub fn boot_index(ads_dir: &Path) -> CliResult<IntervalIndex> {
    let scope = ObservationScope::new("CATALOG_LOAD");
    let catalog = match load_dir(ads_dir) {
        Ok(catalog) => catalog,
        Err(e) => {
            scope.fail(&e.to_string());
            return Err(e.into());
        }
    };
    scope.complete();

    let scope = ObservationScope::new("INDEX_BUILD");
    let index = build_index(catalog);
    scope.complete();

    Ok(index)
}

/// Load configuration and catalog, then serve until the process is stopped.
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = AdServerConfig::load(config_path)?;
    let index = Arc::new(boot_index(&config.ads_dir)?);

    let server = HttpServer::new(config, index);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Verify a catalog and print a summary.
pub fn check(ads_dir: &Path) -> CliResult<()> {
    let index = boot_index(ads_dir)?;
    let catalog = index.status();
    write_response(json!({
        "version": index.version(),
        "pub_timestamp": catalog.pub_timestamp,
        "ads": index.len(),
    }))
}

/// Run one search and print the matching ads.
///
/// The operator is trusted, so `--dt`/`--tz`/`--all` always apply; a bad
/// `--dt`/`--tz` is an error rather than a fallback to now.
pub fn search(ads_dir: &Path, dt: Option<&str>, tz: Option<&str>, all: bool) -> CliResult<()> {
    let current_time = resolve_time(dt, tz, Utc::now().timestamp())?;
    let index = boot_index(ads_dir)?;
    let ads = search_views(&index, current_time, all);
    write_response(json!({
        "current_time": current_time,
        "all_active": all,
        "ads": ads,
    }))
}

/// Picks the query time for `search`.
pub fn resolve_time(dt: Option<&str>, tz: Option<&str>, now: i64) -> CliResult<i64> {
    match (dt, tz) {
        (Some(dt), Some(tz)) => parse_timestamp(dt, tz).map_err(|e| CliError::invalid_argument(e.to_string())),
        (None, None) => Ok(now),
        _ => Err(CliError::invalid_argument("--dt and --tz must be given together")),
    }
}

/// Searches and renders results the way `/api/get_ad` does.
pub fn search_views(index: &IntervalIndex, current_time: i64, all: bool) -> Vec<AdView> {
    let ids = index.search_active(current_time, all);
    index.get_by_ids(&ids).into_iter().map(AdView::from).collect()
}
