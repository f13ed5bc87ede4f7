//! CLI argument definitions using clap
//!
//! Commands:
//! - adserver serve --config <path>
//! - adserver check --ads-dir <path>
//! - adserver search --ads-dir <path> [--dt <YYYYMMDD:HH:MM:SS> --tz <zone>] [--all]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;

/// Time-windowed advertisement server
#[derive(Parser, Debug)]
#[command(name = "adserver")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the catalog and serve ad queries over HTTP
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Verify and validate a catalog without serving it
    Check {
        /// Directory holding banner_ads.json and banner_ads.md5
        #[arg(long, default_value = "./ads")]
        ads_dir: PathBuf,
    },

    /// Run a single search against a catalog and print the matching ads
    Search {
        /// Directory holding banner_ads.json and banner_ads.md5
        #[arg(long, default_value = "./ads")]
        ads_dir: PathBuf,

        /// Query time as YYYYMMDD:HH:MM:SS (defaults to now)
        #[arg(long, requires = "tz")]
        dt: Option<String>,

        /// IANA time zone of --dt
        #[arg(long, requires = "dt")]
        tz: Option<String>,

        /// Include ads that have not started yet
        #[arg(long)]
        all: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
