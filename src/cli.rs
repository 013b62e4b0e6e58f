// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The scrape settings are global flags, so they work before or after the
// subcommand, and each one can also come from a GITALL_* environment variable.
// =============================================================================

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{ScrapeConfig, DEFAULT_BASE_URL, DEFAULT_MAX_PAGES, DEFAULT_TIMEOUT_SECS};
use crate::error::ScrapeError;

#[derive(Parser, Debug)]
#[command(
    name = "gitall",
    version,
    about = "View a GitHub profile and its repositories, scraped from the public pages",
    long_about = "gitall reads a user's public GitHub profile page and repository listing \
                  (no API, no token) and shows the result as a terminal dashboard. \
                  The collected data can be saved as {username}_data.json."
)]
pub struct Cli {
    #[command(flatten)]
    pub scrape: ScrapeArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Settings shared by every subcommand.
#[derive(Args, Debug)]
pub struct ScrapeArgs {
    /// Site to scrape profiles from
    #[arg(long, global = true, env = "GITALL_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Stop after this many repository-listing pages
    #[arg(long, global = true, env = "GITALL_MAX_PAGES", default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: u32,

    /// Per-request timeout in seconds
    #[arg(long, global = true, env = "GITALL_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl ScrapeArgs {
    pub fn to_config(&self) -> Result<ScrapeConfig, ScrapeError> {
        ScrapeConfig::new(&self.base_url, self.max_pages, self.timeout_secs)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a user's profile dashboard
    ///
    /// Example: gitall profile Queaxtra --save downloads/
    Profile {
        /// GitHub username (letters and digits only)
        username: String,

        /// Print only the collected JSON record instead of the dashboard
        #[arg(long)]
        json: bool,

        /// Also save the record as {username}_data.json in this directory
        #[arg(long, value_name = "DIR")]
        save: Option<PathBuf>,
    },

    /// List a user's public repositories only
    ///
    /// Example: gitall repos Queaxtra --json
    Repos {
        /// GitHub username (letters and digits only)
        username: String,

        /// Output the repository list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read usernames from stdin, one per line, and show each profile
    ///
    /// A new line cancels a lookup that is still running.
    Interactive {
        /// Save every profile as {username}_data.json in this directory
        #[arg(long, value_name = "DIR")]
        save: Option<PathBuf>,
    },
}
