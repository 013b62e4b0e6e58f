// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up tracing (diagnostics on stderr, filtered by RUST_LOG)
// 2. Parse command-line arguments using clap
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = shown, 1 = invalid input or fetch error,
//    2 = internal error)
// =============================================================================

mod cli;
mod config;
mod dom;
mod error;
mod github;
mod model;
mod render;
mod scrape;
mod session;
mod username;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};
use config::ScrapeConfig;
use error::ScrapeError;
use github::{HttpFetcher, PageFetcher};
use session::{OutputOptions, Session};
use username::Username;

#[tokio::main]
async fn main() {
    init_tracing();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

/// Logs go to stderr so `--json` output on stdout stays clean.
/// Defaults to warnings only; RUST_LOG=debug shows every request and miss.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

// This is the main application logic
// Returns:
//   Ok(0) = the lookup was shown
//   Ok(1) = invalid username or the profile could not be fetched
//   Err = unexpected error (exit code 2)
async fn run() -> Result<i32> {
    // Parse arguments, then validate the scrape settings once for every command
    let cli = Cli::parse();
    let config = cli.scrape.to_config()?;
    let fetcher = HttpFetcher::new(&config).context("Failed to create HTTP client")?;

    match cli.command {
        Commands::Profile { username, json, save } => {
            let output = OutputOptions {
                json,
                save_dir: save,
            };
            handle_profile(&fetcher, &config, &username, &output).await
        }
        Commands::Repos { username, json } => handle_repos(&fetcher, &config, &username, json).await,
        Commands::Interactive { save } => {
            let output = OutputOptions {
                json: false,
                save_dir: save,
            };
            Session::new(Arc::new(fetcher), config, output).run().await?;
            Ok(0)
        }
    }
}

// Handles the 'profile' subcommand
// Parameters:
//   fetcher: where pages come from (the real HTTP client, or scripted pages in tests)
//   config: base URL, page ceiling and timeout
//   username: the raw username as typed; validated before any request
//   output: dashboard or JSON, and where to save the export
// Returns:
//   Ok(0) = profile shown
//   Ok(1) = invalid username, or the profile could not be fetched
//   Err = anything else (exit code 2)
async fn handle_profile(
    fetcher: &dyn PageFetcher,
    config: &ScrapeConfig,
    username: &str,
    output: &OutputOptions,
) -> Result<i32> {
    eprintln!("⏳ Loading data for {}...", username);

    match session::scrape_submission(fetcher, config, username).await {
        Ok(submission) => {
            // Print the dashboard (or JSON) and save the export if asked to
            session::present(&submission, output)?;
            Ok(0)
        }
        Err(e) => report_failure(e),
    }
}

// Handles the 'repos' subcommand: the Repository Collector on its own
// Parameters:
//   fetcher, config: as for 'profile'
//   username: the raw username as typed
//   json: print the repository records as JSON instead of the list
// Returns:
//   Ok(0) = list shown (possibly with a pagination warning)
//   Ok(1) = invalid username
async fn handle_repos(
    fetcher: &dyn PageFetcher,
    config: &ScrapeConfig,
    username: &str,
    json: bool,
) -> Result<i32> {
    // Reject bad input before touching the network
    let username = match Username::parse(username) {
        Ok(username) => username,
        Err(e) => return report_failure(e),
    };

    eprintln!("⏳ Loading repositories for {}...", username);
    let collection = scrape::collect_repositories(fetcher, config, &username).await?;

    if json {
        println!("{}", render::to_indented_json(&collection.repositories)?);
    } else {
        print!(
            "{}",
            render::render_repository_list(&collection.repositories, &collection.pagination)
        );
    }

    Ok(0)
}

// Turns a scrape error into an exit code
// Returns:
//   Ok(1) = the user typed something wrong or GitHub answered with an error
//   Err = local misconfiguration, reported by main() with exit code 2
fn report_failure(error: ScrapeError) -> Result<i32> {
    if error.is_user_visible() {
        eprintln!("❌ {}", error);
        Ok(1)
    } else {
        Err(error.into())
    }
}
