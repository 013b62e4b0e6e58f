// src/session.rs
// =============================================================================
// One submission, start to finish, plus the interactive form loop.
//
// A submission is: validate the username, run a scrape pass, show the result,
// and optionally save the JSON export. Both the one-shot `profile` command and
// the interactive session go through here.
//
// Interactive mode reads one username per line from stdin. Each line starts a
// fresh scrape in its own task. If a new line arrives while the previous
// scrape is still running, the old task is aborted, so a slow or hung lookup
// never blocks the next one.
// =============================================================================

use std::io::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::github::PageFetcher;
use crate::model::Profile;
use crate::render::{pagination_warning, render_dashboard, to_indented_json, JsonExport};
use crate::scrape::scrape_profile;
use crate::username::Username;

/// How a finished submission should be shown.
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    /// Print only the record JSON instead of the dashboard.
    pub json: bool,
    /// Save `{username}_data.json` into this directory.
    pub save_dir: Option<PathBuf>,
}

/// A validated username and what was scraped for it.
#[derive(Debug)]
pub struct Submission {
    pub username: Username,
    pub profile: Profile,
}

/// Validates `raw` and runs a scrape pass. Invalid input returns before any
/// request is made.
// Parameters:
//   fetcher: where pages come from
//   config: base URL, page ceiling and timeout
//   raw: the username exactly as typed (not trimmed)
// Returns:
//   Ok(Submission) = the scraped profile, ready to present
//   Err = invalid username, or the profile page failed
pub async fn scrape_submission(
    fetcher: &dyn PageFetcher,
    config: &ScrapeConfig,
    raw: &str,
) -> Result<Submission, ScrapeError> {
    let username = Username::parse(raw)?;
    let profile = scrape_profile(fetcher, config, &username).await?;
    Ok(Submission { username, profile })
}

/// Prints a finished submission and saves the export if asked to.
// Parameters:
//   submission: the username and its scraped profile
//   output: JSON or dashboard, plus an optional directory for the export
// Returns:
//   Err only when serializing or writing the export fails
pub fn present(submission: &Submission, output: &OutputOptions) -> Result<()> {
    if output.json {
        println!("{}", to_indented_json(&submission.profile.record)?);

        // The dashboard shows this inline; keep stdout pure JSON here
        if let Some(warning) = pagination_warning(&submission.profile.pagination) {
            eprintln!("⚠️  {warning}");
        }
    } else {
        print!("{}", render_dashboard(&submission.profile)?);
    }

    if let Some(dir) = &output.save_dir {
        let export = JsonExport::new(&submission.profile.record, &submission.username)?;
        let path = export
            .save_in(dir)
            .with_context(|| format!("Failed to save {}", export.file_name))?;
        eprintln!("💾 Saved {} ({}) to {}", export.file_name, export.mime, path.display());
    }

    Ok(())
}

/// The interactive form: one username per line until stdin closes.
pub struct Session {
    fetcher: Arc<dyn PageFetcher>,
    config: ScrapeConfig,
    output: OutputOptions,
    in_flight: Option<JoinHandle<()>>,
}

impl Session {
    pub fn new(fetcher: Arc<dyn PageFetcher>, config: ScrapeConfig, output: OutputOptions) -> Self {
        Session {
            fetcher,
            config,
            output,
            in_flight: None,
        }
    }

    /// Handles one line of input. Returns true if a scrape was started.
    ///
    /// Any scrape still running is cancelled first, even when the new input
    /// turns out to be invalid: the newest submission always wins.
    pub fn submit(&mut self, line: &str) -> bool {
        if line.is_empty() {
            return false;
        }

        if let Some(previous) = self.in_flight.take() {
            if !previous.is_finished() {
                previous.abort();
                info!("previous lookup superseded");
                eprintln!("⏹️  Cancelled the previous lookup");
            }
        }

        // Validate up front so bad input never spawns anything
        let username = match Username::parse(line) {
            Ok(username) => username,
            Err(e) => {
                println!("❌ {e}");
                prompt();
                return false;
            }
        };

        let fetcher = Arc::clone(&self.fetcher);
        let config = self.config.clone();
        let output = self.output.clone();

        self.in_flight = Some(tokio::spawn(async move {
            println!("⏳ Loading data for {username}...");

            match scrape_profile(fetcher.as_ref(), &config, &username).await {
                Ok(profile) => {
                    let submission = Submission { username, profile };
                    if let Err(e) = present(&submission, &output) {
                        eprintln!("Error: {e:#}");
                    }
                }
                Err(e) => println!("❌ {e}"),
            }
            prompt();
        }));

        true
    }

    /// Waits for the last scrape, if any, to finish.
    pub async fn finish(mut self) {
        if let Some(task) = self.in_flight.take() {
            // An aborted task is the only way this fails; nothing to report
            let _ = task.await;
        }
    }

    /// Reads usernames from stdin until EOF.
    pub async fn run(mut self) -> Result<()> {
        println!("GitHub Profile Viewer");
        println!("Enter a GitHub username to view their profile (e.g. Queaxtra). Ctrl-D to quit.");
        prompt();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await.context("Failed to read from stdin")? {
            if !self.submit(&line) && line.is_empty() {
                prompt();
            }
        }

        self.finish().await;
        Ok(())
    }
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}
