//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use reelsync_core::{Mood, TitleKey, TopList};
use reelsync_import::SyncSettings;

#[derive(Parser)]
#[command(name = "reelsync")]
#[command(about = "Sync movie and TV metadata into a local catalog", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Overrides for the `[sync]` settings.
#[derive(Args, Clone, Default)]
pub(crate) struct SyncArgs {
    /// Catalog database path
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Known-titles TOML file
    #[arg(long)]
    pub known_titles: Option<PathBuf>,

    /// Concurrent fetch workers
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Delay before each title fetch, in milliseconds
    #[arg(long)]
    pub pace_ms: Option<u64>,

    /// First release year of the year sweep
    #[arg(long)]
    pub first_year: Option<i32>,

    /// Pages to read from popularity and per-year listings
    #[arg(long)]
    pub pages: Option<u32>,
}

impl SyncArgs {
    pub(crate) fn apply(&self, settings: &mut SyncSettings) {
        if let Some(db) = &self.db {
            settings.db_path = db.clone();
        }
        if let Some(path) = &self.known_titles {
            settings.known_titles_path = path.clone();
        }
        if let Some(workers) = self.workers {
            settings.workers = workers;
        }
        if let Some(pace) = self.pace_ms {
            settings.pace_ms = pace;
        }
        if let Some(year) = self.first_year {
            settings.first_year = year;
        }
        if let Some(pages) = self.pages {
            settings.popular_pages = pages;
            settings.sweep_last_page = pages;
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run one full sync now
    Sync {
        #[command(flatten)]
        args: SyncArgs,
    },

    /// Run the sync on a weekly schedule until interrupted
    Schedule {
        /// Cron expression, seconds first (default from settings)
        #[arg(long)]
        cron: Option<String>,

        /// Run one sync immediately before waiting for the schedule
        #[arg(long)]
        run_now: bool,

        #[command(flatten)]
        args: SyncArgs,
    },

    /// Show dataset statistics
    Stats {
        /// Catalog database path
        #[arg(long)]
        db: Option<PathBuf>,

        /// List titles on a top list (e.g., oscar-winners, binge_worthy)
        #[arg(long)]
        top_list: Option<TopList>,

        /// List titles with a mood (e.g., feel-good)
        #[arg(long)]
        mood: Option<Mood>,

        /// Maximum titles to list
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show one stored title (e.g., movie:550, tv:1399)
    Show {
        key: TitleKey,

        /// Catalog database path
        #[arg(long)]
        db: Option<PathBuf>,
    },

    /// Inspect settings and credentials
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show effective settings and where the API token comes from
    Show,

    /// Print the settings and credentials file paths
    Path,

    /// Test the API token against the upstream API
    Test,

    /// Prompt for an API token and save it to the credentials file
    Setup,
}
