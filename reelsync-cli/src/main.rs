//! reelsync CLI
//!
//! Command-line interface for syncing movie and TV metadata into a local
//! SQLite catalog.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Sync { args } => commands::sync::run_sync(&args, cli.quiet),
        Commands::Schedule {
            cron,
            run_now,
            args,
        } => commands::schedule::run_schedule(&args, cron, run_now, cli.quiet),
        Commands::Stats {
            db,
            top_list,
            mood,
            limit,
        } => commands::stats::run_stats(db, top_list, mood, limit),
        Commands::Show { key, db } => commands::stats::run_show(key, db),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::Test => commands::config::run_config_test(cli.quiet),
            ConfigAction::Setup => commands::config::run_config_setup(),
        },
    };

    if let Err(e) = result {
        log::error!("{} {}", "\u{2718}".if_supports_color(Stderr, |t| t.red()), e);
        std::process::exit(1);
    }
}

/// Plain messages at info level; timestamps and module paths with `-v`.
/// `RUST_LOG` still overrides per module.
fn init_logger(verbose: bool, quiet: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();
    if !verbose {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }
    builder.init();
}

/// Print an empty line through the logger so `--quiet` hides it too.
pub(crate) fn log_blank() {
    log::info!("");
}
