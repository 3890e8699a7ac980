use std::io::Write;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use reelsync_import::{SyncSettings, settings_path};
use reelsync_tmdb::{CredentialSource, Credentials, TmdbClient};

use crate::CliError;

fn mask_value(s: &str) -> String {
    match s.get(..4) {
        Some(prefix) if s.len() > 8 => format!("{}****", prefix),
        _ => "****".to_string(),
    }
}

fn log_file(label: &str, path: Option<&Path>) {
    match path {
        Some(p) if p.exists() => {
            log::info!(
                "  {} {} {}",
                label,
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  {} {} {}",
                label,
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  {} {}",
                label,
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
}

/// Show effective settings and where the API token comes from.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let settings = SyncSettings::load()
        .map_err(|e| CliError::config(format!("Failed to load settings: {}", e)))?;

    log::info!(
        "{}",
        "reelsync Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();
    log_file("Settings file:    ", Some(settings_path().as_path()));
    log_file("Credentials file: ", reelsync_tmdb::config_path().as_deref());
    log_file("Known titles:     ", Some(settings.known_titles_path.as_path()));
    log_file("Catalog database: ", Some(settings.db_path.as_path()));
    crate::log_blank();

    let source = reelsync_tmdb::credential_source();
    let source_str = format!("({})", source);
    match Credentials::load() {
        Ok(creds) if source != CredentialSource::Missing => {
            log::info!(
                "  {} {} {}",
                "api_token:".if_supports_color(Stdout, |t| t.cyan()),
                mask_value(&creds.api_token),
                source_str.if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        _ => {
            log::info!(
                "  {} {} {}",
                "api_token:".if_supports_color(Stdout, |t| t.cyan()),
                "not set".if_supports_color(Stdout, |t| t.yellow()),
                source_str.if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }
    crate::log_blank();

    let rows: [(&str, String); 11] = [
        ("language", settings.language.clone()),
        ("region", settings.region.clone()),
        ("popular_pages", settings.popular_pages.to_string()),
        ("sweep_last_page", settings.sweep_last_page.to_string()),
        ("first_year", settings.first_year.to_string()),
        ("workers", settings.workers.to_string()),
        ("pace_ms", settings.pace_ms.to_string()),
        ("item_timeout_secs", settings.item_timeout_secs.to_string()),
        ("batch_size", settings.batch_size.to_string()),
        ("requests_per_second", settings.requests_per_second.to_string()),
        ("schedule", settings.schedule.clone()),
    ];
    for (name, value) in rows {
        log::info!(
            "  {} {}",
            format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
            value,
        );
    }
    Ok(())
}

/// Print the settings and credentials file paths.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings_path().display());
    if let Some(creds) = reelsync_tmdb::config_path() {
        log::info!("{}", creds.display());
    }
    Ok(())
}

/// Prompt for an API token and write it to the credentials file.
pub(crate) fn run_config_setup() -> Result<(), CliError> {
    let path = reelsync_tmdb::config_path()
        .ok_or_else(|| CliError::config("Could not determine config directory"))?;

    println!(
        "{}",
        "TMDB Credential Setup".if_supports_color(Stdout, |t| t.bold()),
    );
    println!();
    print!("  API read access token: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    let api_token = input.trim().to_string();
    if api_token.is_empty() {
        return Err(CliError::config("No token entered"));
    }

    reelsync_tmdb::save_to_file(&path, &Credentials { api_token })
        .map_err(|e| CliError::config(format!("Failed to save credentials: {}", e)))?;
    println!();
    println!(
        "{} Credentials saved to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

/// Test the API token against TMDB.
pub(crate) fn run_config_test(quiet: bool) -> Result<(), CliError> {
    let creds = Credentials::load().map_err(|e| CliError::config(e.to_string()))?;
    let settings = SyncSettings::load()
        .map_err(|e| CliError::config(format!("Failed to load settings: {}", e)))?;
    let client = TmdbClient::new(creds, settings.requests_per_second)
        .map_err(|e| CliError::api(format!("Failed to create API client: {}", e)))?;

    log::info!("Testing API token against TMDB...");

    let rt = super::runtime()?;
    rt.block_on(async {
        let pb = if quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("  {spinner:.cyan} {msg}") {
                pb.set_style(style.tick_chars("/-\\|"));
            }
            pb.set_message("Connecting...");
            pb.enable_steady_tick(std::time::Duration::from_millis(100));
            pb
        };

        let result = client.check_auth().await;
        pb.finish_and_clear();
        result.map_err(|e| CliError::api(format!("Token validation failed: {}", e)))?;
        log::info!(
            "{} API token is valid!",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        );
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_tokens() {
        assert_eq!(mask_value("abc"), "****");
        assert_eq!(mask_value("eyJhbGciOiJIUzI1NiJ9"), "eyJh****");
    }
}
