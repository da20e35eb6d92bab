//! Configure command handler for editing default settings.

use anyhow::{Context, Result};
use inquire::{Select, Text};
use reqwest::Url;
use std::fmt;

use crate::config::{ConfigFile, ConfigManager, DEFAULT_HOST, DEFAULT_PORT, GtxConfig};
use crate::translation::{DEFAULT_ENDPOINT, DEFAULT_FROM, DEFAULT_TO, SUPPORTED_LANGUAGES};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the stored defaults. Otherwise prompts for the default
/// language pair and endpoint and writes them to the config file.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        let manager = ConfigManager::new()?;
        let config = manager.load_or_default()?;
        print_config(&manager, &config);
        return Ok(());
    }

    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    print_config(&manager, &config);

    let from = select_language(
        "Default source language:",
        config.gtx.from.as_deref().unwrap_or(DEFAULT_FROM),
    )?;
    let to = select_language(
        "Default target language:",
        config.gtx.to.as_deref().unwrap_or(DEFAULT_TO),
    )?;
    let endpoint = prompt_endpoint(config.gtx.endpoint.as_deref())?;

    config.gtx = GtxConfig {
        from: Some(from),
        to: Some(to),
        endpoint,
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

/// A language code with its display name, as shown in the selection list.
struct LanguageOption {
    code: &'static str,
    name: &'static str,
}

impl fmt::Display for LanguageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code, self.name)
    }
}

fn select_language(message: &str, current: &str) -> Result<String> {
    let options: Vec<LanguageOption> = SUPPORTED_LANGUAGES
        .iter()
        .map(|&(code, name)| LanguageOption { code, name })
        .collect();
    let cursor = options.iter().position(|o| o.code == current).unwrap_or(0);

    let selected = Select::new(message, options)
        .with_starting_cursor(cursor)
        .with_page_size(12)
        .prompt()?;

    Ok(selected.code.to_string())
}

/// Prompts for the endpoint. An empty answer or the built-in URL clears the override.
fn prompt_endpoint(current: Option<&str>) -> Result<Option<String>> {
    let answer = Text::new("Translate endpoint:")
        .with_default(current.unwrap_or(DEFAULT_ENDPOINT))
        .prompt()?;

    normalize_endpoint(&answer)
}

fn normalize_endpoint(answer: &str) -> Result<Option<String>> {
    let answer = answer.trim();
    if answer.is_empty() || answer == DEFAULT_ENDPOINT {
        return Ok(None);
    }

    Url::parse(answer).with_context(|| format!("Invalid endpoint URL: '{answer}'"))?;
    Ok(Some(answer.to_string()))
}

fn print_config(manager: &ConfigManager, config: &ConfigFile) {
    println!(
        "{} {}",
        Style::header("Configuration"),
        Style::secondary(manager.config_path().display())
    );
    print_entry("from", config.gtx.from.as_deref(), DEFAULT_FROM);
    print_entry("to", config.gtx.to.as_deref(), DEFAULT_TO);
    print_entry("endpoint", config.gtx.endpoint.as_deref(), DEFAULT_ENDPOINT);
    print_entry("host", config.server.host.as_deref(), DEFAULT_HOST);
    print_entry(
        "port",
        config.server.port.map(|p| p.to_string()).as_deref(),
        &DEFAULT_PORT.to_string(),
    );
    println!();
}

fn print_entry(key: &str, value: Option<&str>, default: &str) {
    let shown = value.map_or_else(
        || format!("{} {}", Style::value(default), Style::default_marker()),
        Style::value,
    );
    println!("  {:10} {shown}", Style::label(key));
}
