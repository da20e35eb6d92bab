use anyhow::{Context, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::fs::atomic_write;
use crate::paths;
use crate::translation::{DEFAULT_ENDPOINT, LanguagePair, validate_language};

/// Host the HTTP binding listens on when nothing else is configured.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Port the HTTP binding listens on when nothing else is configured.
pub const DEFAULT_PORT: u16 = 8080;

/// Translation defaults in the `[gtx]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GtxConfig {
    /// Default source language code.
    pub from: Option<String>,
    /// Default target language code.
    pub to: Option<String>,
    /// Base URL of the translate endpoint.
    pub endpoint: Option<String>,
}

/// HTTP binding settings in the `[server]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/gtx/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub gtx: GtxConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// CLI overrides; each takes precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub endpoint: Option<String>,
}

/// Translation settings after merging CLI, config file and built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub languages: LanguagePair,
    pub endpoint: String,
}

/// Resolves translation settings: CLI options, then config file, then defaults.
///
/// # Errors
///
/// Returns an error if a language code is unsupported or the endpoint is not
/// an absolute URL.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let defaults = LanguagePair::default();

    let from = options
        .from
        .as_ref()
        .or(config_file.gtx.from.as_ref())
        .cloned()
        .unwrap_or(defaults.from);

    let to = options
        .to
        .as_ref()
        .or(config_file.gtx.to.as_ref())
        .cloned()
        .unwrap_or(defaults.to);

    validate_language(&from).context("Invalid source language ('from')")?;
    validate_language(&to).context("Invalid target language ('to')")?;

    let endpoint = options
        .endpoint
        .as_ref()
        .or(config_file.gtx.endpoint.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    Url::parse(&endpoint).with_context(|| format!("Invalid endpoint URL: '{endpoint}'"))?;

    Ok(ResolvedConfig {
        languages: LanguagePair::new(from, to),
        endpoint,
    })
}

/// Resolves the address for `gtx serve`.
pub fn resolve_server_address(
    host: Option<&str>,
    port: Option<u16>,
    config_file: &ConfigFile,
) -> (String, u16) {
    let host = host
        .or(config_file.server.host.as_deref())
        .unwrap_or(DEFAULT_HOST)
        .to_string();
    let port = port.or(config_file.server.port).unwrap_or(DEFAULT_PORT);
    (host, port)
}

/// Manages loading and saving the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for `$XDG_CONFIG_HOME/gtx/config.toml`
    /// or `~/.config/gtx/config.toml`.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a manager for an explicit config file path.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        match fs::metadata(&self.config_path) {
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.config_path.display(), "no config file, using defaults");
                Ok(ConfigFile::default())
            }
            _ => self.load(),
        }
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
        atomic_write(&self.config_path, &contents)
    }
}
