//! Subcommand implementations.

use anyhow::Result;

use crate::cli::args::LanguageArgs;
use crate::config::{ConfigFile, ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};

/// Configure command handler.
pub mod configure;

/// Review translation command handler.
pub mod review;

/// HTTP binding command handler.
pub mod serve;

/// Text translation command handler.
pub mod translate;

impl From<&LanguageArgs> for ResolveOptions {
    fn from(args: &LanguageArgs) -> Self {
        Self {
            from: args.from.clone(),
            to: args.to.clone(),
            endpoint: args.endpoint.clone(),
        }
    }
}

/// Loads the user's config file and merges `languages` over it.
fn load_settings(languages: &LanguageArgs) -> Result<(ResolvedConfig, ConfigFile)> {
    let config_file = ConfigManager::new()?.load_or_default()?;
    let resolved = resolve_config(&languages.into(), &config_file)?;
    Ok((resolved, config_file))
}
