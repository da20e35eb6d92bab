//! XDG-style path utilities for the configuration directory.
//!
//! XDG Base Directory conventions are preferred over OS-specific locations
//! so the config lives in the same place on Linux and macOS.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "gtx";

/// Returns the configuration directory for gtx.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/gtx` if `XDG_CONFIG_HOME` is set and non-empty
/// 2. `~/.config/gtx` otherwise
///
/// # Errors
///
/// Returns an error if neither `XDG_CONFIG_HOME` nor a home directory is available.
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }

    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(".config").join(APP_DIR))
}
