//! # gtx - Google gtx translation CLI
//!
//! `gtx` translates text, and the `comment` of user reviews, through the
//! public `translate.googleapis.com/translate_a/single?client=gtx` endpoint.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a string (en -> es by default)
//! gtx --text "hello"
//!
//! # Translate from stdin with another language pair
//! echo "good morning" | gtx --from en --to fr
//!
//! # Translate the comment of a review
//! echo '{"comment":"hello","rating":5}' | gtx review
//!
//! # Expose /translate and /translateReview over HTTP
//! gtx serve --port 8080
//! ```
//!
//! ## Library use
//!
//! ```no_run
//! use gtx_cli::translation::{LanguagePair, TranslationClient, DEFAULT_ENDPOINT};
//!
//! # async fn demo() -> Result<(), gtx_cli::translation::TranslateError> {
//! let client = TranslationClient::new(DEFAULT_ENDPOINT);
//! let hola = client.translate_text("hello", &LanguagePair::default()).await?;
//! assert_eq!(hola, "hola");
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Defaults are read from `~/.config/gtx/config.toml`:
//!
//! ```toml
//! [gtx]
//! from = "en"
//! to = "es"
//! endpoint = "https://translate.googleapis.com"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input reading from files and stdin.
pub mod input;

/// Output configuration (quiet mode, colors) and diagnostics logging.
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// HTTP binding for the translate operations.
pub mod server;

/// Translation client, response parsing and review translation.
pub mod translation;

/// Terminal UI components (spinner, colors, prompts).
pub mod ui;
