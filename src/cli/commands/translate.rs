use anyhow::{Context, Result, bail};
use tracing::debug;

use super::load_settings;
use crate::cli::args::LanguageArgs;
use crate::input::InputReader;
use crate::translation::TranslationClient;
use crate::ui::Spinner;

pub struct TranslateOptions {
    pub file: Option<String>,
    pub text: Option<String>,
    pub languages: LanguageArgs,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let (config, _) = load_settings(&options.languages)?;

    let source_text = match options.text {
        Some(text) => text,
        None => InputReader::read_text(options.file.as_deref())?,
    };

    if source_text.trim().is_empty() {
        bail!("Error: Input is empty");
    }

    debug!(
        from = %config.languages.from,
        to = %config.languages.to,
        endpoint = %config.endpoint,
        "translating text"
    );

    let client = TranslationClient::new(config.endpoint);

    let spinner = Spinner::new("Translating...");
    let translated = client
        .translate_text(&source_text, &config.languages)
        .await
        .context("Translation failed");
    spinner.stop();

    println!("{}", translated?);
    Ok(())
}
