use anyhow::{Context, Result};

use super::load_settings;
use crate::cli::args::LanguageArgs;
use crate::input::InputReader;
use crate::translation::{TranslationClient, UserReview, translate_review};
use crate::ui::Spinner;

pub struct ReviewOptions {
    pub file: Option<String>,
    pub languages: LanguageArgs,
}

/// Reads a review as JSON, translates its comment and prints the review.
pub async fn run_review(options: ReviewOptions) -> Result<()> {
    let (config, _) = load_settings(&options.languages)?;

    let input = InputReader::read(options.file.as_deref())?;
    let review = parse_review(&input)?;

    let client = TranslationClient::new(config.endpoint);

    let spinner = Spinner::new("Translating review...");
    let translated = translate_review(&client, review, &config.languages)
        .await
        .context("Review translation failed");
    spinner.stop();

    let json = serde_json::to_string_pretty(&translated?).context("Failed to serialize review")?;
    println!("{json}");
    Ok(())
}

fn parse_review(input: &str) -> Result<UserReview> {
    serde_json::from_str(input)
        .context("Input is not a review object (a JSON object with a string \"comment\" field)")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_review() {
        let review = parse_review(r#"{"comment":"great food","stars":5}"#).unwrap();
        assert_eq!(review.comment, "great food");
        assert_eq!(review.fields["stars"], 5);
    }

    #[test]
    fn test_parse_review_without_comment() {
        let err = parse_review(r#"{"stars":5}"#).unwrap_err();
        assert!(err.to_string().contains("\"comment\""));
    }

    #[test]
    fn test_parse_review_not_json() {
        assert!(parse_review("great food").is_err());
    }
}
