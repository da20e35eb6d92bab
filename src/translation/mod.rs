mod client;
mod error;
mod language;
mod response;
mod review;

pub use client::{DEFAULT_ENDPOINT, TranslationClient, TranslationRequest, build_url};
pub use error::TranslateError;
pub use language::{
    DEFAULT_FROM, DEFAULT_TO, LanguagePair, SUPPORTED_LANGUAGES, language_name, print_languages,
    validate_language,
};
pub use response::{PREFIX_LEN, extract_translation};
pub use review::{UserReview, translate_review};
