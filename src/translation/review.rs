//! Translation of user reviews.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{LanguagePair, TranslateError, TranslationClient};

/// A user review. Only `comment` is interpreted; every other field is kept
/// as-is and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserReview {
    pub comment: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl UserReview {
    pub fn new(comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
            fields: Map::new(),
        }
    }
}

/// Returns `review` with its comment replaced by its translation.
///
/// On failure the review is dropped and the error returned; there is no
/// partially translated result.
pub async fn translate_review(
    client: &TranslationClient,
    mut review: UserReview,
    languages: &LanguagePair,
) -> Result<UserReview, TranslateError> {
    review.comment = client.translate_text(&review.comment, languages).await?;
    Ok(review)
}
