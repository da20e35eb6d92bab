//! Extraction of the translated sentence from a `translate_a/single` body.
//!
//! The endpoint answers with an undocumented nested array serialized as text,
//! e.g. `[[["hola","hello",null,null,10]],null,"en",...]`. Only the first
//! element of the first segment is of interest. Extraction is deliberately
//! offset based: everything between the fixed `[["` prefix and the first comma,
//! with double quotes stripped.

use super::TranslateError;

/// Length of the `[["` envelope prefix that precedes the translated text.
pub const PREFIX_LEN: usize = 3;

/// Extracts the translated text from a raw response body.
///
/// A translation that itself contains a comma is cut short at that comma.
///
/// # Errors
///
/// Returns [`TranslateError::MalformedResponse`] if the body has no comma, if
/// the first comma falls inside the prefix, or if the prefix is not ASCII.
pub fn extract_translation(body: &str) -> Result<String, TranslateError> {
    let malformed = |reason| TranslateError::MalformedResponse {
        reason,
        body: body.to_string(),
    };

    let comma = body.find(',').ok_or_else(|| malformed("no comma found"))?;

    if comma < PREFIX_LEN {
        return Err(malformed("comma found inside the envelope prefix"));
    }

    let segment = body
        .get(PREFIX_LEN..comma)
        .ok_or_else(|| malformed("envelope prefix is not ASCII"))?;

    Ok(segment.replace('"', ""))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_translation() {
        let body = r#"[["hola","hello",null,null]]"#;
        assert_eq!(extract_translation(body).unwrap(), "hola");
    }

    #[test]
    fn test_extract_from_full_envelope() {
        let body = r#"[[["Buenos días","Good morning",null,null,10]],null,"en",null,null,null,1]"#;
        // Three brackets are skipped here, the leading quote is stripped.
        assert_eq!(extract_translation(body).unwrap(), "Buenos días");
    }

    #[test]
    fn test_extract_unicode_translation() {
        let body = r#"[["こんにちは","hello",null,null]]"#;
        assert_eq!(extract_translation(body).unwrap(), "こんにちは");
    }

    #[test]
    fn test_extract_strips_inner_quotes() {
        let body = r#"[["dijo \"hola\"","he said \"hello\"",null]]"#;
        assert_eq!(extract_translation(body).unwrap(), r"dijo \hola\");
    }

    #[test]
    fn test_extract_truncates_at_comma_in_translation() {
        // Known limitation: the first comma ends the translation.
        let body = r#"[["hola, mundo","hello, world",null]]"#;
        assert_eq!(extract_translation(body).unwrap(), "hola");
    }

    #[test]
    fn test_extract_comma_right_after_prefix_is_empty() {
        assert_eq!(extract_translation(r#"[["," "]]"#).unwrap(), "");
    }

    #[test]
    fn test_extract_no_comma() {
        let err = extract_translation(r#"[["hola"]]"#).unwrap_err();
        assert!(matches!(err, TranslateError::MalformedResponse { .. }));
        assert!(err.to_string().contains("no comma"));
    }

    #[test]
    fn test_extract_empty_body() {
        assert!(matches!(
            extract_translation(""),
            Err(TranslateError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_extract_comma_inside_prefix() {
        let err = extract_translation("[,]").unwrap_err();
        assert!(err.to_string().contains("inside the envelope prefix"));
    }

    #[test]
    fn test_extract_non_ascii_prefix() {
        let err = extract_translation("ééé,").unwrap_err();
        assert!(err.to_string().contains("not ASCII"));
    }
}
