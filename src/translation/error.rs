//! Errors returned by the translation client.

use reqwest::StatusCode;
use thiserror::Error;

/// Every way a single translation call can fail.
///
/// None of these are retried; they propagate straight to the caller.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The configured endpoint base could not be turned into a request URL.
    #[error("Invalid translation endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    /// DNS, connection or transport failure, including failure to read the body.
    #[error("Failed to reach translation endpoint: {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status.
    #[error("Translation request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The body did not have the `[["<translation>",...` shape.
    #[error("Malformed translation response ({reason}): {body}")]
    MalformedResponse { reason: &'static str, body: String },
}
