//! Error types for the KPI schedule API client.

use thiserror::Error;

/// Errors that can occur while talking to the schedule service.
///
/// Any error aborts the whole in-flight request batch; there is no partial
/// success and no retry below the facade boundary.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// The response declared a content type other than `application/json`.
    #[error("wrong response Content-Type, expected '{expected}', but received '{actual}'")]
    ContentType {
        /// Media type required by the response contract.
        expected: &'static str,
        /// Media type the server actually declared.
        actual: String,
    },

    /// Connection, DNS, or timeout failure in the HTTP layer.
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// A required numeric resource ID was not usable for URL substitution.
    #[error("invalid endpoint argument: {0}")]
    InvalidArgument(String),

    /// The body was not valid JSON despite the content-type check passing.
    #[error("JSON decoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// URL construction failed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}
