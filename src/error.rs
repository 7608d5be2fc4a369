//! Error type shared by every stage of the pipeline.
//!
//! Fetch and parse failures abort the whole run. Missing titles on individual
//! article nodes are not errors at all; the extractor yields `None` for them.

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The listing address could not be parsed as a URL.
    #[error("invalid url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be constructed (TLS backend, bad settings).
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport-level failure (DNS, TLS, timeout, body decoding).
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("request to {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// A tag selector could not be compiled, so the document cannot be walked.
    #[error("invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// The spreadsheet could not be written to disk.
    #[error("failed to write workbook {path}: {source}")]
    Export {
        path: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
