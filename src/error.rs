//! Error types for the doctoc library.

use std::io;
use thiserror::Error;

/// Result type alias for doctoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during outline extraction.
///
/// Failures are scoped: [`Error::Layout`] degrades the whole document,
/// [`Error::Ocr`] skips a single page, [`Error::Schema`] drops a single
/// outline entry. None of them escape [`crate::OutlineExtractor::extract`].
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The layout provider failed to produce pages for a document.
    #[error("Layout extraction error: {0}")]
    Layout(String),

    /// Rasterization or text recognition failed for a specific page.
    #[error("OCR error on page {page}: {reason}")]
    Ocr {
        /// 1-based page number the failure occurred on.
        page: u32,
        /// Provider-reported reason.
        reason: String,
    },

    /// An outline entry failed required-field or range checks.
    #[error("Schema violation: {0}")]
    Schema(String),

    /// Error serializing the result (JSON output).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(err.to_string())
    }
}
