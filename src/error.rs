//! Error types for the `html_scrubber` crate.

/// All errors that can occur while configuring a scrubber or sanitizer.
///
/// Parsing and scrubbing themselves are infallible: the HTML parser recovers
/// from malformed markup instead of rejecting it, and the tree walk cannot
/// fail. What can go wrong is caller-supplied configuration.
#[derive(Debug, thiserror::Error)]
pub enum HtmlScrubberError {
    /// A tag or attribute name handed to an allow list is unusable as an
    /// HTML name (empty, or containing whitespace or markup delimiters).
    #[error("Invalid allow-list name: {0:?}")]
    InvalidName(String),
}

/// A type alias for `Result<T, HtmlScrubberError>`.
pub type Result<T> = std::result::Result<T, HtmlScrubberError>;
