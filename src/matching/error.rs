//! Match-time error definitions.

use thiserror::Error;

/// Terminal outcomes of a failed match attempt.
///
/// Neither variant leaves the destination record modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The input could not be parsed as a URL, or a capture did not decode.
    #[error("malformed URL: {0}")]
    MalformedUrl(String),

    /// The URL is well formed but does not fit the pattern.
    #[error("URL does not match the pattern")]
    NoMatch,
}

impl MatchError {
    pub fn is_no_match(&self) -> bool {
        matches!(self, MatchError::NoMatch)
    }
}

/// Result type for match attempts.
pub type MatchResult<T> = Result<T, MatchError>;
