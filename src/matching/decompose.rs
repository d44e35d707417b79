//! URL decomposition.
//!
//! # Responsibilities
//! - Parse the input as an absolute URL (or relative to a configured base)
//! - Expose path, query pairs and fragment
//! - Assemble the text a pattern is aligned against
//!
//! # Design Decisions
//! - The path is the serialized character sequence after the authority,
//!   not a list of segments; pattern literals may span slashes
//! - Everything stays percent-encoded here; decoding happens per capture
//! - Query and fragment are only part of the subject when the pattern
//!   addresses them

use std::ops::Range;

use url::Url;

use crate::matching::error::{MatchError, MatchResult};

/// A successfully parsed URL.
#[derive(Debug, Clone)]
pub struct ParsedUrl {
    url: Url,
}

/// The text a pattern is aligned against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub text: String,
    /// Byte range of the query text (after `?`) within `text`.
    pub query: Option<Range<usize>>,
    pub escaping: Escaping,
}

/// Scheme-dependent rules the parser used when escaping the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Escaping {
    /// `http`, `https`, `ws`, `wss`, `ftp` or `file`.
    pub special: bool,
    /// The URL cannot be a base (e.g. `mailto:`), so its path is opaque.
    pub opaque_path: bool,
}

impl Escaping {
    pub fn of(url: &Url) -> Self {
        Self {
            special: matches!(url.scheme(), "http" | "https" | "ws" | "wss" | "ftp" | "file"),
            opaque_path: url.cannot_be_a_base(),
        }
    }
}

impl ParsedUrl {
    /// Parses `input`, resolving relative references against `base` when given.
    pub fn parse(input: &str, base: Option<&Url>) -> MatchResult<Self> {
        let parsed = match base {
            Some(base) => base.join(input),
            None => Url::parse(input),
        };
        parsed
            .map(|url| Self { url })
            .map_err(|e| MatchError::MalformedUrl(e.to_string()))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn query(&self) -> Option<&str> {
        self.url.query()
    }

    /// Query as decoded key/value pairs, in order, duplicates kept.
    ///
    /// For callers inspecting a URL; matching aligns against the raw query text.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.url.fragment()
    }

    /// Builds the match subject from the path and the addressed components.
    pub fn subject(&self, with_query: bool, with_fragment: bool) -> Subject {
        let mut text = self.path().to_string();
        let mut query = None;

        if let Some(q) = self.query().filter(|_| with_query) {
            text.push('?');
            let start = text.len();
            text.push_str(q);
            query = Some(start..text.len());
        }
        if let Some(fragment) = self.fragment().filter(|_| with_fragment) {
            text.push('#');
            text.push_str(fragment);
        }

        Subject {
            text,
            query,
            escaping: Escaping::of(&self.url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decomposition() {
        let url = ParsedUrl::parse("https://example.com/a/b?x=1&y=2&x=3#top", None).unwrap();
        assert_eq!(url.path(), "/a/b");
        assert_eq!(url.query(), Some("x=1&y=2&x=3"));
        assert_eq!(
            url.query_pairs(),
            vec![
                ("x".to_string(), "1".to_string()),
                ("y".to_string(), "2".to_string()),
                ("x".to_string(), "3".to_string()),
            ]
        );
        assert_eq!(url.fragment(), Some("top"));
    }

    #[test]
    fn test_subject_components() {
        let url = ParsedUrl::parse("https://example.com/a?q=1#f", None).unwrap();

        assert_eq!(url.subject(false, false).text, "/a");

        let subject = url.subject(true, false);
        assert_eq!(subject.text, "/a?q=1");
        assert_eq!(subject.query, Some(3..6));

        assert_eq!(url.subject(true, true).text, "/a?q=1#f");
        assert_eq!(url.subject(false, true).text, "/a#f");
    }

    #[test]
    fn test_escaping_follows_scheme() {
        let url = ParsedUrl::parse("https://example.com/a", None).unwrap();
        assert_eq!(
            url.subject(false, false).escaping,
            Escaping {
                special: true,
                opaque_path: false,
            }
        );

        let url = ParsedUrl::parse("app://shop/a", None).unwrap();
        assert!(!url.subject(false, false).escaping.special);

        let url = ParsedUrl::parse("mailto:shop@example.com", None).unwrap();
        assert!(url.subject(false, false).escaping.opaque_path);
    }

    #[test]
    fn test_path_is_normalized_by_parser() {
        let url = ParsedUrl::parse("https://example.com/a/./b/../c d", None).unwrap();
        assert_eq!(url.path(), "/a/c%20d");
    }

    #[test]
    fn test_relative_requires_base() {
        let err = ParsedUrl::parse("/product/1", None).unwrap_err();
        assert!(matches!(err, MatchError::MalformedUrl(_)));

        let base = Url::parse("https://example.com/").unwrap();
        let url = ParsedUrl::parse("/product/1", Some(&base)).unwrap();
        assert_eq!(url.path(), "/product/1");
    }

    #[test]
    fn test_malformed() {
        for input in ["", "1http://example.com", "http://", "https://exa mple.com/"] {
            let err = ParsedUrl::parse(input, None).unwrap_err();
            assert!(matches!(err, MatchError::MalformedUrl(_)), "input: {input:?}");
        }
    }
}
