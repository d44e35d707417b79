//! Configuration schema definitions.
//!
//! This module defines the options that shape how a URL is matched.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Options applied to every match attempt.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MatchOptions {
    /// What an empty capture means for a scalar placeholder.
    pub empty_field: EmptyField,

    /// What an empty capture means for a list placeholder.
    pub empty_list: EmptyList,

    /// Fail when the URL carries a query or fragment the pattern does not address.
    pub strict_components: bool,

    /// Decode `+` as a space in captures taken from the query.
    pub query_plus_as_space: bool,

    /// Base for resolving relative references (e.g., "https://example.com/").
    /// Without it only absolute URLs are accepted.
    pub base_url: Option<String>,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            empty_field: EmptyField::NoMatch,
            empty_list: EmptyList::Empty,
            strict_components: false,
            query_plus_as_space: false,
            base_url: None,
        }
    }
}

/// Convention for a scalar placeholder that captured no text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyField {
    /// The attempt fails with `NoMatch`.
    #[default]
    NoMatch,
    /// The field is set to the empty string.
    Bind,
}

/// Convention for a list placeholder that captured no text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyList {
    /// The field is set to an empty list.
    #[default]
    Empty,
    /// The field is left untouched.
    Unset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = MatchOptions::default();
        assert_eq!(options.empty_field, EmptyField::NoMatch);
        assert_eq!(options.empty_list, EmptyList::Empty);
        assert!(!options.strict_components);
        assert!(!options.query_plus_as_space);
        assert!(options.base_url.is_none());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let options: MatchOptions = toml::from_str("empty-list = \"unset\"").unwrap();
        assert_eq!(options.empty_list, EmptyList::Unset);
        assert_eq!(options.empty_field, EmptyField::NoMatch);
    }
}
