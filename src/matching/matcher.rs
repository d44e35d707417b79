//! Match entry points.
//!
//! # Responsibilities
//! - Decompose the URL and build the subject for a pattern
//! - Run alignment, staging and commit in order
//! - Report `MalformedUrl` or `NoMatch` without touching the record
//!
//! # Design Decisions
//! - A `Matcher` is immutable and can be shared across threads
//! - The base URL is parsed once, when the matcher is created
//! - Only a fully successful attempt writes to the record

use url::Url;

use crate::config::{validate_options, ConfigError, MatchOptions, ValidationError};
use crate::matching::align::align;
use crate::matching::binder::{commit, stage, Staged};
use crate::matching::decompose::ParsedUrl;
use crate::matching::error::{MatchError, MatchResult};
use crate::pattern::{FieldRef, Pattern, Record};

/// Matches URLs against patterns under a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    options: MatchOptions,
    base: Option<Url>,
}

impl Matcher {
    /// Validates `options` and prepares a matcher.
    pub fn new(options: MatchOptions) -> Result<Self, ConfigError> {
        validate_options(&options).map_err(ConfigError::Validation)?;

        let base = options
            .base_url
            .as_deref()
            .map(|base| {
                Url::parse(base).map_err(|e| {
                    ConfigError::Validation(vec![ValidationError::InvalidBaseUrl {
                        value: base.to_string(),
                        reason: e.to_string(),
                    }])
                })
            })
            .transpose()?;

        Ok(Self { options, base })
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Matches `url` against `pattern` and binds the captures into `record`.
    ///
    /// On error the record is left exactly as it was.
    pub fn match_url<R: Record>(
        &self,
        pattern: &Pattern<R::Field>,
        url: &str,
        record: &mut R,
    ) -> MatchResult<()> {
        let staged = self.bindings(pattern, url)?;
        let count = commit(record, staged);

        tracing::trace!(pattern = %pattern, url, bindings = count, "URL matched pattern");
        Ok(())
    }

    /// Runs a match attempt and returns the staged values without writing them.
    pub fn bindings<F: FieldRef>(&self, pattern: &Pattern<F>, url: &str) -> MatchResult<Staged<F>> {
        let parsed = ParsedUrl::parse(url, self.base.as_ref()).map_err(|e| {
            tracing::debug!(url, error = %e, "Rejected malformed URL");
            e
        })?;

        if self.options.strict_components && self.has_unaddressed_component(pattern, &parsed) {
            tracing::debug!(pattern = %pattern, url, "URL carries components the pattern does not address");
            return Err(MatchError::NoMatch);
        }

        let subject = parsed.subject(pattern.addresses_query(), pattern.addresses_fragment());
        let captures = align(pattern.segments(), &subject.text, subject.escaping).map_err(|mismatch| {
            tracing::debug!(pattern = %pattern, url, reason = %mismatch, "URL does not match pattern");
            MatchError::NoMatch
        })?;

        stage(&captures, &subject, &self.options)
    }

    /// Whether `url` fits `pattern`.
    pub fn is_match<F: FieldRef>(&self, pattern: &Pattern<F>, url: &str) -> bool {
        self.bindings(pattern, url).is_ok()
    }

    fn has_unaddressed_component<F: FieldRef>(&self, pattern: &Pattern<F>, url: &ParsedUrl) -> bool {
        let present = |component: Option<&str>| component.is_some_and(|c| !c.is_empty());
        (present(url.query()) && !pattern.addresses_query())
            || (present(url.fragment()) && !pattern.addresses_fragment())
    }
}

impl<F: FieldRef> Pattern<F> {
    /// Matches with default options. See [`Matcher::match_url`].
    pub fn match_url<R: Record<Field = F>>(&self, url: &str, record: &mut R) -> MatchResult<()> {
        Matcher::default().match_url(self, url, record)
    }
}

/// Matches `url` against `pattern` with default options.
pub fn match_url<R: Record>(pattern: &Pattern<R::Field>, url: &str, record: &mut R) -> MatchResult<()> {
    Matcher::default().match_url(pattern, url, record)
}
