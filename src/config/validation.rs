//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that the base URL parses and can resolve relative references
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MatchOptions → Result<(), Vec<ValidationError>>
//! - Runs before options are accepted by a `Matcher`

use thiserror::Error;
use url::Url;

use crate::config::schema::MatchOptions;

/// A semantic problem with otherwise well-formed options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("base-url `{value}` is not a valid URL: {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[error("base-url `{0}` cannot be used as a base for relative references")]
    BaseUrlCannotBeABase(String),

    #[error("base-url `{0}` must not carry a query or fragment")]
    BaseUrlHasComponents(String),
}

/// Validates options, collecting every problem found.
pub fn validate_options(options: &MatchOptions) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(base) = &options.base_url {
        match Url::parse(base) {
            Ok(url) => {
                if url.cannot_be_a_base() {
                    errors.push(ValidationError::BaseUrlCannotBeABase(base.clone()));
                }
                if url.query().is_some() || url.fragment().is_some() {
                    errors.push(ValidationError::BaseUrlHasComponents(base.clone()));
                }
            }
            Err(e) => errors.push(ValidationError::InvalidBaseUrl {
                value: base.clone(),
                reason: e.to_string(),
            }),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
