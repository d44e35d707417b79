//! Build-time error definitions.

use thiserror::Error;

use crate::pattern::field::FieldKind;

/// Structural errors raised while a pattern is being assembled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A placeholder was appended directly after another placeholder.
    #[error("placeholder `{new}` directly follows placeholder `{previous}` with no literal text between them")]
    ConsecutivePlaceholders { previous: String, new: String },

    /// The field is already targeted by another placeholder in this pattern.
    #[error("field `{0}` is already bound by this pattern")]
    DuplicateField(String),

    /// The field declares a kind that does not fit the placeholder.
    #[error("field `{field}` is a {declared} field but was used as a {used} placeholder")]
    KindMismatch {
        field: String,
        declared: FieldKind,
        used: FieldKind,
    },
}

/// Errors raised while parsing a template string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A `{` was never closed.
    #[error("unclosed placeholder starting at byte {0}")]
    UnclosedPlaceholder(usize),

    /// A lone `}` outside a placeholder.
    #[error("unmatched `}}` at byte {0}")]
    UnmatchedBrace(usize),

    /// A placeholder without a field name, or a `{` inside a placeholder.
    #[error("empty or invalid placeholder name at byte {0}")]
    EmptyName(usize),

    /// The list separator is not exactly one character.
    #[error("list separator for `{field}` must be exactly one character, got `{separator}`")]
    InvalidSeparator { field: String, separator: String },

    /// The record type has no field with this name.
    #[error("unknown field `{0}`")]
    UnknownField(String),

    /// The parsed pieces failed pattern validation.
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// Result type for pattern construction.
pub type PatternResult<T> = Result<T, PatternError>;
