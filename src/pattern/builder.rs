//! Incremental pattern assembly and validation.
//!
//! # Responsibilities
//! - Append literal and placeholder segments left to right
//! - Reject adjacent placeholders and duplicate fields
//! - Freeze the result as an immutable `Pattern`
//!
//! # Design Decisions
//! - Checks run in a fixed order: adjacency, duplicates, kind
//! - A rejected append leaves the builder unchanged
//! - Empty literals are dropped, adjacent literals merged

use std::fmt;
use std::str::FromStr;

use crate::pattern::component::{Component, LiteralPart};
use crate::pattern::error::{PatternError, PatternResult, TemplateError};
use crate::pattern::field::{FieldKind, FieldRef};
use crate::pattern::segment::Segment;
use crate::pattern::template;

/// Builds a [`Pattern`] one segment at a time.
#[derive(Debug, Clone)]
pub struct PatternBuilder<F> {
    segments: Vec<Segment<F>>,
}

impl<F> Default for PatternBuilder<F> {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
        }
    }
}

impl<F: FieldRef> PatternBuilder<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends literal text. Empty text is a no-op.
    pub fn append_literal(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        match self.segments.last_mut() {
            Some(Segment::Literal(previous)) => previous.push_str(text),
            _ => self.segments.push(Segment::Literal(text.to_string())),
        }
        self
    }

    /// Appends a scalar placeholder.
    pub fn append_field(&mut self, field: F) -> PatternResult<&mut Self> {
        self.check_placeholder(&field, FieldKind::Scalar)?;
        self.segments.push(Segment::Field(field));
        Ok(self)
    }

    /// Appends a list placeholder whose capture is split on `separator`.
    pub fn append_field_list(&mut self, field: F, separator: char) -> PatternResult<&mut Self> {
        self.check_placeholder(&field, FieldKind::List)?;
        self.segments.push(Segment::FieldList(field, separator));
        Ok(self)
    }

    /// Fluent form of [`append_literal`](Self::append_literal).
    pub fn literal(mut self, text: &str) -> Self {
        self.append_literal(text);
        self
    }

    /// Fluent form of [`append_field`](Self::append_field).
    pub fn field(mut self, field: F) -> PatternResult<Self> {
        self.append_field(field)?;
        Ok(self)
    }

    /// Fluent form of [`append_field_list`](Self::append_field_list).
    pub fn field_list(mut self, field: F, separator: char) -> PatternResult<Self> {
        self.append_field_list(field, separator)?;
        Ok(self)
    }

    pub fn build(self) -> Pattern<F> {
        let (addresses_query, addresses_fragment) = self.delimiters();
        Pattern {
            segments: self.segments,
            addresses_query,
            addresses_fragment,
        }
    }

    fn check_placeholder(&self, field: &F, used: FieldKind) -> PatternResult<()> {
        if let Some(previous) = self.segments.last().and_then(Segment::field) {
            tracing::debug!(
                previous = previous.name(),
                new = field.name(),
                "Rejected adjacent placeholders"
            );
            return Err(PatternError::ConsecutivePlaceholders {
                previous: previous.name().to_string(),
                new: field.name().to_string(),
            });
        }

        if self.segments.iter().filter_map(Segment::field).any(|f| f == field) {
            tracing::debug!(field = field.name(), "Rejected duplicate field");
            return Err(PatternError::DuplicateField(field.name().to_string()));
        }

        match field.kind() {
            Some(declared) if declared != used => Err(PatternError::KindMismatch {
                field: field.name().to_string(),
                declared,
                used,
            }),
            _ => Ok(()),
        }
    }

    /// Whether literal text opens the query and the fragment.
    fn delimiters(&self) -> (bool, bool) {
        let mut component = Component::Path;
        let (mut query, mut fragment) = (false, false);

        for segment in &self.segments {
            let Segment::Literal(text) = segment else {
                continue;
            };
            let (parts, next) = component.split(text);
            for part in parts {
                match part {
                    LiteralPart::Delimiter('?') => query = true,
                    LiteralPart::Delimiter(_) => fragment = true,
                    LiteralPart::Text(..) => {}
                }
            }
            component = next;
        }
        (query, fragment)
    }
}

/// An immutable, validated URL shape.
///
/// Compared and hashed by its segment sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern<F> {
    segments: Vec<Segment<F>>,
    addresses_query: bool,
    addresses_fragment: bool,
}

impl<F: FieldRef> Pattern<F> {
    pub fn builder() -> PatternBuilder<F> {
        PatternBuilder::new()
    }

    /// Compiles a template such as `/product/{id}?tags={tags|,}`.
    pub fn parse(input: &str) -> Result<Self, TemplateError> {
        template::parse(input)
    }

    pub fn segments(&self) -> &[Segment<F>] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Fields targeted by this pattern, in order.
    pub fn fields(&self) -> impl Iterator<Item = &F> {
        self.segments.iter().filter_map(Segment::field)
    }

    /// Whether a literal opens the query with a `?` in path text.
    pub fn addresses_query(&self) -> bool {
        self.addresses_query
    }

    /// Whether a literal opens the fragment with a `#`.
    pub fn addresses_fragment(&self) -> bool {
        self.addresses_fragment
    }
}

impl<F: FieldRef> FromStr for Pattern<F> {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Canonical template form. Parses back to an equal pattern as long as
/// field names and separators contain no braces.
impl<F: FieldRef> fmt::Display for Pattern<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.segments.iter().try_for_each(|segment| write!(f, "{}", segment))
    }
}
