//! Pattern segments.

use std::fmt;

use crate::pattern::field::{FieldKind, FieldRef};

/// One atomic unit of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment<F> {
    /// Text that must appear verbatim at this position.
    Literal(String),
    /// Placeholder bound to a scalar field.
    Field(F),
    /// Placeholder bound to a list field; the capture is split on the separator.
    FieldList(F, char),
}

impl<F: FieldRef> Segment<F> {
    pub fn is_placeholder(&self) -> bool {
        !matches!(self, Segment::Literal(_))
    }

    /// Field targeted by this segment, if it is a placeholder.
    pub fn field(&self) -> Option<&F> {
        match self {
            Segment::Literal(_) => None,
            Segment::Field(field) | Segment::FieldList(field, _) => Some(field),
        }
    }

    /// Kind of value this placeholder binds.
    pub fn placeholder_kind(&self) -> Option<FieldKind> {
        match self {
            Segment::Literal(_) => None,
            Segment::Field(_) => Some(FieldKind::Scalar),
            Segment::FieldList(..) => Some(FieldKind::List),
        }
    }
}

/// Renders the segment in template syntax.
impl<F: FieldRef> fmt::Display for Segment<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(text) => {
                for c in text.chars() {
                    match c {
                        '{' => f.write_str("{{")?,
                        '}' => f.write_str("}}")?,
                        _ => write!(f, "{}", c)?,
                    }
                }
                Ok(())
            }
            Segment::Field(field) => write!(f, "{{{}}}", field.name()),
            Segment::FieldList(field, separator) => {
                write!(f, "{{{}|{}}}", field.name(), separator)
            }
        }
    }
}
