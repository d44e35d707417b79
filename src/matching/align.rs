//! Structural alignment of a pattern against the match subject.
//!
//! # Responsibilities
//! - Anchor each literal at the cursor, or search for it after a placeholder
//! - Record the span each placeholder consumes
//! - Reject leftover text and unmatched literals
//!
//! # Design Decisions
//! - Single forward pass, no backtracking: O(pattern + subject)
//! - A literal after a placeholder binds at its leftmost occurrence,
//!   except the final segment, which must end the subject
//! - Literals are escaped the way the URL parser escapes the component
//!   they land in, so they compare against the subject byte for byte

use std::ops::Range;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use thiserror::Error;

use crate::matching::decompose::Escaping;
use crate::pattern::{Component, FieldRef, LiteralPart, Segment};

const FRAGMENT: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');
const PATH: &AsciiSet = &FRAGMENT.add(b'#').add(b'?').add(b'{').add(b'}');
const QUERY: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'#').add(b'<').add(b'>');
const SPECIAL_QUERY: &AsciiSet = &QUERY.add(b'\'');

/// Span of the subject consumed by one placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture<'p, F> {
    pub segment: &'p Segment<F>,
    pub span: Range<usize>,
}

/// Why alignment failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Mismatch {
    #[error("literal `{literal}` not found at byte {offset}")]
    Literal { literal: String, offset: usize },

    #[error("unmatched text from byte {offset}")]
    TrailingText { offset: usize },
}

/// Escapes literal text read while in `component`.
///
/// Returns the escaped text and the component in force after it.
pub(crate) fn encode_literal(
    text: &str,
    component: Component,
    escaping: Escaping,
) -> (String, Component) {
    let (parts, next) = component.split(text);
    let mut encoded = String::with_capacity(text.len());

    for part in parts {
        match part {
            LiteralPart::Delimiter(c) => encoded.push(c),
            LiteralPart::Text(Component::Path, text) if escaping.opaque_path => {
                encoded.extend(utf8_percent_encode(text, CONTROLS));
            }
            LiteralPart::Text(Component::Path, text) if escaping.special => {
                // special schemes treat `\` as a path separator
                let text = text.replace('\\', "/");
                encoded.extend(utf8_percent_encode(&text, PATH));
            }
            LiteralPart::Text(Component::Path, text) => {
                encoded.extend(utf8_percent_encode(text, PATH));
            }
            LiteralPart::Text(Component::Query, text) => {
                let set = if escaping.special { SPECIAL_QUERY } else { QUERY };
                encoded.extend(utf8_percent_encode(text, set));
            }
            LiteralPart::Text(Component::Fragment, text) => {
                encoded.extend(utf8_percent_encode(text, FRAGMENT));
            }
        }
    }
    (encoded, next)
}

/// Aligns `segments` against `subject`, returning every placeholder capture in order.
pub fn align<'p, F: FieldRef>(
    segments: &'p [Segment<F>],
    subject: &str,
    escaping: Escaping,
) -> Result<Vec<Capture<'p, F>>, Mismatch> {
    let mut captures = Vec::new();
    let mut cursor = 0;
    let mut component = Component::Path;
    let mut pending: Option<&'p Segment<F>> = None;
    let last = segments.len().saturating_sub(1);

    for (index, segment) in segments.iter().enumerate() {
        let Segment::Literal(text) = segment else {
            pending = Some(segment);
            continue;
        };

        let (literal, next) = encode_literal(text, component, escaping);
        component = next;
        let rest = &subject[cursor..];
        let start = match pending.take() {
            None => rest.starts_with(literal.as_str()).then_some(cursor),
            Some(placeholder) => {
                let found = if index == last {
                    rest.ends_with(literal.as_str())
                        .then(|| subject.len() - literal.len())
                } else {
                    rest.find(literal.as_str()).map(|i| cursor + i)
                };
                if let Some(start) = found {
                    captures.push(Capture {
                        segment: placeholder,
                        span: cursor..start,
                    });
                }
                found
            }
        };

        let start = start.ok_or_else(|| Mismatch::Literal {
            literal: literal.clone(),
            offset: cursor,
        })?;
        cursor = start + literal.len();
    }

    if let Some(placeholder) = pending {
        captures.push(Capture {
            segment: placeholder,
            span: cursor..subject.len(),
        });
        cursor = subject.len();
    }

    if cursor != subject.len() {
        return Err(Mismatch::TrailingText { offset: cursor });
    }
    Ok(captures)
}
