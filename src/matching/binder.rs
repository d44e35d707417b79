//! Value extraction and all-or-nothing assignment.
//!
//! # Responsibilities
//! - Turn raw captures into values (percent-decoding, list splitting)
//! - Apply the empty-capture conventions
//! - Commit staged values to the record only after every capture succeeded
//!
//! # Design Decisions
//! - Lists are split on the raw text, so an encoded separator stays in its part
//! - `+` is replaced before percent-decoding, so `%2B` still decodes to `+`
//! - Staging owns the values; the record is untouched until `commit`

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use crate::config::{EmptyField, EmptyList, MatchOptions};
use crate::matching::align::Capture;
use crate::matching::decompose::Subject;
use crate::matching::error::{MatchError, MatchResult};
use crate::pattern::{FieldRef, Record, Segment, Value};

/// Values waiting to be written, in pattern order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Staged<F> {
    bindings: Vec<(F, Value)>,
}

impl<F> Staged<F> {
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&F, &Value)> {
        self.bindings.iter().map(|(field, value)| (field, value))
    }

    pub fn into_vec(self) -> Vec<(F, Value)> {
        self.bindings
    }
}

/// Extracts a value for every capture, or fails without side effects.
pub fn stage<F: FieldRef>(
    captures: &[Capture<'_, F>],
    subject: &Subject,
    options: &MatchOptions,
) -> MatchResult<Staged<F>> {
    let mut bindings = Vec::with_capacity(captures.len());

    for capture in captures {
        let raw = &subject.text[capture.span.clone()];
        let plus_as_space = options.query_plus_as_space
            && subject
                .query
                .as_ref()
                .is_some_and(|q| q.start <= capture.span.start && capture.span.end <= q.end);

        match capture.segment {
            Segment::Field(field) => {
                if raw.is_empty() && options.empty_field == EmptyField::NoMatch {
                    tracing::debug!(field = field.name(), "Empty capture for scalar field");
                    return Err(MatchError::NoMatch);
                }
                let value = decode(raw, plus_as_space)?;
                bindings.push((field.clone(), Value::Text(value)));
            }
            Segment::FieldList(field, separator) => {
                if raw.is_empty() {
                    if options.empty_list == EmptyList::Empty {
                        bindings.push((field.clone(), Value::List(Vec::new())));
                    }
                    continue;
                }
                let items = raw
                    .split(*separator)
                    .map(|part| decode(part, plus_as_space))
                    .collect::<MatchResult<Vec<_>>>()?;
                bindings.push((field.clone(), Value::List(items)));
            }
            Segment::Literal(_) => {}
        }
    }

    Ok(Staged { bindings })
}

/// Writes every staged value into the record.
pub fn commit<R: Record>(record: &mut R, staged: Staged<R::Field>) -> usize {
    let count = staged.len();
    for (field, value) in staged.bindings {
        record.assign(&field, value);
    }
    count
}

fn decode(raw: &str, plus_as_space: bool) -> MatchResult<String> {
    let text: Cow<'_, str> = if plus_as_space && raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };

    percent_decode_str(&text)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|e| {
            MatchError::MalformedUrl(format!("capture `{}` does not decode to UTF-8: {}", raw, e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::align::align;
    use crate::matching::decompose::Escaping;
    use crate::pattern::{Captures, Pattern};

    fn stage_from(
        template: &str,
        subject: Subject,
        options: &MatchOptions,
    ) -> MatchResult<Vec<(String, Value)>> {
        let pattern: Pattern<String> = Pattern::parse(template).unwrap();
        let captures = align(pattern.segments(), &subject.text, subject.escaping).unwrap();
        stage(&captures, &subject, options).map(Staged::into_vec)
    }

    fn path(text: &str) -> Subject {
        Subject {
            text: text.to_string(),
            query: None,
            escaping: Escaping::default(),
        }
    }

    #[test]
    fn test_decodes_field() {
        let staged = stage_from("/u/{name}", path("/u/J%C3%BCrgen%20M"), &MatchOptions::default()).unwrap();
        assert_eq!(staged, vec![("name".to_string(), Value::Text("Jürgen M".into()))]);
    }

    #[test]
    fn test_list_split_before_decode() {
        let staged = stage_from("/ids={ids|,}", path("/ids=1,2%2C5,3"), &MatchOptions::default()).unwrap();
        assert_eq!(
            staged,
            vec![(
                "ids".to_string(),
                Value::List(vec!["1".into(), "2,5".into(), "3".into()])
            )]
        );
    }

    #[test]
    fn test_empty_field_conventions() {
        let options = MatchOptions::default();
        assert_eq!(
            stage_from("/p/{id}", path("/p/"), &options).unwrap_err(),
            MatchError::NoMatch
        );

        let options = MatchOptions {
            empty_field: EmptyField::Bind,
            ..MatchOptions::default()
        };
        assert_eq!(
            stage_from("/p/{id}", path("/p/"), &options).unwrap(),
            vec![("id".to_string(), Value::Text(String::new()))]
        );
    }

    #[test]
    fn test_empty_list_conventions() {
        let options = MatchOptions::default();
        assert_eq!(
            stage_from("/ids={ids|,}", path("/ids="), &options).unwrap(),
            vec![("ids".to_string(), Value::List(Vec::new()))]
        );

        let options = MatchOptions {
            empty_list: EmptyList::Unset,
            ..MatchOptions::default()
        };
        assert!(stage_from("/ids={ids|,}", path("/ids="), &options).unwrap().is_empty());
    }

    #[test]
    fn test_plus_only_in_query() {
        let subject = Subject {
            text: "/a+b?q=c+d%2B".to_string(),
            query: Some(5..13),
            escaping: Escaping::default(),
        };
        let options = MatchOptions {
            query_plus_as_space: true,
            ..MatchOptions::default()
        };
        assert_eq!(
            stage_from("/{p}?q={q}", subject, &options).unwrap(),
            vec![
                ("p".to_string(), Value::Text("a+b".into())),
                ("q".to_string(), Value::Text("c d+".into())),
            ]
        );
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let err = stage_from("/p/{id}", path("/p/%FF"), &MatchOptions::default()).unwrap_err();
        assert!(matches!(err, MatchError::MalformedUrl(_)));
    }

    #[test]
    fn test_commit_writes_all() {
        let staged = Staged {
            bindings: vec![
                ("a".to_string(), Value::Text("1".into())),
                ("b".to_string(), Value::List(vec!["x".into()])),
            ],
        };
        let mut captures = Captures::new();
        assert_eq!(commit(&mut captures, staged), 2);
        assert_eq!(captures.text("a"), Some("1"));
        assert_eq!(captures.list("b"), Some(&["x".to_string()][..]));
    }
}
