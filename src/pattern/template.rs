//! Template string parsing.
//!
//! # Grammar
//! ```text
//! template    = *( literal / escape / placeholder )
//! escape      = "{{" / "}}"
//! placeholder = "{" name [ "|" separator ] "}"
//! ```
//!
//! `{id}` binds a scalar field, `{tags|,}` a list field split on `,`.
//! Every piece is fed to [`PatternBuilder`], so parsed templates obey the
//! same rules as hand-built patterns.

use crate::pattern::builder::{Pattern, PatternBuilder};
use crate::pattern::error::TemplateError;
use crate::pattern::field::FieldRef;

/// Parses a template into a pattern whose fields resolve through `F::from_name`.
pub fn parse<F: FieldRef>(input: &str) -> Result<Pattern<F>, TemplateError> {
    let mut builder = PatternBuilder::new();
    let mut literal = String::new();
    let mut rest = input;
    let mut offset = 0;

    while let Some(i) = rest.find(['{', '}']) {
        literal.push_str(&rest[..i]);
        let brace = if rest[i..].starts_with('{') { '{' } else { '}' };
        let after = &rest[i + 1..];

        if after.starts_with(brace) {
            literal.push(brace);
            offset += i + 2;
            rest = &rest[i + 2..];
            continue;
        }
        if brace == '}' {
            return Err(TemplateError::UnmatchedBrace(offset + i));
        }

        let close = after
            .find('}')
            .ok_or(TemplateError::UnclosedPlaceholder(offset + i))?;
        builder.append_literal(&literal);
        literal.clear();
        append_placeholder(&mut builder, &after[..close], offset + i)?;

        let consumed = i + 1 + close + 1;
        offset += consumed;
        rest = &rest[consumed..];
    }

    literal.push_str(rest);
    builder.append_literal(&literal);
    Ok(builder.build())
}

fn append_placeholder<F: FieldRef>(
    builder: &mut PatternBuilder<F>,
    body: &str,
    offset: usize,
) -> Result<(), TemplateError> {
    let (name, separator) = match body.split_once('|') {
        Some((name, separator)) => (name, Some(separator)),
        None => (body, None),
    };
    if name.is_empty() || name.contains('{') {
        return Err(TemplateError::EmptyName(offset));
    }

    let field = F::from_name(name).ok_or_else(|| TemplateError::UnknownField(name.to_string()))?;

    match separator {
        None => {
            builder.append_field(field)?;
        }
        Some(separator) => {
            let mut chars = separator.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    builder.append_field_list(field, c)?;
                }
                _ => {
                    return Err(TemplateError::InvalidSeparator {
                        field: name.to_string(),
                        separator: separator.to_string(),
                    })
                }
            }
        }
    }
    Ok(())
}
