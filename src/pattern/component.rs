//! URL components reached by literal text.
//!
//! A pattern starts in the path. The first `?` seen in path text moves it
//! into the query, the first `#` in path or query text moves it into the
//! fragment. Placeholders never change the component.

/// Part of a URL a piece of literal text is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Component {
    #[default]
    Path,
    Query,
    Fragment,
}

/// A piece of literal text, tagged with where it lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralPart<'a> {
    Text(Component, &'a str),
    /// `?` or `#` opening the next component.
    Delimiter(char),
}

impl Component {
    /// Splits `text`, read while in `self`, at the delimiters that open later components.
    ///
    /// Returns the pieces in order and the component in force after the text.
    pub fn split(self, text: &str) -> (Vec<LiteralPart<'_>>, Component) {
        let mut parts = Vec::new();
        let mut component = self;
        let mut rest = text;

        loop {
            let found = match component {
                Component::Path => rest.find(['?', '#']),
                Component::Query => rest.find('#'),
                Component::Fragment => None,
            };
            let Some(i) = found else { break };

            if i > 0 {
                parts.push(LiteralPart::Text(component, &rest[..i]));
            }
            let (delimiter, next) = if rest[i..].starts_with('?') {
                ('?', Component::Query)
            } else {
                ('#', Component::Fragment)
            };
            parts.push(LiteralPart::Delimiter(delimiter));
            component = next;
            rest = &rest[i + 1..];
        }

        if !rest.is_empty() {
            parts.push(LiteralPart::Text(component, rest));
        }
        (parts, component)
    }
}
