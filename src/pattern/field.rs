//! Field references and destination records.
//!
//! A destination record is any caller-owned type implementing [`Record`].
//! Its fields are named by a separate identifier type implementing
//! [`FieldRef`], usually a fieldless enum with one variant per field.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Whether a field holds one string or a list of strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Scalar,
    List,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Scalar => f.write_str("scalar"),
            FieldKind::List => f.write_str("list"),
        }
    }
}

/// Identifier of one writable field on a destination record.
///
/// Equality and hashing decide field uniqueness within a pattern.
pub trait FieldRef: Clone + Eq + Hash + fmt::Debug {
    /// Name used in templates and in rendered patterns.
    fn name(&self) -> &str;

    /// Resolves a template placeholder name.
    fn from_name(name: &str) -> Option<Self>;

    /// Declared kind of the field. `None` accepts both placeholder kinds.
    fn kind(&self) -> Option<FieldKind> {
        None
    }
}

/// A destination that receives bound values after a successful match.
pub trait Record {
    type Field: FieldRef;

    /// Writes `value` into the field denoted by `field`.
    fn assign(&mut self, field: &Self::Field, value: Value);
}

/// A value bound to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    List(Vec<String>),
}

impl Value {
    pub fn kind(&self) -> FieldKind {
        match self {
            Value::Text(_) => FieldKind::Scalar,
            Value::List(_) => FieldKind::List,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            Value::Text(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Value::Text(text) => Some(text),
            Value::List(_) => None,
        }
    }

    pub fn into_list(self) -> Option<Vec<String>> {
        match self {
            Value::List(items) => Some(items),
            Value::Text(_) => None,
        }
    }
}

impl FieldRef for String {
    fn name(&self) -> &str {
        self
    }

    fn from_name(name: &str) -> Option<Self> {
        Some(name.to_string())
    }
}

/// Dynamic record keyed by field name.
///
/// Useful when the field set is only known from a template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Captures {
    values: BTreeMap<String, Value>,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_text)
    }

    pub fn list(&self, name: &str) -> Option<&[String]> {
        self.get(name).and_then(Value::as_list)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl Record for Captures {
    type Field = String;

    fn assign(&mut self, field: &String, value: Value) {
        self.values.insert(field.clone(), value);
    }
}
