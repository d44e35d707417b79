//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Once;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use url_shape::{FieldKind, FieldRef, Pattern, Record, Segment, Value};

/// Install a test-friendly tracing subscriber once per test binary.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "url_shape=debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// A deep link into a product page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductLink {
    pub product_id: Option<String>,
    pub variant: Option<String>,
    pub ids: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub section: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    ProductId,
    Variant,
    Ids,
    Tags,
    Section,
}

impl FieldRef for ProductField {
    fn name(&self) -> &str {
        match self {
            ProductField::ProductId => "productId",
            ProductField::Variant => "variant",
            ProductField::Ids => "ids",
            ProductField::Tags => "tags",
            ProductField::Section => "section",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "productId" => Some(ProductField::ProductId),
            "variant" => Some(ProductField::Variant),
            "ids" => Some(ProductField::Ids),
            "tags" => Some(ProductField::Tags),
            "section" => Some(ProductField::Section),
            _ => None,
        }
    }

    fn kind(&self) -> Option<FieldKind> {
        match self {
            ProductField::Ids | ProductField::Tags => Some(FieldKind::List),
            _ => Some(FieldKind::Scalar),
        }
    }
}

impl Record for ProductLink {
    type Field = ProductField;

    fn assign(&mut self, field: &ProductField, value: Value) {
        match (field, value) {
            (ProductField::ProductId, Value::Text(text)) => self.product_id = Some(text),
            (ProductField::Variant, Value::Text(text)) => self.variant = Some(text),
            (ProductField::Section, Value::Text(text)) => self.section = Some(text),
            (ProductField::Ids, Value::List(items)) => self.ids = Some(items),
            (ProductField::Tags, Value::List(items)) => self.tags = Some(items),
            (field, value) => panic!("{:?} cannot hold {:?}", field, value),
        }
    }
}

impl ProductLink {
    pub fn text(&self, field: ProductField) -> Option<&str> {
        match field {
            ProductField::ProductId => self.product_id.as_deref(),
            ProductField::Variant => self.variant.as_deref(),
            ProductField::Section => self.section.as_deref(),
            ProductField::Ids | ProductField::Tags => None,
        }
    }

    pub fn list(&self, field: ProductField) -> Option<&[String]> {
        match field {
            ProductField::Ids => self.ids.as_deref(),
            ProductField::Tags => self.tags.as_deref(),
            _ => None,
        }
    }
}

pub fn product_pattern(template: &str) -> Pattern<ProductField> {
    Pattern::parse(template).expect("fixture template must compile")
}

/// Renders `pattern` with the values held by `link`, percent-encoding every value.
pub fn render(pattern: &Pattern<ProductField>, link: &ProductLink) -> String {
    let mut out = String::from("https://example.com");
    for segment in pattern.segments() {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Field(field) => {
                let value = link.text(*field).unwrap_or_default();
                out.push_str(&utf8_percent_encode(value, NON_ALPHANUMERIC).to_string());
            }
            Segment::FieldList(field, separator) => {
                let items = link.list(*field).unwrap_or_default();
                let encoded: Vec<String> = items
                    .iter()
                    .map(|item| utf8_percent_encode(item, NON_ALPHANUMERIC).to_string())
                    .collect();
                out.push_str(&encoded.join(&separator.to_string()));
            }
        }
    }
    out
}
