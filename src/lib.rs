//! URL shape matching library.
//!
//! Declare a URL shape once, from literal text and named placeholders, then
//! match concrete URLs against it and bind the placeholder values into a
//! destination record.
//!
//! # Architecture Overview
//!
//! ```text
//!   Template / builder calls           URL string        &mut Record
//!            │                              │                 │
//!            ▼                              ▼                 │
//!   ┌──────────────────┐          ┌──────────────────┐        │
//!   │     pattern      │          │     matching     │        │
//!   │ template→builder │─Pattern─▶│ decompose→align  │        │
//!   │   (validation)   │          │ →stage→commit    │────────┘
//!   └──────────────────┘          └────────┬─────────┘
//!                                          │
//!                                 ┌────────┴─────────┐
//!                                 │      config      │
//!                                 │   MatchOptions   │
//!                                 └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use url_shape::{Captures, Pattern};
//!
//! let pattern: Pattern<String> = Pattern::parse("/product/{productId}?tags={tags|,}").unwrap();
//!
//! let mut captures = Captures::new();
//! pattern
//!     .match_url("https://example.com/product/123?tags=red,blue", &mut captures)
//!     .unwrap();
//!
//! assert_eq!(captures.text("productId"), Some("123"));
//! assert_eq!(captures.list("tags"), Some(&["red".to_string(), "blue".to_string()][..]));
//! ```

pub mod config;
pub mod matching;
pub mod pattern;

pub use config::{EmptyField, EmptyList, MatchOptions};
pub use matching::{match_url, MatchError, Matcher};
pub use pattern::{
    Captures, FieldKind, FieldRef, Pattern, PatternBuilder, PatternError, Record, Segment,
    TemplateError, Value,
};
