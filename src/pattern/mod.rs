//! Pattern model and compiler.
//!
//! # Data Flow
//! ```text
//! Template string ("/product/{id}?tags={tags|,}")
//!     → template.rs (split into literal runs and placeholders)
//!     → builder.rs (append_literal / append_field / append_field_list)
//!         - consecutive placeholder check
//!         - duplicate field check
//!         - field kind check
//!     → Pattern (validated, immutable)
//!     → shared by reference (or Arc) with every match attempt
//! ```
//!
//! # Design Decisions
//! - Patterns are built once and never mutated afterwards
//! - The builder and the template parser go through the same validation
//! - Adjacent literals are merged so equal shapes compare equal
//! - Field identity comes from the caller's `FieldRef` type, not from setters

pub mod builder;
pub mod component;
pub mod error;
pub mod field;
pub mod segment;
pub mod template;

pub use builder::{Pattern, PatternBuilder};
pub use component::{Component, LiteralPart};
pub use error::{PatternError, TemplateError};
pub use field::{Captures, FieldKind, FieldRef, Record, Value};
pub use segment::Segment;
