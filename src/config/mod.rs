//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MatchOptions (validated, immutable)
//!     → Matcher::new (pre-parses the base URL)
//! ```
//!
//! # Design Decisions
//! - Options are immutable once a matcher holds them
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{from_toml_str, load_options, ConfigError};
pub use schema::{EmptyField, EmptyList, MatchOptions};
pub use validation::{validate_options, ValidationError};
