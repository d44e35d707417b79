//! URL matching and binding subsystem.
//!
//! # Data Flow
//! ```text
//! URL string + Pattern + &mut Record
//!     → decompose.rs (parse, build subject from path [+ query] [+ fragment])
//!     → align.rs (anchor literals, measure placeholder spans)
//!     → binder.rs (decode and split captures into staged values)
//!     → binder.rs commit (write staged values into the record)
//!     → Ok(()) | MalformedUrl | NoMatch
//! ```
//!
//! # Design Decisions
//! - Synchronous and allocation-light; no I/O, no shared mutable state
//! - All-or-nothing: nothing is written unless every step succeeded
//! - Deterministic: same input always produces the same bindings

pub mod align;
pub mod binder;
pub mod decompose;
pub mod error;
pub mod matcher;

pub use binder::Staged;
pub use decompose::{Escaping, ParsedUrl, Subject};
pub use error::{MatchError, MatchResult};
pub use matcher::{match_url, Matcher};
