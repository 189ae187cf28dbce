//! Command-text parsing.
//!
//! # Responsibility
//! - Turn one line of user input into a validated `Command`.
//!
//! # Invariants
//! - Parsing is pure: no roster access and no I/O.
//! - Field validation reuses `model::fields`, the same validators used when
//!   loading persisted records.

pub mod arguments;
pub mod builders;
pub mod error;
pub mod syntax;
pub mod tokenizer;

pub use builders::{parse_command, parse_index};
pub use error::{ParseError, ParseResult};
