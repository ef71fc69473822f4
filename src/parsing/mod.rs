//! Parsers for the delimited launch datasets.
//!
//! Both input files are comma-separated with quote-escaping for embedded
//! commas. The tokenizer in [`tokens`] handles the quoting rules; the two
//! row parsers turn tokens into typed records:
//!
//! - [`mission_parser`]: one mission row → [`crate::core::domain::Mission`]
//! - [`rocket_parser`]: one rocket row → [`crate::core::domain::Rocket`]
//!
//! A row violating the grammar yields a [`RowError`]; the store wraps it
//! with the offending line number. Rows are never silently dropped or
//! defaulted.

pub mod mission_parser;
pub mod rocket_parser;
pub mod tokens;

#[cfg(test)]
mod rocket_parser_tests;

pub use mission_parser::parse_mission;
pub use rocket_parser::parse_rocket;

/// Reason a single data row failed to parse.
#[derive(Debug, thiserror::Error)]
pub enum RowError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("field `{field}` is not quote-wrapped")]
    MissingQuotes { field: &'static str },

    #[error("invalid date `{0}`")]
    Date(String),

    #[error("invalid number `{0}`")]
    Number(String),

    #[error("unknown status `{0}`")]
    Status(String),

    #[error("detail `{0}` has no `|` separator")]
    Detail(String),
}
