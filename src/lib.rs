//! In-memory analytics over space-launch datasets.
//!
//! The crate ingests two delimited text datasets — launch missions and
//! rocket families — into an immutable [`core::store::RecordStore`], then
//! answers a fixed set of analytical queries (filtering, grouping, ranking,
//! cross-referencing) through the pure functions in [`services`]. One query
//! result is encrypted through the [`crypto::SymmetricCipher`] boundary
//! before being written to a caller-supplied sink.

pub mod core;
pub mod crypto;
pub mod error;
pub mod io;
pub mod parsing;
pub mod services;

pub use error::{Result, ScanError};
