//! Crate-level error types.

use crate::crypto::CipherError;

/// Result type for store construction and query operations.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Error type covering store construction and query operations.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// A query argument is out of range (e.g. `n == 0`).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A time window where `from` is after `to`.
    #[error("time frame mismatch: `from` is after `to`")]
    TimeFrameMismatch,

    /// A data row that violates the record grammar. Construction stops at
    /// the first offending row; `line` is 1-based within the input stream.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord {
        line: usize,
        #[source]
        reason: crate::parsing::RowError,
    },

    /// A stream-level read or sink-level write failure.
    #[error("I/O failure")]
    Io(#[from] std::io::Error),

    /// An encryption or decryption failure at the cipher boundary.
    #[error("cipher failure")]
    Cipher(#[from] CipherError),
}
