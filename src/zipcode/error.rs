//! Custom error types for the zipcode-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Missing data is deliberately *not* represented here: an area or code
/// absent from the dataset is reported as `None` (or an empty list by
/// `search`), never as an error. Only malformed input, malformed shards,
/// and I/O faults surface through this type.
#[derive(Debug, Error)]
pub enum ZipcodeError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// An error originating from JSON serialization.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input does not match the postal code grammar.
    #[error("Invalid postal code {input:?}: expected 100-0001, 1000001, or at least 100.")]
    InvalidCodeFormat { input: String },

    /// The input is not a bare 3-digit area code.
    #[error("Invalid area code {input:?}: expected exactly 3 digits, like 100.")]
    InvalidAreaCode { input: String },

    /// A complete code was required, but only an area or partial code was given.
    #[error("Incomplete postal code {input:?}: a complete code like 100-0001 or 1000001 is required.")]
    IncompleteCode { input: String },

    /// A bucket id not present in the root manifest was queried.
    #[error("Unknown bucket {bucket:?}")]
    UnknownBucket { bucket: String },

    /// The shard file for an area does not exist.
    #[error("No data for area {area:?} in bucket {bucket:?}")]
    AreaNotFound { bucket: String, area: String },

    /// A virtual shard path has the wrong shape.
    #[error("Invalid shard path {path:?}: expected \"\", \"/<bucket>\", or \"/<bucket>/<area>\"")]
    InvalidPath { path: String },

    /// A shard or manifest file exists but cannot be parsed.
    #[error("Corrupt shard {path}: {reason}")]
    CorruptShard { path: String, reason: String },

    /// A row of the raw dataset is structurally invalid.
    #[error("Malformed dataset row at line {line}: {reason}")]
    DatasetRow { line: usize, reason: String },

    /// A mutex lock was poisoned, indicating a panic in another thread holding the lock.
    #[error("A mutex lock was poisoned, indicating a panic in another thread holding the lock.")]
    LockPoisoned,
}

/// A convenience `Result` type alias using the crate's `ZipcodeError` type.
pub type Result<T> = std::result::Result<T, ZipcodeError>;
