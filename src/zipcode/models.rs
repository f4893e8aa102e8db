//! Core data structures for the sharded zipcode dataset.
//!
//! This module defines the fundamental types used throughout the library:
//! - Address records and the maps that hold them
//! - Parsed postal code forms
//! - Partitioner output metadata

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single address record.
///
/// `town` is absent when the raw dataset marks the code as having no
/// sub-area breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub prefecture: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub town: Option<String>,
}

/// Full set of address records for one area, keyed by complete postal code.
///
/// One code may carry multiple addresses; the list order is the raw dataset
/// order and is preserved verbatim through partitioning and lookup.
pub type AreaMap = BTreeMap<String, Vec<Address>>;

/// The flat build input: complete postal code → address records.
pub type ZipcodeMap = BTreeMap<String, Vec<Address>>;

/// Result of the permissive postal code parser.
///
/// `local` may be empty or partial (0-4 digits); `full_code` is present
/// only when the code is complete (`local` has all 4 digits).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCode {
    /// First 3 digits.
    pub area: String,
    /// Remaining 0-4 digits, without the optional hyphen.
    pub local: String,
    /// `area + local`, present iff `complete`.
    pub full_code: Option<String>,
    pub complete: bool,
}

/// A fully specified postal code, as returned by the strict parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipCode {
    /// First 3 digits.
    pub area: String,
    /// Last 4 digits.
    pub local: String,
    /// All 7 digits, hyphen removed.
    pub full_code: String,
}

/// Counts reported after a partitioning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionSummary {
    pub buckets: usize,
    pub areas: usize,
    pub codes: usize,
}
