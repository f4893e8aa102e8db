//! # zipcode-reader
//!
//! Sharded, lazily-loaded postal-code-to-address lookup for the Japan Post
//! KEN_ALL dataset.
//!
//! An offline partitioning step converts the flat code → addresses table
//! into a two-level shard tree (bucket → area → records); at runtime, a
//! full or partial code is resolved through that tree, reading at most one
//! manifest and one area shard per query.
pub mod zipcode;

// Re-export the main types for convenience
pub use zipcode::{
    load_ken_all,
    models::{Address, AreaMap, ParsedCode, PartitionSummary, ZipCode, ZipcodeMap},
    parse_ken_all, partition,
    parser::{parse_area_code, parse_code, parse_zip_code},
    FsShardSource, PathQuery, Result, ShardSource, ShardStore, ZipcodeError, ZipcodeReader,
    MANIFEST_FILE,
};
