//! Core zipcode lookup module

pub mod error;
pub mod models;
pub mod parser;

mod dataset;
mod partition;
mod reader;
mod store;

pub use dataset::{load_ken_all, parse_ken_all};
pub use error::{Result, ZipcodeError};
pub use partition::{partition, MANIFEST_FILE};
pub use reader::ZipcodeReader;
pub use store::{FsShardSource, PathQuery, ShardSource, ShardStore};
