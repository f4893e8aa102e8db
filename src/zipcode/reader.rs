//! High-level lookup API composing the code parser and the lazy shard store.

use std::path::Path;
use std::sync::Arc;

use log::{info, warn};

use super::error::{Result, ZipcodeError};
use super::models::{Address, AreaMap};
use super::parser;
use super::store::{FsShardSource, ShardSource, ShardStore};

/// Read-only postal code lookup over a sharded dataset.
///
/// All methods are free of side effects beyond the underlying lazy shard
/// load. Missing data is `Ok(None)` (or an empty list for [`search`]),
/// never an error; only malformed input and unreadable shards fail.
///
/// [`search`]: ZipcodeReader::search
#[derive(Debug)]
pub struct ZipcodeReader<S = FsShardSource> {
    store: ShardStore<S>,
}

impl ZipcodeReader<FsShardSource> {
    /// Opens the shard tree the partitioner wrote at `dir`.
    ///
    /// No file is read until the first query.
    pub fn open(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        info!("Opening shard tree: {}", dir.display());
        Self::with_source(FsShardSource::new(dir))
    }
}

impl<S: ShardSource> ZipcodeReader<S> {
    /// Builds a reader over any shard source.
    pub fn with_source(source: S) -> Self {
        Self {
            store: ShardStore::new(source),
        }
    }

    pub fn store(&self) -> &ShardStore<S> {
        &self.store
    }

    /// Full shard for a bare 3-digit area code, or `None` when the dataset
    /// has no such area. An unknown bucket and an absent shard both count
    /// as absent; a shard that exists but cannot be read is an error.
    pub fn get_area_map(&self, area_code: &str) -> Result<Option<Arc<AreaMap>>> {
        let area = parser::parse_area_code(area_code)?;
        let bucket = &area[0..1];

        match self.store.load_area(bucket, &area) {
            Ok(map) => Ok(Some(map)),
            Err(ZipcodeError::UnknownBucket { .. }) | Err(ZipcodeError::AreaNotFound { .. }) => {
                Ok(None)
            }
            Err(e) => {
                warn!("Shard load failed for area {area}: {e}");
                Err(e)
            }
        }
    }

    /// Area lookup for a full or partial code.
    ///
    /// Only the 3-digit area portion is used; any local digits are ignored.
    /// Parse errors propagate unchanged.
    pub fn lookup(&self, input: &str) -> Result<Option<Arc<AreaMap>>> {
        let parsed = parser::parse_code(input)?;
        self.get_area_map(&parsed.area)
    }

    /// Exact address records for one complete code, in build order.
    ///
    /// # Errors
    /// Fails with [`ZipcodeError::IncompleteCode`] when `input` is only an
    /// area or a partial code. A valid-format code absent from the dataset
    /// is `Ok(None)`, not an error.
    pub fn resolve(&self, input: &str) -> Result<Option<Vec<Address>>> {
        let zip = parser::parse_zip_code(input)?;

        let map = match self.get_area_map(&zip.area)? {
            Some(map) => map,
            None => return Ok(None),
        };
        Ok(map.get(&zip.full_code).cloned())
    }

    /// Prefix search over a full or partial code.
    ///
    /// Concatenates, in area map iteration order, the address lists of
    /// every code starting with the parsed `area + local` prefix. No match
    /// is an empty list, never `None` or an error.
    pub fn search(&self, input: &str) -> Result<Vec<Address>> {
        let parsed = parser::parse_code(input)?;

        let map = match self.get_area_map(&parsed.area)? {
            Some(map) => map,
            None => return Ok(Vec::new()),
        };

        let prefix = format!("{}{}", parsed.area, parsed.local);
        Ok(map
            .iter()
            .filter(|(code, _)| code.starts_with(&prefix))
            .flat_map(|(_, addresses)| addresses.iter().cloned())
            .collect())
    }
}
