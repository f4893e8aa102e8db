//! Lazy shard resolution.
//!
//! Answers three query shapes over the two-level shard hierarchy without
//! reading more than necessary:
//! - root: the bucket ids, from the root manifest alone
//! - bucket: the area ids under one bucket, from that bucket's manifest
//! - (bucket, area): one parsed shard file
//!
//! [`ShardStore`] adds memoization on top, so repeated queries for one area
//! share a single parsed copy. The shard tree is immutable after build, so
//! cached entries are never invalidated.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use log::{debug, trace};

use super::error::{Result, ZipcodeError};
use super::models::AreaMap;
use super::partition::MANIFEST_FILE;

/// The loader seam between the runtime API and shard storage.
///
/// Implementations may be backed by the directory tree the partitioner
/// writes, embedded resources, or a precompiled map. Each call must touch
/// at most the relevant manifest plus one shard file, never the full tree.
pub trait ShardSource {
    /// Bucket ids, sorted ascending. Reads only the root manifest.
    fn buckets(&self) -> Result<Vec<String>>;

    /// Area ids under `bucket`, sorted ascending. Reads only that bucket's
    /// manifest.
    ///
    /// # Errors
    /// [`ZipcodeError::UnknownBucket`] when the bucket does not exist.
    fn areas(&self, bucket: &str) -> Result<Vec<String>>;

    /// Reads and parses one area shard.
    ///
    /// # Errors
    /// [`ZipcodeError::AreaNotFound`] when the shard file is absent;
    /// [`ZipcodeError::CorruptShard`] when it exists but cannot be parsed.
    fn area_map(&self, bucket: &str, area: &str) -> Result<AreaMap>;
}

/// [`ShardSource`] over the directory tree the partitioner writes.
#[derive(Debug)]
pub struct FsShardSource {
    base: PathBuf,
}

impl FsShardSource {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn read_manifest(&self, path: &Path) -> Result<Vec<String>> {
        let raw = fs::read(path)?;
        serde_json::from_slice(&raw).map_err(|e| ZipcodeError::CorruptShard {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

impl ShardSource for FsShardSource {
    fn buckets(&self) -> Result<Vec<String>> {
        self.read_manifest(&self.base.join(MANIFEST_FILE))
    }

    fn areas(&self, bucket: &str) -> Result<Vec<String>> {
        let manifest = self.base.join(bucket).join(MANIFEST_FILE);
        match self.read_manifest(&manifest) {
            Err(ZipcodeError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                Err(ZipcodeError::UnknownBucket {
                    bucket: bucket.to_string(),
                })
            }
            other => other,
        }
    }

    fn area_map(&self, bucket: &str, area: &str) -> Result<AreaMap> {
        let path = self.base.join(bucket).join(format!("{area}.json"));
        trace!("Reading shard {}", path.display());

        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ZipcodeError::AreaNotFound {
                    bucket: bucket.to_string(),
                    area: area.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_slice(&raw).map_err(|e| ZipcodeError::CorruptShard {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Successful outcome of a virtual shard path query.
#[derive(Debug)]
pub enum PathQuery {
    /// Bucket ids, sorted ascending.
    Root(Vec<String>),
    /// Area ids under one bucket, sorted ascending.
    Bucket(Vec<String>),
    /// One area's full shard.
    Area(Arc<AreaMap>),
}

/// Memoizing store over a [`ShardSource`].
///
/// Each area shard is parsed at most once per process; concurrent and
/// repeated loads of the same area share the same `Arc<AreaMap>`.
#[derive(Debug)]
pub struct ShardStore<S> {
    source: S,
    cache: Mutex<HashMap<(String, String), Arc<AreaMap>>>,
}

impl<S: ShardSource> ShardStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Loads one area shard, reusing the cached copy when present.
    pub fn load_area(&self, bucket: &str, area: &str) -> Result<Arc<AreaMap>> {
        let key = (bucket.to_string(), area.to_string());
        {
            let cache = self.cache.lock().map_err(|_| ZipcodeError::LockPoisoned)?;
            if let Some(map) = cache.get(&key) {
                trace!("Shard cache hit for {bucket}/{area}");
                return Ok(Arc::clone(map));
            }
        }

        let map = Arc::new(self.source.area_map(bucket, area)?);
        debug!("Loaded shard {bucket}/{area} ({} codes)", map.len());

        let mut cache = self.cache.lock().map_err(|_| ZipcodeError::LockPoisoned)?;
        Ok(Arc::clone(cache.entry(key).or_insert(map)))
    }

    /// Resolves a virtual shard path.
    ///
    /// The path space has three levels: `""` lists buckets, `"/<bucket>"`
    /// lists that bucket's areas, and `"/<bucket>/<area>"` yields the shard
    /// itself. Root and bucket queries never read shard files.
    ///
    /// # Errors
    /// [`ZipcodeError::InvalidPath`] for any other shape, including missing
    /// leading slashes, empty segments, and more than two segments.
    pub fn query(&self, path: &str) -> Result<PathQuery> {
        let invalid = || ZipcodeError::InvalidPath {
            path: path.to_string(),
        };

        let segments: Vec<&str> = if path.is_empty() {
            Vec::new()
        } else {
            path.strip_prefix('/').ok_or_else(invalid)?.split('/').collect()
        };
        if segments.iter().any(|s| s.is_empty()) {
            return Err(invalid());
        }

        match segments.as_slice() {
            [] => Ok(PathQuery::Root(self.source.buckets()?)),
            [bucket] => Ok(PathQuery::Bucket(self.source.areas(bucket)?)),
            [bucket, area] => Ok(PathQuery::Area(self.load_area(bucket, area)?)),
            _ => Err(invalid()),
        }
    }
}
