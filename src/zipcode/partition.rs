//! Offline shard partitioner.
//!
//! Converts the flat code → addresses mapping into an on-disk shard tree:
//! one JSON file per area at `<bucket>/<area>.json`, a per-bucket manifest
//! listing that bucket's areas, and a root manifest listing all buckets.
//! Buckets are keyed by the first code digit, areas by the first three.
//!
//! Within a shard file, codes are written in ascending order; address lists
//! keep their source order. This policy is stable across rebuilds.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{debug, info};

use super::error::Result;
use super::models::{AreaMap, PartitionSummary, ZipcodeMap};
use super::parser;

/// File name for both manifest levels. Area ids are always 3 digits, so the
/// name can never collide with a shard file.
pub const MANIFEST_FILE: &str = "index.json";

/// Writes the shard tree for `map` under `dest`.
///
/// An existing `dest` is removed entirely first, so a re-run with fewer
/// areas never leaves stale shards behind. Shard keys are normalized to the
/// hyphen-free 7-digit form.
///
/// # Errors
/// Fails if a key of `map` is not a complete postal code, or on any I/O or
/// serialization fault.
pub fn partition(map: &ZipcodeMap, dest: impl AsRef<Path>) -> Result<PartitionSummary> {
    let dest = dest.as_ref();
    info!("Partitioning {} codes into {}", map.len(), dest.display());

    if dest.exists() {
        fs::remove_dir_all(dest)?;
    }
    fs::create_dir_all(dest)?;

    let buckets = group_by_bucket(map)?;
    let mut summary = PartitionSummary {
        buckets: buckets.len(),
        areas: 0,
        codes: map.len(),
    };

    for (bucket, areas) in &buckets {
        let bucket_dir = dest.join(bucket);
        fs::create_dir_all(&bucket_dir)?;

        for (area, area_map) in areas {
            let shard_path = bucket_dir.join(format!("{area}.json"));
            debug!(
                "Writing shard {} ({} codes)",
                shard_path.display(),
                area_map.len()
            );
            fs::write(&shard_path, serde_json::to_vec_pretty(area_map)?)?;
            summary.areas += 1;
        }

        // BTreeMap iteration yields area ids already sorted ascending.
        let area_ids: Vec<&String> = areas.keys().collect();
        fs::write(
            bucket_dir.join(MANIFEST_FILE),
            serde_json::to_vec_pretty(&area_ids)?,
        )?;
    }

    let bucket_ids: Vec<&String> = buckets.keys().collect();
    fs::write(dest.join(MANIFEST_FILE), serde_json::to_vec_pretty(&bucket_ids)?)?;

    info!(
        "Wrote {} buckets, {} areas, {} codes",
        summary.buckets, summary.areas, summary.codes
    );
    Ok(summary)
}

/// Groups full codes into the bucket → area → AreaMap hierarchy.
fn group_by_bucket(map: &ZipcodeMap) -> Result<BTreeMap<String, BTreeMap<String, AreaMap>>> {
    let mut buckets: BTreeMap<String, BTreeMap<String, AreaMap>> = BTreeMap::new();

    for (code, addresses) in map {
        let zip = parser::parse_zip_code(code)?;
        let bucket = zip.area[0..1].to_string();
        buckets
            .entry(bucket)
            .or_default()
            .entry(zip.area)
            .or_default()
            .insert(zip.full_code, addresses.clone());
    }

    Ok(buckets)
}
