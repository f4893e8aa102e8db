//! KEN_ALL dataset ingestion.
//!
//! Japan Post publishes the nationwide table as a Shift_JIS CSV. This module
//! decodes it and folds the rows into the flat code → addresses mapping the
//! partitioner consumes. Downloading the archive is out of scope; callers
//! hand in an already-extracted CSV file.

use std::fs;
use std::path::Path;

use csv_core::ReadFieldResult;
use log::{debug, info};

use super::error::{Result, ZipcodeError};
use super::models::{Address, ZipcodeMap};

/// Town value Japan Post uses when a code has no sub-area breakdown.
const NO_TOWN_SENTINEL: &str = "以下に掲載がない場合";

// KEN_ALL column positions.
const ZIP_COLUMN: usize = 2;
const PREF_COLUMN: usize = 6;
const CITY_COLUMN: usize = 7;
const TOWN_COLUMN: usize = 8;

/// Reads a raw KEN_ALL CSV file into the flat zipcode map.
///
/// The file is decoded as Shift_JIS before parsing.
pub fn load_ken_all(path: impl AsRef<Path>) -> Result<ZipcodeMap> {
    let path = path.as_ref();
    info!("Loading KEN_ALL dataset: {}", path.display());
    let raw = fs::read(path)?;
    let (text, _, _) = encoding_rs::SHIFT_JIS.decode(&raw);
    parse_ken_all(&text)
}

/// Parses already-decoded KEN_ALL CSV text.
///
/// Rows with an empty code column are skipped. Addresses sharing one code
/// keep their file order. The "no sub-area" town sentinel becomes `None`.
///
/// # Errors
/// Fails with [`ZipcodeError::DatasetRow`] when a row has too few columns.
pub fn parse_ken_all(text: &str) -> Result<ZipcodeMap> {
    let mut map = ZipcodeMap::new();
    let mut rows = 0usize;

    for (line_idx, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }

        let fields = split_csv_row(line);
        if fields.len() <= TOWN_COLUMN {
            return Err(ZipcodeError::DatasetRow {
                line: line_idx + 1,
                reason: format!(
                    "expected at least {} columns, found {}",
                    TOWN_COLUMN + 1,
                    fields.len()
                ),
            });
        }

        let code = fields[ZIP_COLUMN].trim();
        if code.is_empty() {
            continue;
        }

        let town_raw = fields[TOWN_COLUMN].trim();
        let town = (!town_raw.is_empty() && town_raw != NO_TOWN_SENTINEL)
            .then(|| town_raw.to_string());

        map.entry(code.to_string()).or_default().push(Address {
            prefecture: fields[PREF_COLUMN].trim().to_string(),
            city: fields[CITY_COLUMN].trim().to_string(),
            town,
        });
        rows += 1;
    }

    debug!("Parsed {} dataset rows into {} codes", rows, map.len());
    Ok(map)
}

/// Splits one CSV row into unquoted fields.
fn split_csv_row(row: &str) -> Vec<String> {
    let mut fields = vec![];
    let mut rdr = csv_core::Reader::new();
    let mut bytes = row.as_bytes();
    let mut output = [0; 4096];
    loop {
        let (result, nin, nout) = rdr.read_field(bytes, &mut output);
        let end = match result {
            ReadFieldResult::InputEmpty => true,
            ReadFieldResult::Field { .. } => false,
            _ => unreachable!(),
        };
        fields.push(String::from_utf8_lossy(&output[..nout]).into_owned());
        if end {
            break;
        }
        bytes = &bytes[nin..];
    }
    fields
}
