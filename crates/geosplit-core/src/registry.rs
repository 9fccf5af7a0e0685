// crates/geosplit-core/src/registry.rs

//! GeoNames country registry (`countryInfo.txt`).
//!
//! Each data row contributes one `ISO-Numeric -> ISO3` entry. The numeric
//! id is kept as text so leading zeros survive.

use crate::config::TsvOptions;
use crate::error::Result;
use crate::loader::{self, field};
use crate::model::IdToCodeMap;
use csv::StringRecord;
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, info};

pub const COL_CODE: usize = 1;
pub const COL_ID: usize = 2;

/// Returns the `(id, code)` pair of one registry row, surrounding
/// whitespace removed.
pub fn parse_entry(record: &StringRecord, line: u64) -> Result<(String, String)> {
    let id = field(record, line, COL_ID, "country_id")?;
    let code = field(record, line, COL_CODE, "country_code")?;
    Ok((id.trim().to_string(), code.trim().to_string()))
}

/// Builds the id map from every row of `input`. Later rows win on a
/// repeated id. Also returns the number of data rows read.
pub fn build_id_map<R: BufRead>(input: R, options: TsvOptions) -> Result<(IdToCodeMap, usize)> {
    let mut map = IdToCodeMap::new();
    let rows = loader::for_each_row(input, options, |line, record| {
        let (id, code) = parse_entry(record, line)?;
        if let Some(previous) = map.insert(id, code) {
            debug!(line, previous = %previous, "country id seen twice, keeping the later code");
        }
        Ok(())
    })?;
    Ok((map, rows))
}

/// Opens the registry at `path` (plain or `.gz`) and builds the id map.
pub fn load_from_path(
    path: impl AsRef<Path>,
    options: TsvOptions,
) -> Result<(IdToCodeMap, usize)> {
    let path = path.as_ref();
    let reader = loader::open_stream(path)?;
    let (map, rows) = build_id_map(reader, options)?;
    info!(path = %path.display(), rows, entries = map.len(), "registry loaded");
    Ok((map, rows))
}
