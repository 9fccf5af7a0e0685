// crates/geosplit-core/src/gazetteer.rs

//! GeoNames gazetteer rows (`cities15000.txt` and friends).
//!
//! Only five of the nineteen columns matter here; they are read by fixed
//! offset and a row that lacks one of them, or carries a non-numeric
//! coordinate or population, fails the whole run.

use crate::config::TsvOptions;
use crate::error::{GeoError, Result};
use crate::loader::{self, field};
use crate::model::{City, CountryGrouping};
use csv::StringRecord;
use std::io::BufRead;
use std::path::Path;
use tracing::info;

pub const COL_NAME: usize = 1;
pub const COL_LATITUDE: usize = 4;
pub const COL_LONGITUDE: usize = 5;
pub const COL_COUNTRY_CODE: usize = 8;
pub const COL_POPULATION: usize = 14;

/// Parses one gazetteer row into its country code and [`City`].
pub fn parse_city(record: &StringRecord, line: u64) -> Result<(String, City)> {
    let country_code = field(record, line, COL_COUNTRY_CODE, "country_code")?;
    let name = field(record, line, COL_NAME, "name")?;
    let lat = parse_coordinate(field(record, line, COL_LATITUDE, "lat")?, line, "lat")?;
    let lon = parse_coordinate(field(record, line, COL_LONGITUDE, "lon")?, line, "lon")?;
    let population = parse_population(field(record, line, COL_POPULATION, "population")?, line)?;

    Ok((
        country_code.to_string(),
        City {
            name: name.to_string(),
            lat,
            lon,
            population,
        },
    ))
}

fn parse_coordinate(raw: &str, line: u64, name: &'static str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GeoError::InvalidNumber {
            line,
            field: name,
            value: raw.to_string(),
        })
}

/// An empty population column means "unknown" and is stored as `0`.
fn parse_population(raw: &str, line: u64) -> Result<i64> {
    if raw.is_empty() {
        return Ok(0);
    }
    raw.trim()
        .parse::<i64>()
        .map_err(|_| GeoError::InvalidNumber {
            line,
            field: "population",
            value: raw.to_string(),
        })
}

/// Reads every row of `input` and partitions the cities by country code.
pub fn group_cities<R: BufRead>(input: R, options: TsvOptions) -> Result<CountryGrouping> {
    let mut grouping = CountryGrouping::new();
    loader::for_each_row(input, options, |line, record| {
        let (code, city) = parse_city(record, line)?;
        grouping.push(&code, city);
        Ok(())
    })?;
    Ok(grouping)
}

/// Opens the gazetteer at `path` (plain or `.gz`) and groups it.
pub fn load_from_path(path: impl AsRef<Path>, options: TsvOptions) -> Result<CountryGrouping> {
    let path = path.as_ref();
    let reader = loader::open_stream(path)?;
    let grouping = group_cities(reader, options)?;
    info!(
        path = %path.display(),
        countries = grouping.len(),
        cities = grouping.city_count(),
        "gazetteer loaded"
    );
    Ok(grouping)
}
