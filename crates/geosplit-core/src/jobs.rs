// crates/geosplit-core/src/jobs.rs

//! # Jobs
//!
//! The two batch conversions, end to end:
//! - [`run_city_job`]: gazetteer -> one `cities-<cc>.json` per country.
//! - [`run_country_id_job`]: registry -> one `id -> code` JSON object.
//!
//! Plus read-only helpers used by the CLI `stats` and `lookup` commands.
//! Both jobs abort on the first malformed row. Files already written by an
//! aborted city job are left in place.

use crate::common::JobStats;
use crate::config::{CityJobConfig, CountryIdJobConfig};
use crate::error::{GeoError, Result};
use crate::model::{CountryGrouping, IdToCodeMap};
use crate::writer::write_json_atomic;
use crate::{gazetteer, loader, registry};
use std::fs;
use std::path::Path;
use tracing::info;

/// Parses the gazetteer and applies the optional country filter.
pub fn load_cities(config: &CityJobConfig) -> Result<CountryGrouping> {
    let mut grouping = gazetteer::load_from_path(&config.input, config.tsv)?;
    if let Some(filter) = config.countries.as_deref().filter(|f| !f.is_empty()) {
        grouping.retain_countries(filter);
        info!(kept = grouping.len(), "applied country filter");
    }
    Ok(grouping)
}

/// Writes each group of `grouping` to `<output_dir>/cities-<cc>.json`.
///
/// Groups are case-insensitive, so every group maps to its own file and the
/// returned count equals the number of distinct files.
pub fn write_city_files(grouping: &CountryGrouping, output_dir: &Path) -> Result<usize> {
    fs::create_dir_all(output_dir).map_err(GeoError::Io)?;
    let mut written = 0;
    for (code, cities) in grouping.iter() {
        let path = output_dir.join(crate::config::city_file_name(code));
        write_json_atomic(&path, cities)?;
        written += 1;
    }
    Ok(written)
}

/// Runs the city grouping job.
pub fn run_city_job(config: &CityJobConfig) -> Result<JobStats> {
    info!(input = %config.input.display(), output_dir = %config.output_dir.display(), "city job started");
    let grouping = load_cities(config)?;
    let files_written = write_city_files(&grouping, &config.output_dir)?;

    let stats = JobStats {
        records: grouping.city_count(),
        groups: grouping.len(),
        files_written,
    };
    info!(?stats, "city job finished");
    Ok(stats)
}

/// Runs the country id mapping job.
pub fn run_country_id_job(config: &CountryIdJobConfig) -> Result<JobStats> {
    info!(input = %config.input.display(), output = %config.output.display(), "country id job started");
    let (map, rows) = registry::load_from_path(&config.input, config.tsv)?;
    write_json_atomic(&config.output, &map)?;

    let stats = JobStats {
        records: rows,
        groups: map.len(),
        files_written: 1,
    };
    info!(?stats, "country id job finished");
    Ok(stats)
}

/// Parses the gazetteer without writing anything.
pub fn city_stats(config: &CityJobConfig) -> Result<JobStats> {
    let grouping = load_cities(config)?;
    Ok(JobStats {
        records: grouping.city_count(),
        groups: grouping.len(),
        files_written: 0,
    })
}

/// Parses the registry without writing anything.
pub fn registry_stats(config: &CountryIdJobConfig) -> Result<JobStats> {
    let (map, rows) = registry::load_from_path(&config.input, config.tsv)?;
    Ok(JobStats {
        records: rows,
        groups: map.len(),
        files_written: 0,
    })
}

/// Reads a mapping file previously written by [`run_country_id_job`].
pub fn load_id_map(path: impl AsRef<Path>) -> Result<IdToCodeMap> {
    let reader = loader::open_stream(path.as_ref())?;
    serde_json::from_reader(reader).map_err(GeoError::Json)
}

/// Resolves `id` through the mapping file at `path`.
pub fn lookup_id(path: impl AsRef<Path>, id: &str) -> Result<Option<String>> {
    let map = load_id_map(path)?;
    Ok(map.get(id.trim()).map(str::to_string))
}
