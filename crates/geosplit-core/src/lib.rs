// crates/geosplit-core/src/lib.rs

//! # geosplit-core
//!
//! Turns two GeoNames dumps into the JSON files a world-map front-end loads:
//! - the city gazetteer becomes one `cities-<cc>.json` per country,
//! - the country registry becomes an `id -> ISO3` lookup table.
//!
//! ```no_run
//! use geosplit_core::{run_city_job, CityJobConfig};
//!
//! let stats = run_city_job(&CityJobConfig::default())?;
//! println!("{} cities in {} files", stats.records, stats.files_written);
//! # Ok::<(), geosplit_core::GeoError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod config;
pub mod error;
pub mod gazetteer;
pub mod jobs;
pub mod loader;
pub mod model;
pub mod registry;
pub mod writer;

// Re-exports
pub use crate::common::JobStats;
pub use crate::config::{CityJobConfig, CountryIdJobConfig, TsvOptions};
pub use crate::error::{GeoError, Result};
pub use crate::jobs::{
    city_stats, load_id_map, lookup_id, registry_stats, run_city_job, run_country_id_job,
};
pub use crate::model::{City, CountryGrouping, IdToCodeMap};
