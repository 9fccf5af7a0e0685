// crates/geosplit-core/src/config.rs

//! Job configuration.
//!
//! Defaults match the GeoNames file names and the layout the map front-end
//! expects: per-country city files under `./data` and the id lookup table
//! next to the working directory.

use std::path::{Path, PathBuf};

pub const DEFAULT_GAZETTEER: &str = "cities15000.txt";
pub const DEFAULT_REGISTRY: &str = "countryInfo.txt";
pub const DEFAULT_OUTPUT_DIR: &str = "./data";
pub const DEFAULT_MAPPING_FILE: &str = "id-to-country-code.json";

/// How the TSV input is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TsvOptions {
    /// Lines starting with this byte are ignored.
    pub comment: Option<u8>,
    /// Ignore empty and whitespace-only lines instead of parsing them.
    pub skip_blank: bool,
}

impl TsvOptions {
    /// GeoNames `countryInfo.txt` starts with a `#`-commented header block
    /// and may carry blank separator lines.
    pub fn registry() -> Self {
        Self {
            comment: Some(b'#'),
            skip_blank: true,
        }
    }

    /// Every gazetteer line is a data row; a blank one is malformed.
    pub fn gazetteer() -> Self {
        Self {
            comment: None,
            skip_blank: false,
        }
    }
}

/// Settings for the city grouping job.
#[derive(Debug, Clone, PartialEq)]
pub struct CityJobConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Optional ISO2 whitelist; `None` writes every country.
    pub countries: Option<Vec<String>>,
    pub tsv: TsvOptions,
}

impl Default for CityJobConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_GAZETTEER),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            countries: None,
            tsv: TsvOptions::gazetteer(),
        }
    }
}

impl CityJobConfig {
    /// Path of the file holding the cities of `country_code`.
    pub fn output_path(&self, country_code: &str) -> PathBuf {
        self.output_dir.join(city_file_name(country_code))
    }
}

/// Settings for the country id mapping job.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryIdJobConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub tsv: TsvOptions,
}

impl Default for CountryIdJobConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_REGISTRY),
            output: PathBuf::from(DEFAULT_MAPPING_FILE),
            tsv: TsvOptions::registry(),
        }
    }
}

/// `cities-<lowercased code>.json`
pub fn city_file_name(country_code: &str) -> String {
    format!("cities-{}.json", country_code.to_lowercase())
}

/// Splits a comma-separated code list (`"DE, ch,,AT"`) into trimmed entries.
pub fn parse_code_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_file_names_are_lowercased() {
        assert_eq!(city_file_name("DE"), "cities-de.json");
        assert_eq!(city_file_name("us"), "cities-us.json");

        let cfg = CityJobConfig {
            output_dir: PathBuf::from("out"),
            ..Default::default()
        };
        assert_eq!(cfg.output_path("FR"), Path::new("out").join("cities-fr.json"));
    }

    #[test]
    fn code_list_drops_empty_entries() {
        assert_eq!(parse_code_list(" DE, ch,,AT "), ["DE", "ch", "AT"]);
        assert!(parse_code_list(",").is_empty());
    }

    #[test]
    fn bare_file_name_has_no_parent_dir() {
        assert_eq!(parent_dir(Path::new("map.json")), None);
        assert_eq!(parent_dir(Path::new("a/map.json")), Some(Path::new("a")));
    }
}
