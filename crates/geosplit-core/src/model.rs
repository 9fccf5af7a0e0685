// crates/geosplit-core/src/model.rs

//! # Domain Model
//!
//! The in-memory shapes both jobs build before writing JSON:
//! - [`City`]: one gazetteer row reduced to the four output fields.
//! - [`CountryGrouping`]: cities partitioned by country code, input order kept.
//! - [`IdToCodeMap`]: numeric country id -> ISO3 code, first-seen key order.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A single city as written to `cities-<cc>.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub population: i64,
}

/// Cities grouped by country code.
///
/// Codes are compared case-insensitively, the same way output file names
/// are derived, so `de` and `DE` land in one group and one file. A group is
/// reported under the spelling of its code seen first. Groups are keyed in a
/// `BTreeMap` so iteration, and therefore the order files are written in, is
/// stable between runs. Within a group the cities keep input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CountryGrouping {
    groups: BTreeMap<String, (String, Vec<City>)>,
}

impl CountryGrouping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `city` to the group of `country_code`, creating the group on
    /// first sight.
    pub fn push(&mut self, country_code: &str, city: City) {
        let key = country_code.to_lowercase();
        match self.groups.get_mut(&key) {
            Some((_, cities)) => cities.push(city),
            None => {
                self.groups
                    .insert(key, (country_code.to_string(), vec![city]));
            }
        }
    }

    pub fn get(&self, country_code: &str) -> Option<&[City]> {
        self.groups
            .get(&country_code.to_lowercase())
            .map(|(_, cities)| cities.as_slice())
    }

    /// Number of distinct country codes.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of cities across all groups.
    pub fn city_count(&self) -> usize {
        self.groups.values().map(|(_, cities)| cities.len()).sum()
    }

    pub fn country_codes(&self) -> impl Iterator<Item = &str> {
        self.groups.values().map(|(code, _)| code.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[City])> {
        self.groups
            .values()
            .map(|(code, cities)| (code.as_str(), cities.as_slice()))
    }

    /// Keeps only the groups whose code is in `codes` (case-insensitive).
    pub fn retain_countries<S: AsRef<str>>(&mut self, codes: &[S]) {
        self.groups.retain(|key, _| {
            codes
                .iter()
                .any(|wanted| wanted.as_ref().trim().to_lowercase() == *key)
        });
    }
}

/// Flat `id -> code` lookup table.
///
/// Behaves like an insertion-ordered dictionary: inserting an existing id
/// replaces its value but keeps its original position. Serializes as a
/// plain JSON object in that order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IdToCodeMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl IdToCodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the code for `id`, returning the previous code.
    pub fn insert(&mut self, id: impl Into<String>, code: impl Into<String>) -> Option<String> {
        let id = id.into();
        let code = code.into();
        match self.index.get(&id) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, code)),
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push((id, code));
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.index
            .get(id)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(id, code)| (id.as_str(), code.as_str()))
    }
}

impl Serialize for IdToCodeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for IdToCodeMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdToCodeVisitor;

        impl<'de> Visitor<'de> for IdToCodeVisitor {
            type Value = IdToCodeMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object mapping country ids to country codes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = IdToCodeMap::new();
                while let Some((id, code)) = access.next_entry::<String, String>()? {
                    map.insert(id, code);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(IdToCodeVisitor)
    }
}
