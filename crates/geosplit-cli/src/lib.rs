//! geosplit-cli
//! ============
//!
//! Command-line interface for `geosplit-core`.
//!
//! This crate primarily provides a binary (`geosplit`). The library target
//! only exists so docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! geosplit cities --cities cities15000.txt --out-dir ./data
//! geosplit country-ids --countries countryInfo.txt
//! geosplit all
//! geosplit stats --cities cities15000.txt.gz
//! geosplit lookup 276
//! ```
//!
//! For programmatic access use the [`geosplit-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
