// crates/geosplit-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file access, decompression) and the TSV
//! framing shared by both GeoNames formats. Field interpretation lives in
//! [`crate::gazetteer`] and [`crate::registry`].

use crate::config::TsvOptions;
use crate::error::{GeoError, Result};
use csv::StringRecord;
use std::io::{BufRead, ErrorKind};
use tracing::trace;

pub mod common_io;

pub use common_io::open_stream;

/// Walks every data row of `input`, handing `(line, record)` to `f`.
///
/// Rows are headerless, unquoted and tab-separated, with any number of
/// columns; the parsers check the offsets they need. Lines are framed here
/// rather than by `csv::Reader`, which drops empty lines on its own and
/// cannot report where a skipped line was. `line` is the 1-based physical
/// line number. Comment lines and, when `options.skip_blank` is set, blank
/// lines are skipped but still counted. The first error from `f` stops the
/// walk and is returned. Returns the number of rows handed to `f`.
pub fn for_each_row<R, F>(mut input: R, options: TsvOptions, mut f: F) -> Result<usize>
where
    R: BufRead,
    F: FnMut(u64, &StringRecord) -> Result<()>,
{
    let mut buf = String::new();
    let mut record = StringRecord::new();
    let mut line = 0u64;
    let mut rows = 0usize;

    loop {
        buf.clear();
        let read = input.read_line(&mut buf).map_err(|e| match e.kind() {
            ErrorKind::InvalidData => {
                GeoError::InvalidData(format!("line {}: not valid UTF-8", line + 1))
            }
            _ => GeoError::Io(e),
        })?;
        if read == 0 {
            break;
        }
        line += 1;

        let text = buf.trim_end_matches(['\n', '\r']);
        if options
            .comment
            .is_some_and(|c| text.as_bytes().first() == Some(&c))
        {
            trace!(line, "skipping comment line");
            continue;
        }
        if options.skip_blank && text.trim().is_empty() {
            trace!(line, "skipping blank line");
            continue;
        }

        record.clear();
        for value in text.split('\t') {
            record.push_field(value);
        }
        f(line, &record)?;
        rows += 1;
    }

    Ok(rows)
}

/// Returns column `index` of `record`, or a [`GeoError::MissingField`].
pub(crate) fn field<'r>(
    record: &'r StringRecord,
    line: u64,
    index: usize,
    name: &'static str,
) -> Result<&'r str> {
    record.get(index).ok_or(GeoError::MissingField {
        line,
        index,
        field: name,
    })
}
