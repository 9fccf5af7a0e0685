// crates/geosplit-core/src/writer.rs
use crate::config::parent_dir;
use crate::error::{GeoError, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

const INDENT: &[u8] = b"    ";

/// Serializes `value` as 4-space indented JSON into `out`.
///
/// Non-ASCII text is written as UTF-8, not `\u` escaped.
pub fn to_writer_pretty<W: Write, T: Serialize + ?Sized>(out: W, value: &T) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = Serializer::with_formatter(out, formatter);
    value.serialize(&mut ser).map_err(GeoError::Json)
}

/// Writes ANY serializable value to `path`, replacing it atomically.
///
/// The JSON goes to a temp file in the destination directory first and is
/// renamed over `path` once flushed, so readers never see a half-written
/// file. Missing parent directories are created. The result keeps the mode
/// of the file it replaces, or gets `0644` when new, not the owner-only mode
/// temp files are created with.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let dir = match parent_dir(path) {
        Some(dir) => {
            fs::create_dir_all(dir).map_err(GeoError::Io)?;
            dir
        }
        None => Path::new("."),
    };

    let tmp = NamedTempFile::new_in(dir).map_err(GeoError::Io)?;
    {
        let mut writer = BufWriter::new(tmp.as_file());
        to_writer_pretty(&mut writer, value)?;
        writer.flush().map_err(GeoError::Io)?;
    }
    set_output_permissions(tmp.as_file(), path)?;
    tmp.persist(path).map_err(|e| GeoError::Io(e.error))?;

    debug!(path = %path.display(), "wrote json");
    Ok(())
}

#[cfg(unix)]
fn set_output_permissions(tmp: &fs::File, target: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match fs::metadata(target) {
        Ok(existing) => existing.permissions(),
        Err(_) => fs::Permissions::from_mode(0o644),
    };
    tmp.set_permissions(permissions).map_err(GeoError::Io)
}

#[cfg(not(unix))]
fn set_output_permissions(_tmp: &fs::File, _target: &Path) -> Result<()> {
    Ok(())
}
