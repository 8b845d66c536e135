//! Flat CSV tables passed between pipeline stages.
//!
//! Every stage reads one complete table and writes one complete
//! replacement. Writes go to a temp file in the destination directory and
//! are renamed into place, so readers never observe a half-written table.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::Result;

#[cfg(unix)]
const TABLE_MODE: u32 = 0o644;

/// A row type persisted as one CSV table.
pub trait Table: Serialize + DeserializeOwned {
    /// Header row, in serialization order.
    const COLUMNS: &'static [&'static str];
}

/// Load every row of a table. Columns are matched by header name.
pub fn read_table<T: Table>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let rows = reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, _>>()?;
    debug!(path = %path.display(), rows = rows.len(), "Loaded table");
    Ok(rows)
}

/// Replace the table at `path` with `rows`, creating parent directories.
pub fn write_table<T: Table>(path: &Path, rows: &[T]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    write_rows(tmp.as_file_mut(), rows)?;
    tmp.as_file_mut().sync_all()?;
    // Temp files are created 0600; tables are shared with the viewer.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file().set_permissions(fs::Permissions::from_mode(TABLE_MODE))?;
    }
    tmp.persist(path).map_err(|e| e.error)?;

    debug!(path = %path.display(), rows = rows.len(), "Wrote table");
    Ok(())
}

/// Render rows as CSV bytes, header included, without any index column.
pub fn to_csv_bytes<T: Table>(rows: &[T]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_rows(&mut buf, rows)?;
    Ok(buf)
}

// The header is written explicitly so empty tables still carry it.
fn write_rows<W: Write, T: Table>(sink: W, rows: &[T]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink);
    writer.write_record(T::COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
