//! Shared CSV codec used by both store implementations.

use std::io;

use crate::error::Result;
use crate::store::Record;

/// Decode a whole table, or return an empty vector on any decode error.
///
/// Malformed tables are a fail-soft condition: the diagnostic goes to the
/// log and the caller sees "no data".
pub(crate) fn read_rows_or_empty<R: Record>(reader: impl io::Read) -> Vec<R> {
    match read_rows(reader) {
        Ok(rows) => rows,
        Err(err) => {
            log::warn!("table {} is malformed, treating as empty: {err}", R::TABLE);
            Vec::new()
        }
    }
}

pub(crate) fn read_rows<R: Record>(reader: impl io::Read) -> std::result::Result<Vec<R>, csv::Error> {
    let mut reader = csv::Reader::from_reader(reader);
    reader.deserialize().collect()
}

/// Encode a whole table, header row first.
///
/// The header row is written explicitly from [`Record::HEADERS`] so that an
/// empty table still round-trips as a header-only file.
pub(crate) fn write_rows<R: Record>(writer: impl io::Write, rows: &[R]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(R::HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
