//! The record store: one CSV file per entity table.
//!
//! Tables are loaded and rewritten whole. There is no locking, no transaction
//! boundary, and no optimistic-concurrency check: concurrent writers can
//! interleave load-modify-save cycles and lose updates, and [`TableStore::next_id`]
//! can hand the same key to two racing writers. This is a documented
//! limitation of the format, acceptable for the single-process, mostly-read
//! deployments the store targets.

mod codec;
mod files;
mod memory;

pub use files::CsvStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// A row type backed by one table file.
///
/// `HEADERS` pins the header spelling and column order of the persisted file;
/// both are part of the compatibility surface and must match the serde renames
/// on the record's fields.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// File stem of the backing table (`users` is stored as `users.csv`).
    const TABLE: &'static str;

    /// Header row, in column order.
    const HEADERS: &'static [&'static str];

    /// The row's surrogate key.
    fn key(&self) -> u32;
}

/// Load/append/replace access to the entity tables.
///
/// Implementations are injected into every query and mutation so tests can
/// substitute [`MemoryStore`] for the on-disk [`CsvStore`].
pub trait TableStore {
    /// Load all rows of `R`'s table in insertion order.
    ///
    /// A missing or empty table yields an empty vector. A malformed table is
    /// logged and also yields an empty vector; callers must tolerate "no
    /// data" at any time.
    fn load<R: Record>(&self) -> Vec<R>;

    /// Rewrite `R`'s table to exactly `records`.
    fn replace<R: Record>(&self, records: &[R]) -> Result<()>;

    /// Append one row via a whole-table load-modify-save cycle.
    fn append<R: Record>(&self, record: &R) -> Result<()> {
        let mut rows = self.load::<R>();
        rows.push(record.clone());
        self.replace(&rows)
    }

    /// Next surrogate key: `max(existing) + 1`, or 1 for an empty table.
    ///
    /// Racy under concurrent writers; see the module documentation.
    fn next_id<R: Record>(&self) -> u32 {
        self.load::<R>()
            .iter()
            .map(Record::key)
            .max()
            .map_or(1, |max| max + 1)
    }
}
