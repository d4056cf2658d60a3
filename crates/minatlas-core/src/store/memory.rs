use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::Result;
use crate::store::{codec, Record, TableStore};

/// An in-memory store for tests.
///
/// Tables are held as encoded CSV buffers so every load and save goes through
/// the same codec as the on-disk store, header row included.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RefCell<HashMap<&'static str, Vec<u8>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TableStore for MemoryStore {
    fn load<R: Record>(&self) -> Vec<R> {
        match self.tables.borrow().get(R::TABLE) {
            Some(bytes) => codec::read_rows_or_empty(bytes.as_slice()),
            None => Vec::new(),
        }
    }

    fn replace<R: Record>(&self, records: &[R]) -> Result<()> {
        let mut buf = Vec::new();
        codec::write_rows(&mut buf, records)?;
        self.tables.borrow_mut().insert(R::TABLE, buf);
        Ok(())
    }
}
