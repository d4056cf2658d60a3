use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::store::{codec, Record, TableStore};

/// The on-disk store: a directory holding one `<table>.csv` file per entity.
///
/// Writes are whole-file rewrites with no locking; see the module
/// documentation for the concurrency caveats.
#[derive(Debug, Clone)]
pub struct CsvStore {
    dir: PathBuf,
}

impl CsvStore {
    /// Open (or create) a store rooted at the given directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory holding the table files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn table_path(&self, table: &str) -> PathBuf {
        self.dir.join(format!("{table}.csv"))
    }
}

impl TableStore for CsvStore {
    fn load<R: Record>(&self) -> Vec<R> {
        let path = self.table_path(R::TABLE);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                log::warn!("cannot open {}, treating as empty: {err}", path.display());
                return Vec::new();
            }
        };
        codec::read_rows_or_empty(file)
    }

    fn replace<R: Record>(&self, records: &[R]) -> Result<()> {
        let path = self.table_path(R::TABLE);
        let file = File::create(&path)?;
        codec::write_rows(file, records)?;
        log::debug!("rewrote {} ({} rows)", path.display(), records.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Mineral, MineralId, Role, RoleId};
    use tempfile::TempDir;

    #[test]
    fn test_missing_table_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::open(dir.path()).unwrap();
        let roles: Vec<Role> = store.load();
        assert!(roles.is_empty());
    }

    #[test]
    fn test_append_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::open(dir.path()).unwrap();

        let role = Role::new(RoleId::new(1), "Admin", "manage_users");
        store.append(&role).unwrap();
        store
            .append(&Role::new(RoleId::new(2), "Researcher", "view_dashboard"))
            .unwrap();

        let roles: Vec<Role> = store.load();
        assert_eq!(roles.len(), 2);
        assert_eq!(roles[0], role);
        assert_eq!(roles[1].name, "Researcher");
    }

    #[test]
    fn test_replace_rewrites_whole_table() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::open(dir.path()).unwrap();

        store
            .append(&Role::new(RoleId::new(1), "Admin", "manage_users"))
            .unwrap();
        store.replace::<Role>(&[]).unwrap();

        let roles: Vec<Role> = store.load();
        assert!(roles.is_empty());
        // The file survives as a header-only table.
        assert!(dir.path().join("roles.csv").exists());
    }

    #[test]
    fn test_malformed_table_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::open(dir.path()).unwrap();
        std::fs::write(
            dir.path().join("minerals.csv"),
            "MineralID,MineralName,Description,MarketPriceUSD_per_tonne\noops,Gold,metal,60\n",
        )
        .unwrap();

        let minerals: Vec<Mineral> = store.load();
        assert!(minerals.is_empty());
    }

    #[test]
    fn test_next_id_starts_at_one_and_increments() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::open(dir.path()).unwrap();
        assert_eq!(store.next_id::<Mineral>(), 1);

        store
            .append(&Mineral::new(MineralId::new(7), "Uranium", "fuel", 130_000.0))
            .unwrap();
        assert_eq!(store.next_id::<Mineral>(), 8);
    }

    #[test]
    fn test_tables_are_separate_files() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::open(dir.path()).unwrap();

        store
            .append(&Role::new(RoleId::new(1), "Admin", "manage_users"))
            .unwrap();
        store
            .append(&Mineral::new(MineralId::new(1), "Gold", "metal", 60_000_000.0))
            .unwrap();

        assert!(dir.path().join("roles.csv").exists());
        assert!(dir.path().join("minerals.csv").exists());
        assert_eq!(store.load::<Role>().len(), 1);
        assert_eq!(store.load::<Mineral>().len(), 1);
    }
}
