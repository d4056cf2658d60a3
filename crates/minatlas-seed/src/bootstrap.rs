//! Per-table seeding of an empty store.

use minatlas_core::model::{Country, Mineral, ProductionStat, Role, Site};
use minatlas_core::store::{Record, TableStore};
use minatlas_core::Result;

use crate::catalog;
use crate::generate::generate_production_stats;

/// Rows written per table by one [`seed_all`] run. Zero means the table was
/// already populated and left untouched.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub roles: usize,
    pub minerals: usize,
    pub countries: usize,
    pub sites: usize,
    pub production_stats: usize,
}

impl SeedReport {
    /// Total rows written across all tables.
    #[must_use]
    pub fn total(&self) -> usize {
        self.roles + self.minerals + self.countries + self.sites + self.production_stats
    }
}

fn seed_table<S, R>(store: &S, rows: &[R]) -> Result<usize>
where
    S: TableStore,
    R: Record,
{
    if !store.load::<R>().is_empty() {
        log::debug!("table {} already populated, skipping", R::TABLE);
        return Ok(0);
    }
    store.replace(rows)?;
    log::info!("seeded table {} with {} rows", R::TABLE, rows.len());
    Ok(rows.len())
}

/// Seed every absent-or-empty table from the fixed catalogs and the
/// production generator.
///
/// Tables that already hold rows are left untouched, so calling this on a
/// populated store is a no-op. The generator does not top up partially
/// edited statistics; it only ever writes into an empty table.
pub fn seed_all<S: TableStore>(store: &S) -> Result<SeedReport> {
    let report = SeedReport {
        roles: seed_table::<_, Role>(store, &catalog::roles())?,
        minerals: seed_table::<_, Mineral>(store, &catalog::minerals())?,
        countries: seed_table::<_, Country>(store, &catalog::countries())?,
        sites: seed_table::<_, Site>(store, &catalog::sites())?,
        production_stats: seed_table::<_, ProductionStat>(store, &generate_production_stats())?,
    };
    Ok(report)
}
