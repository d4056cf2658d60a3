//! The production-statistics × mineral join used by time-series views.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::{CountryId, Mineral, MineralId, ProductionStat, StatId};
use crate::store::TableStore;

/// One joined row of the statistics table with its mineral name attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendRow {
    pub stat_id: StatId,
    pub year: i32,
    pub country_id: CountryId,
    pub mineral_id: MineralId,
    pub mineral_name: String,
    pub production_tonnes: f64,
    pub export_value_billion_usd: f64,
}

/// Inner-join the production statistics with mineral names.
///
/// Returns `None` when the statistics table itself is empty, so callers can
/// tell "no data at all" apart from a join that dropped every row. No
/// aggregation happens here; yearly and per-country sums are derived by the
/// caller.
pub fn trends<S: TableStore>(store: &S) -> Option<Vec<TrendRow>> {
    let stats = store.load::<ProductionStat>();
    if stats.is_empty() {
        return None;
    }

    let minerals: HashMap<MineralId, String> = store
        .load::<Mineral>()
        .into_iter()
        .map(|mineral| (mineral.id, mineral.name))
        .collect();

    let rows = stats
        .into_iter()
        .filter_map(|stat| {
            minerals.get(&stat.mineral_id).map(|name| TrendRow {
                stat_id: stat.id,
                year: stat.year,
                country_id: stat.country_id,
                mineral_id: stat.mineral_id,
                mineral_name: name.clone(),
                production_tonnes: stat.production_tonnes,
                export_value_billion_usd: stat.export_value_billion_usd,
            })
        })
        .collect();

    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn stat(id: u32, year: i32, country: u32, mineral: u32) -> ProductionStat {
        ProductionStat::new(
            StatId::new(id),
            year,
            CountryId::new(country),
            MineralId::new(mineral),
            100.0,
            1.0,
        )
    }

    #[test]
    fn test_empty_statistics_table_is_no_data() {
        let store = MemoryStore::new();
        assert!(trends(&store).is_none());
    }

    #[test]
    fn test_join_attaches_mineral_names() {
        let store = MemoryStore::new();
        store
            .replace(&[Mineral::new(MineralId::new(1), "Gold", "metal", 6.0e7)])
            .unwrap();
        store.replace(&[stat(1, 2022, 1, 1), stat(2, 2023, 1, 1)]).unwrap();

        let rows = trends(&store).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.mineral_name == "Gold"));
    }

    #[test]
    fn test_inner_join_drops_unknown_minerals() {
        // Statistics exist but no mineral matches: the join is Some but
        // empty, distinct from the no-data None.
        let store = MemoryStore::new();
        store.replace(&[stat(1, 2023, 1, 99)]).unwrap();

        let rows = trends(&store).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_join_preserves_row_order() {
        let store = MemoryStore::new();
        store
            .replace(&[
                Mineral::new(MineralId::new(1), "Gold", "metal", 6.0e7),
                Mineral::new(MineralId::new(4), "Diamonds", "gems", 1.0e9),
            ])
            .unwrap();
        store
            .replace(&[stat(1, 2020, 1, 1), stat(2, 2020, 3, 4), stat(3, 2021, 1, 1)])
            .unwrap();

        let rows = trends(&store).unwrap();
        let ids: Vec<u32> = rows.iter().map(|row| row.stat_id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
