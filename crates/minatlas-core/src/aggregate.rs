//! Per-country production rollups.
//!
//! [`aggregate_production`] merges the latest year of production statistics
//! with the static site listings for one country, keyed by resolved mineral
//! name.

use serde::Serialize;

use crate::model::{CountryId, ProductionStat, Site};
use crate::resolve::resolve_mineral_name;
use crate::store::TableStore;

/// One site row as presented inside a mineral rollup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteListing {
    pub name: String,
    pub production: f64,
    pub mineral: String,
}

/// Aggregated figures for one mineral in one country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MineralSummary {
    pub mineral: String,
    /// Latest-year production in tonnes, or the first site's nominal figure
    /// when no statistic exists for the mineral.
    pub production: f64,
    pub export_value: f64,
    pub sites: Vec<SiteListing>,
}

impl MineralSummary {
    fn new(mineral: impl Into<String>) -> Self {
        Self {
            mineral: mineral.into(),
            production: 0.0,
            export_value: 0.0,
            sites: Vec::new(),
        }
    }
}

/// Mineral-name-keyed rollup, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductionSummary {
    entries: Vec<MineralSummary>,
}

impl ProductionSummary {
    #[must_use]
    pub fn get(&self, mineral: &str) -> Option<&MineralSummary> {
        self.entries.iter().find(|entry| entry.mineral == mineral)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MineralSummary> {
        self.entries.iter()
    }

    fn entry_mut(&mut self, mineral: &str) -> &mut MineralSummary {
        if let Some(idx) = self.entries.iter().position(|entry| entry.mineral == mineral) {
            &mut self.entries[idx]
        } else {
            self.entries.push(MineralSummary::new(mineral));
            let last = self.entries.len() - 1;
            &mut self.entries[last]
        }
    }
}

impl<'a> IntoIterator for &'a ProductionSummary {
    type Item = &'a MineralSummary;
    type IntoIter = std::slice::Iter<'a, MineralSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Roll up one country's production by mineral.
///
/// Statistics are restricted to the latest year present for the country and
/// summed per mineral (a mineral may have several rows in one year). Static
/// sites are then merged in: a site whose mineral has no statistic entry
/// seeds that entry with the site's nominal production and zero export value.
/// Only the first such site seeds the figure; further sites for the same
/// mineral are appended to the listing without re-summing production.
pub fn aggregate_production<S: TableStore>(store: &S, country_id: CountryId) -> ProductionSummary {
    let mut summary = ProductionSummary::default();

    let stats: Vec<ProductionStat> = store
        .load::<ProductionStat>()
        .into_iter()
        .filter(|stat| stat.country_id == country_id)
        .collect();

    if let Some(latest) = stats.iter().map(|stat| stat.year).max() {
        for stat in stats.iter().filter(|stat| stat.year == latest) {
            let mineral = resolve_mineral_name(store, stat.mineral_id);
            let entry = summary.entry_mut(&mineral);
            entry.production += stat.production_tonnes;
            entry.export_value += stat.export_value_billion_usd;
        }
    }

    for site in store
        .load::<Site>()
        .into_iter()
        .filter(|site| site.country_id == country_id)
    {
        let mineral = resolve_mineral_name(store, site.mineral_id);
        if summary.get(&mineral).is_none() {
            let entry = summary.entry_mut(&mineral);
            entry.production = site.production_tonnes;
        }
        summary.entry_mut(&mineral).sites.push(SiteListing {
            name: site.name,
            production: site.production_tonnes,
            mineral: mineral.clone(),
        });
    }

    summary
}
