use serde::{Deserialize, Serialize};

use crate::model::ids::{CountryId, MineralId, StatId};
use crate::store::Record;

/// A yearly production/export figure for a (country, mineral) pair,
/// independent of any specific site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionStat {
    #[serde(rename = "StatID")]
    pub id: StatId,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "CountryID")]
    pub country_id: CountryId,
    #[serde(rename = "MineralID")]
    pub mineral_id: MineralId,
    #[serde(rename = "Production_tonnes")]
    pub production_tonnes: f64,
    #[serde(rename = "ExportValue_BillionUSD")]
    pub export_value_billion_usd: f64,
}

impl ProductionStat {
    #[must_use]
    pub fn new(
        id: StatId,
        year: i32,
        country_id: CountryId,
        mineral_id: MineralId,
        production_tonnes: f64,
        export_value_billion_usd: f64,
    ) -> Self {
        Self {
            id,
            year,
            country_id,
            mineral_id,
            production_tonnes,
            export_value_billion_usd,
        }
    }
}

impl Record for ProductionStat {
    const TABLE: &'static str = "production_stats";
    const HEADERS: &'static [&'static str] = &[
        "StatID",
        "Year",
        "CountryID",
        "MineralID",
        "Production_tonnes",
        "ExportValue_BillionUSD",
    ];

    fn key(&self) -> u32 {
        self.id.get()
    }
}
