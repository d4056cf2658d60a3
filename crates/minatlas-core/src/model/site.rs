use serde::{Deserialize, Serialize};

use crate::model::ids::{CountryId, MineralId, SiteId};
use crate::store::Record;

/// A named mining operation with a fixed location and a nominal annual
/// production figure.
///
/// Sites are static reference data: there are no mutation paths once seeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    #[serde(rename = "SiteID")]
    pub id: SiteId,
    #[serde(rename = "SiteName")]
    pub name: String,
    #[serde(rename = "CountryID")]
    pub country_id: CountryId,
    #[serde(rename = "MineralID")]
    pub mineral_id: MineralId,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Production_tonnes")]
    pub production_tonnes: f64,
}

impl Site {
    #[must_use]
    pub fn new(
        id: SiteId,
        name: impl Into<String>,
        country_id: CountryId,
        mineral_id: MineralId,
        latitude: f64,
        longitude: f64,
        production_tonnes: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            country_id,
            mineral_id,
            latitude,
            longitude,
            production_tonnes,
        }
    }
}

impl Record for Site {
    const TABLE: &'static str = "sites";
    const HEADERS: &'static [&'static str] = &[
        "SiteID",
        "SiteName",
        "CountryID",
        "MineralID",
        "Latitude",
        "Longitude",
        "Production_tonnes",
    ];

    fn key(&self) -> u32 {
        self.id.get()
    }
}
