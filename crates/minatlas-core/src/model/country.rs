use serde::{Deserialize, Serialize};

use crate::model::ids::CountryId;
use crate::store::Record;

/// Country-level economic reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    #[serde(rename = "CountryID")]
    pub id: CountryId,
    #[serde(rename = "CountryName")]
    pub name: String,
    #[serde(rename = "GDP_BillionUSD")]
    pub gdp_billion_usd: f64,
    #[serde(rename = "MiningRevenue_BillionUSD")]
    pub mining_revenue_billion_usd: f64,
    #[serde(rename = "KeyProjects")]
    pub key_projects: String,
    #[serde(rename = "Population_Millions")]
    pub population_millions: f64,
    #[serde(rename = "MiningContribution_GDP")]
    pub mining_contribution_gdp: f64,
}

impl Country {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: CountryId,
        name: impl Into<String>,
        gdp_billion_usd: f64,
        mining_revenue_billion_usd: f64,
        key_projects: impl Into<String>,
        population_millions: f64,
        mining_contribution_gdp: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            gdp_billion_usd,
            mining_revenue_billion_usd,
            key_projects: key_projects.into(),
            population_millions,
            mining_contribution_gdp,
        }
    }
}

impl Record for Country {
    const TABLE: &'static str = "countries";
    const HEADERS: &'static [&'static str] = &[
        "CountryID",
        "CountryName",
        "GDP_BillionUSD",
        "MiningRevenue_BillionUSD",
        "KeyProjects",
        "Population_Millions",
        "MiningContribution_GDP",
    ];

    fn key(&self) -> u32 {
        self.id.get()
    }
}
