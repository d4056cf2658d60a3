use serde::{Deserialize, Serialize};

use crate::model::ids::MineralId;
use crate::store::Record;

/// A mineral commodity with an indicative market price.
///
/// Minerals are append-only: an administrator can add new ones, but existing
/// rows are never edited or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mineral {
    #[serde(rename = "MineralID")]
    pub id: MineralId,
    #[serde(rename = "MineralName")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "MarketPriceUSD_per_tonne")]
    pub market_price_usd_per_tonne: f64,
}

impl Mineral {
    #[must_use]
    pub fn new(
        id: MineralId,
        name: impl Into<String>,
        description: impl Into<String>,
        market_price_usd_per_tonne: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            market_price_usd_per_tonne,
        }
    }
}

impl Record for Mineral {
    const TABLE: &'static str = "minerals";
    const HEADERS: &'static [&'static str] = &[
        "MineralID",
        "MineralName",
        "Description",
        "MarketPriceUSD_per_tonne",
    ];

    fn key(&self) -> u32 {
        self.id.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mineral_new() {
        let mineral = Mineral::new(MineralId::new(4), "Diamonds", "Gem-quality stones", 1.5e9);
        assert_eq!(mineral.name, "Diamonds");
        assert_eq!(mineral.key(), 4);
    }
}
