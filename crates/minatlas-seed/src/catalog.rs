//! The fixed literal catalogs behind the reference tables.
//!
//! These rows double as test fixtures; ids and figures are part of the
//! fixture surface and should not be reshuffled.

use minatlas_core::model::{
    Country, CountryId, Mineral, MineralId, Role, RoleId, Site, SiteId,
};

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

const ROLES: &[(u32, &str, &str)] = &[
    (
        1,
        "Admin",
        "manage_users,add_minerals,view_dashboard,view_maps,view_trends",
    ),
    (2, "Researcher", "view_dashboard,view_maps,view_trends"),
    (3, "Analyst", "view_dashboard,view_trends"),
];

#[must_use]
pub fn roles() -> Vec<Role> {
    ROLES
        .iter()
        .map(|&(id, name, permissions)| Role::new(RoleId::new(id), name, permissions))
        .collect()
}

// ---------------------------------------------------------------------------
// Minerals
// ---------------------------------------------------------------------------

const MINERALS: &[(u32, &str, &str, f64)] = &[
    (
        1,
        "Gold",
        "Precious metal held in reserves and used in jewellery and electronics",
        61_000_000.0,
    ),
    (
        2,
        "Platinum",
        "Precious metal for catalytic converters and jewellery",
        29_000_000.0,
    ),
    (3, "Copper", "Base metal for wiring and electrification", 8_500.0),
    (
        4,
        "Diamonds",
        "Gem-quality and industrial stones, reported in carats",
        750_000_000.0,
    ),
    (5, "Cobalt", "Battery cathode metal", 33_000.0),
    (6, "Bauxite", "Primary aluminium ore", 65.0),
    (7, "Uranium", "Nuclear reactor fuel", 130_000.0),
    (8, "Manganese", "Steel alloying metal", 1_700.0),
];

#[must_use]
pub fn minerals() -> Vec<Mineral> {
    MINERALS
        .iter()
        .map(|&(id, name, description, price)| {
            Mineral::new(MineralId::new(id), name, description, price)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Countries
// ---------------------------------------------------------------------------

const COUNTRIES: &[(u32, &str, f64, f64, &str, f64, f64)] = &[
    (
        1,
        "South Africa",
        405.0,
        124.0,
        "Mponeng; Mogalakwena; Hotazel",
        60.4,
        7.5,
    ),
    (2, "Ghana", 77.0, 6.8, "Obuasi; Tarkwa", 32.8, 6.0),
    (3, "Botswana", 20.4, 4.9, "Orapa; Jwaneng", 2.6, 24.0),
    (
        4,
        "DR Congo",
        64.0,
        16.0,
        "Kamoa-Kakula; Mutanda",
        99.0,
        25.0,
    ),
    (5, "Zambia", 29.2, 8.0, "Kansanshi; Konkola", 19.6, 27.5),
    (6, "Tanzania", 75.7, 3.1, "Geita; Williamson", 63.6, 4.1),
    (7, "Zimbabwe", 26.4, 5.2, "Ngezi; Blanket", 15.1, 19.7),
    (8, "Namibia", 12.6, 1.6, "Rossing; Husab", 2.5, 12.7),
];

#[must_use]
pub fn countries() -> Vec<Country> {
    COUNTRIES
        .iter()
        .map(
            |&(id, name, gdp, mining_revenue, key_projects, population, contribution)| {
                Country::new(
                    CountryId::new(id),
                    name,
                    gdp,
                    mining_revenue,
                    key_projects,
                    population,
                    contribution,
                )
            },
        )
        .collect()
}

// ---------------------------------------------------------------------------
// Sites
// ---------------------------------------------------------------------------

const SITES: &[(u32, &str, u32, u32, f64, f64, f64)] = &[
    (1, "Mponeng Gold Mine", 1, 1, -26.42, 27.40, 9.0),
    (2, "Mogalakwena Platinum Mine", 1, 2, -23.99, 28.92, 15.0),
    (3, "Hotazel Manganese Mine", 1, 8, -27.20, 22.97, 3_300_000.0),
    (4, "Obuasi Gold Mine", 2, 1, 6.20, -1.67, 7.5),
    (5, "Tarkwa Gold Mine", 2, 1, 5.30, -1.99, 15.5),
    (6, "Orapa Diamond Mine", 3, 4, -21.31, 25.37, 24_000_000.0),
    (7, "Jwaneng Diamond Mine", 3, 4, -24.52, 24.73, 13_500_000.0),
    (8, "Kamoa-Kakula Copper Mine", 4, 3, -10.77, 25.87, 393_000.0),
    (9, "Mutanda Cobalt Mine", 4, 5, -10.80, 25.80, 27_000.0),
    (10, "Kansanshi Copper Mine", 5, 3, -12.09, 26.43, 231_000.0),
    (11, "Geita Gold Mine", 6, 1, -2.87, 32.23, 9.1),
    (12, "Ngezi Platinum Mine", 7, 2, -18.62, 30.42, 8.6),
    (13, "Rossing Uranium Mine", 8, 7, -22.48, 15.03, 2_750.0),
    (14, "Husab Uranium Mine", 8, 7, -22.62, 15.03, 3_900.0),
];

#[must_use]
pub fn sites() -> Vec<Site> {
    SITES
        .iter()
        .map(
            |&(id, name, country, mineral, latitude, longitude, production)| {
                Site::new(
                    SiteId::new(id),
                    name,
                    CountryId::new(country),
                    MineralId::new(mineral),
                    latitude,
                    longitude,
                    production,
                )
            },
        )
        .collect()
}

// ---------------------------------------------------------------------------
// Production ranges
// ---------------------------------------------------------------------------

/// Per (country, mineral) pair: minimum production, maximum production
/// (tonnes), and the export multiplier converting tonnes to billion USD.
pub const PRODUCTION_RANGES: &[(u32, u32, u64, u64, f64)] = &[
    // South Africa
    (1, 1, 80, 120, 5.5e-2),
    (1, 2, 110, 140, 2.8e-2),
    (1, 8, 14_000_000, 16_500_000, 2.0e-9),
    // Ghana
    (2, 1, 110, 140, 6.0e-2),
    (2, 6, 1_000_000, 1_500_000, 6.5e-8),
    (2, 8, 2_500_000, 3_500_000, 1.7e-9),
    // Botswana
    (3, 4, 20_000_000, 25_000_000, 2.8e-7),
    (3, 3, 150_000, 280_000, 8.5e-6),
    // DR Congo
    (4, 3, 1_800_000, 2_600_000, 8.5e-6),
    (4, 5, 90_000, 130_000, 3.3e-5),
    (4, 4, 8_000_000, 14_000_000, 1.5e-8),
    // Zambia
    (5, 3, 700_000, 900_000, 8.5e-6),
    (5, 5, 8_000, 12_000, 3.3e-5),
    // Tanzania
    (6, 1, 45, 60, 6.0e-2),
    (6, 4, 200_000, 400_000, 2.0e-7),
    // Zimbabwe
    (7, 2, 13, 17, 2.9e-2),
    (7, 1, 25, 35, 5.8e-2),
    // Namibia
    (8, 7, 5_000, 7_000, 1.3e-4),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(roles().len(), 3);
        assert_eq!(minerals().len(), 8);
        assert_eq!(countries().len(), 8);
        assert_eq!(sites().len(), 14);
        assert_eq!(PRODUCTION_RANGES.len(), 18);
    }

    #[test]
    fn test_orapa_fixture_anchors() {
        // Fixture anchors relied on elsewhere: Botswana is country 3,
        // Diamonds is mineral 4, and Orapa carries the nominal 24M figure.
        let botswana = countries().into_iter().find(|c| c.name == "Botswana").unwrap();
        assert_eq!(botswana.id, CountryId::new(3));

        let diamonds = minerals().into_iter().find(|m| m.name == "Diamonds").unwrap();
        assert_eq!(diamonds.id, MineralId::new(4));

        let orapa = sites()
            .into_iter()
            .find(|s| s.name == "Orapa Diamond Mine")
            .unwrap();
        assert_eq!(orapa.country_id, CountryId::new(3));
        assert_eq!(orapa.mineral_id, MineralId::new(4));
        assert!((orapa.production_tonnes - 24_000_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ranges_reference_cataloged_ids() {
        let country_ids: Vec<u32> = countries().iter().map(|c| c.id.get()).collect();
        let mineral_ids: Vec<u32> = minerals().iter().map(|m| m.id.get()).collect();
        for &(country, mineral, min, max, multiplier) in PRODUCTION_RANGES {
            assert!(country_ids.contains(&country));
            assert!(mineral_ids.contains(&mineral));
            assert!(min < max);
            assert!(multiplier > 0.0);
        }
    }

    #[test]
    fn test_every_country_has_a_range_row() {
        for country in countries() {
            assert!(
                PRODUCTION_RANGES.iter().any(|&(c, ..)| c == country.id.get()),
                "no production range for {}",
                country.name
            );
        }
    }

    #[test]
    fn test_site_foreign_keys_resolve() {
        let country_ids: Vec<u32> = countries().iter().map(|c| c.id.get()).collect();
        let mineral_ids: Vec<u32> = minerals().iter().map(|m| m.id.get()).collect();
        for site in sites() {
            assert!(country_ids.contains(&site.country_id.get()));
            assert!(mineral_ids.contains(&site.mineral_id.get()));
        }
    }
}
