//! Display-name resolution with deterministic fallbacks.
//!
//! Every resolver is a pure function of current store contents plus the input
//! id. An id that does not resolve is not an error: the caller gets a
//! placeholder name and the request carries on.

use crate::model::{Country, CountryId, Mineral, MineralId, Role, RoleId};
use crate::store::TableStore;

// ---------------------------------------------------------------------------
// Mineral → map-marker color
// ---------------------------------------------------------------------------

/// Marker color tokens for the known minerals.
const MINERAL_COLORS: &[(&str, &str)] = &[
    ("Gold", "orange"),
    ("Platinum", "lightgray"),
    ("Copper", "darkred"),
    ("Diamonds", "lightblue"),
    ("Cobalt", "blue"),
    ("Bauxite", "red"),
    ("Uranium", "green"),
    ("Manganese", "gray"),
];

/// Fallback color for minerals outside the fixed table.
const DEFAULT_COLOR: &str = "purple";

/// Map a mineral name to its marker color token.
#[must_use]
pub fn mineral_color(name: &str) -> &'static str {
    for &(mineral, color) in MINERAL_COLORS {
        if mineral == name {
            return color;
        }
    }
    DEFAULT_COLOR
}

// ---------------------------------------------------------------------------
// Id → display name
// ---------------------------------------------------------------------------

/// Resolve a role id to its name, defaulting to `"Researcher"`.
pub fn resolve_role_name<S: TableStore>(store: &S, id: RoleId) -> String {
    store
        .load::<Role>()
        .into_iter()
        .find(|role| role.id == id)
        .map_or_else(|| Role::RESEARCHER.to_string(), |role| role.name)
}

/// Resolve a country id to its name, defaulting to `"Country_{id}"`.
pub fn resolve_country_name<S: TableStore>(store: &S, id: CountryId) -> String {
    store
        .load::<Country>()
        .into_iter()
        .find(|country| country.id == id)
        .map_or_else(|| format!("Country_{id}"), |country| country.name)
}

/// Resolve a mineral id to its name, defaulting to `"Mineral_{id}"`.
pub fn resolve_mineral_name<S: TableStore>(store: &S, id: MineralId) -> String {
    store
        .load::<Mineral>()
        .into_iter()
        .find(|mineral| mineral.id == id)
        .map_or_else(|| format!("Mineral_{id}"), |mineral| mineral.name)
}
