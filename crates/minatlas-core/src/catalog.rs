//! Mutations on the reference tables.
//!
//! Minerals are the only reference table an administrator can extend at
//! runtime; rows are never edited or deleted once added.

use crate::error::Result;
use crate::model::{Mineral, MineralId};
use crate::store::TableStore;

/// Append a new mineral with the next surrogate key.
pub fn add_mineral<S: TableStore>(
    store: &S,
    name: &str,
    description: &str,
    market_price_usd_per_tonne: f64,
) -> Result<Mineral> {
    let mineral = Mineral::new(
        MineralId::new(store.next_id::<Mineral>()),
        name,
        description,
        market_price_usd_per_tonne,
    );
    store.append(&mineral)?;
    log::info!("added mineral {name}");
    Ok(mineral)
}
