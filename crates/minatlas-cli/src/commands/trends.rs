use std::collections::BTreeMap;

use anyhow::Result;
use minatlas_core::model::CountryId;
use minatlas_core::resolve::resolve_country_name;
use minatlas_core::store::CsvStore;
use minatlas_core::trends::trends;

/// Print the yearly-by-mineral and export-by-country summaries.
///
/// The join itself carries no aggregation; the groupings below are the
/// chart-feeding derivations, computed caller-side.
pub fn show_trends(store: &CsvStore) -> Result<()> {
    let Some(rows) = trends(store) else {
        println!("No production data to chart yet. Run `minatlas seed` first.");
        return Ok(());
    };

    let mut yearly: BTreeMap<i32, BTreeMap<String, f64>> = BTreeMap::new();
    let mut exports: BTreeMap<CountryId, f64> = BTreeMap::new();
    for row in &rows {
        *yearly
            .entry(row.year)
            .or_default()
            .entry(row.mineral_name.clone())
            .or_insert(0.0) += row.production_tonnes;
        *exports.entry(row.country_id).or_insert(0.0) += row.export_value_billion_usd;
    }

    println!("\nYearly production by mineral (tonnes)\n");
    for (year, by_mineral) in &yearly {
        println!("  {year}");
        for (mineral, production) in by_mineral {
            println!("    {:<12} {:>16.1}", mineral, production);
        }
    }

    println!("\nTotal export value by country (billion USD)\n");
    for (&country_id, export) in &exports {
        println!(
            "  {:<14} {:>10.4}",
            resolve_country_name(store, country_id),
            export
        );
    }

    Ok(())
}
