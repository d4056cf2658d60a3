use anyhow::Result;
use minatlas_core::aggregate::aggregate_production;
use minatlas_core::model::CountryId;
use minatlas_core::resolve::{mineral_color, resolve_country_name};
use minatlas_core::store::CsvStore;

pub fn show_production(store: &CsvStore, country_id: u32) -> Result<()> {
    let country_id = CountryId::new(country_id);
    let country = resolve_country_name(store, country_id);
    let summary = aggregate_production(store, country_id);

    if summary.is_empty() {
        println!("No production data for {country}.");
        return Ok(());
    }

    println!("\nLatest production for {country}\n");
    for entry in &summary {
        println!(
            "  {:<12} {:>16.1} t  {:>10.4} B USD export  [{}]",
            entry.mineral,
            entry.production,
            entry.export_value,
            mineral_color(&entry.mineral),
        );
        for site in &entry.sites {
            println!("      - {} ({:.1} t)", site.name, site.production);
        }
    }

    Ok(())
}
