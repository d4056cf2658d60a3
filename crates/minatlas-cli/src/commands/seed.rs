use anyhow::Result;
use minatlas_core::store::CsvStore;
use minatlas_seed::seed_all;

pub fn run_seed(store: &CsvStore) -> Result<()> {
    let report = seed_all(store)?;

    if report.total() == 0 {
        println!("All tables already populated; nothing to do.");
    } else {
        println!(
            "Seeded {} rows: {} roles, {} minerals, {} countries, {} sites, {} statistics",
            report.total(),
            report.roles,
            report.minerals,
            report.countries,
            report.sites,
            report.production_stats,
        );
        println!("Data directory: {}", store.dir().display());
    }

    Ok(())
}
