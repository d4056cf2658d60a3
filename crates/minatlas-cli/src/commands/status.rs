use anyhow::Result;
use minatlas_core::model::{Country, Mineral, ProductionStat, Role, Site, User};
use minatlas_core::store::{CsvStore, TableStore};

pub fn show_status(store: &CsvStore) -> Result<()> {
    println!("\n📊 Minatlas Status\n");
    println!("  Data directory: {}", store.dir().display());
    println!("  Roles: {}", store.load::<Role>().len());
    println!("  Users: {}", store.load::<User>().len());
    println!("  Minerals: {}", store.load::<Mineral>().len());
    println!("  Countries: {}", store.load::<Country>().len());
    println!("  Sites: {}", store.load::<Site>().len());
    println!(
        "  Production statistics: {}",
        store.load::<ProductionStat>().len()
    );

    let countries = store.load::<Country>();
    if countries.is_empty() {
        println!("\n  Run `minatlas seed` to populate the reference tables");
    } else {
        println!("\n  Countries:");
        for country in countries {
            println!("    {:>2}  {}", country.id, country.name);
        }
    }

    Ok(())
}
