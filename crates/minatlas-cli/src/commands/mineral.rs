use anyhow::Result;
use minatlas_core::catalog::add_mineral;
use minatlas_core::model::Mineral;
use minatlas_core::resolve::mineral_color;
use minatlas_core::store::{CsvStore, TableStore};

#[derive(Debug, clap::Subcommand)]
pub enum MineralCommand {
    /// List the mineral catalog
    List,
    /// Add a mineral to the catalog (admin action; minerals are never
    /// edited or deleted once added)
    Add {
        name: String,
        /// Indicative market price in USD per tonne
        #[arg(long)]
        price: f64,
        #[arg(long, default_value = "")]
        description: String,
    },
}

pub fn run_mineral(store: &CsvStore, command: MineralCommand) -> Result<()> {
    match command {
        MineralCommand::List => {
            let minerals = store.load::<Mineral>();
            if minerals.is_empty() {
                println!("The mineral catalog is empty. Run `minatlas seed` first.");
                return Ok(());
            }
            println!("\nMineral catalog\n");
            for mineral in minerals {
                println!(
                    "  {:>2}  {:<12} {:>16.0} USD/t  [{}]  {}",
                    mineral.id,
                    mineral.name,
                    mineral.market_price_usd_per_tonne,
                    mineral_color(&mineral.name),
                    mineral.description,
                );
            }
        }
        MineralCommand::Add {
            name,
            price,
            description,
        } => {
            let mineral = add_mineral(store, &name, &description, price)?;
            println!("✓ Added mineral {} (id {})", mineral.name, mineral.id);
        }
    }

    Ok(())
}
