use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use minatlas_core::store::CsvStore;

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "minatlas", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the data directory holding the CSV tables
    /// (default: platform data dir, e.g. ~/.local/share/minatlas/data)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Seed empty reference tables and generate production statistics
    ///
    /// Populates any absent-or-empty table from the built-in catalogs:
    /// roles, minerals, countries, mining sites, and four years of
    /// deterministic production statistics. Tables that already hold rows
    /// are left untouched, so seeding an initialized data directory is a
    /// no-op.
    Seed,
    /// Show row counts for every table
    Status,
    /// Show the latest-year production rollup for one country
    Production {
        /// Country id (see `minatlas status` for the catalog)
        country_id: u32,
    },
    /// Show yearly production and export-value summaries
    Trends,
    /// Inspect or extend the mineral catalog
    Mineral {
        #[command(subcommand)]
        command: commands::MineralCommand,
    },
    /// Manage user accounts
    User {
        #[command(subcommand)]
        command: commands::UserCommand,
    },
    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        command: commands::ConfigCommand,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match cli.data_dir {
        Some(dir) => config::Config::load_with_data_dir(dir)?,
        None => config::Config::load()?,
    };

    log::debug!("using data directory {}", config.data_dir.display());
    let store = CsvStore::open(&config.data_dir)?;

    match cli.command {
        Commands::Seed => commands::run_seed(&store),
        Commands::Status => commands::show_status(&store),
        Commands::Production { country_id } => commands::show_production(&store, country_id),
        Commands::Trends => commands::show_trends(&store),
        Commands::Mineral { command } => commands::run_mineral(&store, command),
        Commands::User { command } => commands::run_user(&store, command),
        Commands::Config { command } => commands::run_config(&config, command),
    }
}
