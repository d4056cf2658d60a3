use anyhow::Result;

use crate::config::{self, Config};

#[derive(Debug, clap::Subcommand)]
pub enum ConfigCommand {
    /// Show the current effective configuration
    Show,
    /// Show the config file path
    Path,
    /// Create the config file with defaults if it doesn't exist
    Init,
}

pub fn run_config(config: &Config, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            println!("Current Configuration");
            println!("=====================\n");

            let config_path = config::config_file_path();
            println!("Config file: {}", config_path.display());
            println!(
                "File exists: {}\n",
                if config_path.exists() {
                    "yes"
                } else {
                    "no (using defaults)"
                }
            );

            println!("Settings:");
            println!("  data_dir: {}", config.data_dir.display());

            println!("\nPriority: CLI args > ENV vars (MINA_*) > Config file > Defaults");
        }
        ConfigCommand::Path => {
            println!("{}", config::config_file_path().display());
        }
        ConfigCommand::Init => {
            let created = config::ensure_config_file()?;
            let config_path = config::config_file_path();
            if created {
                println!("✓ Created config file: {}", config_path.display());
                println!("\nEdit this file to configure minatlas.");
            } else {
                println!("Config file already exists: {}", config_path.display());
            }
        }
    }

    Ok(())
}
