//! Configuration management commands

use crate::config::{ConfigFormat, ThreadrunConfig};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the merged configuration
    Show {
        /// Output format
        #[arg(long, value_enum, default_value = "toml")]
        format: ConfigFormat,
    },
    /// Check that the configuration resolves to valid launch settings
    Validate,
}

pub fn execute(args: ConfigArgs, custom_config: Option<&str>) -> Result<()> {
    let config = ThreadrunConfig::load(custom_config, None)?;

    match args.command {
        ConfigCommand::Show { format } => {
            print!("{}", config.export_config(format)?);
        }
        ConfigCommand::Validate => {
            let settings = config.launcher()?;
            println!(
                "Configuration OK: {} workers, {} iterations, {}ms delay",
                settings.worker_count, settings.iterations, settings.delay_ms
            );
        }
    }

    Ok(())
}
