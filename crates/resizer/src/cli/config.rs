//! The `resizer config` command.

use clap::{Args, Subcommand};

use super::ConfigSource;

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration inspection.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the resolved configuration as TOML
    Show {
        #[command(flatten)]
        source: ConfigSource,
    },

    /// Validate the configuration and exit
    Check {
        #[command(flatten)]
        source: ConfigSource,
    },
}

/// Execute the config command.
pub async fn execute(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show { source } => {
            let config = source.load()?;
            println!("{}", config.to_toml()?);
        }

        ConfigCommand::Check { source } => {
            let config = source.load()?;
            tracing::info!(
                "Configuration OK: {} images, suffix {}",
                config.size,
                config.extension
            );
            println!("Configuration OK");
        }
    }

    Ok(())
}
