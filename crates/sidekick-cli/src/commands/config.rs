//! `config init | show | path`.

use crate::app::AppContext;
use crate::cli::ConfigCommands;
use crate::config::{write_config, SidekickConfig};
use crate::errors::CliError;

pub fn handle_config(ctx: &AppContext, command: ConfigCommands) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Init { force } => {
            let path = ctx.config_path()?;
            if path.exists() && !force {
                return Err(CliError::invalid_input(format!(
                    "Config already exists at {} (use --force to overwrite)",
                    path.display()
                ))
                .into());
            }
            write_config(&path, &SidekickConfig::default())?;
            if !ctx.quiet() {
                println!("Wrote default config to {}", path.display());
            }
        }
        ConfigCommands::Show { json } => {
            let config = ctx.config()?;
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                print!(
                    "{}",
                    toml::to_string_pretty(config)
                        .map_err(|e| anyhow::anyhow!("TOML error: {}", e))?
                );
            }
        }
        ConfigCommands::Path => {
            println!("{}", ctx.config_path()?.display());
        }
    }
    Ok(())
}
