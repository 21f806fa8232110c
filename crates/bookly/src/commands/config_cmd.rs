//! Config command handlers. These run without a server connection.

use bookly_config::{Config, config_path, load};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;

use super::util;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let config = load()?;
            let rendered = toml::to_string_pretty(&config).map_err(|e| CliError::Config {
                message: e.to_string(),
            })?;
            print!("{rendered}");
            Ok(())
        }

        ConfigCommand::Init => {
            let path = config_path();
            if path.exists()
                && !util::confirm(
                    &format!("Overwrite existing config at {}?", path.display()),
                    global.yes,
                )?
            {
                return Ok(());
            }
            Config::default().save(&path)?;
            if !global.quiet {
                eprintln!("Wrote {}", path.display());
            }
            Ok(())
        }

        ConfigCommand::Path => {
            println!("{}", config_path().display());
            Ok(())
        }
    }
}
