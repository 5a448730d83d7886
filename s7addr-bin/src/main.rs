mod cli;
mod error;
mod logger;
mod settings;

use clap::Parser;
use cli::Cli;
use error::{AppError, AppResult};
use logger::Logger;
use settings::{Settings, DEFAULT_CONFIG_FILE_NAME};
use std::{env::current_dir, io};

/// Loads configuration, installs logging and runs the requested subcommand.
fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // Fall back to the default file in the working directory
    let config_path = match cli.config {
        Some(ref p) => p.clone(),
        None => {
            let dir = current_dir()
                .map_err(|e| AppError::from(format!("Failed to get current directory: {e}")))?;
            dir.join(DEFAULT_CONFIG_FILE_NAME)
        }
    };

    let settings = Settings::new(&config_path)?;
    let mut logger = Logger::new(settings.log.level()?, settings.log.dir.clone().map(Into::into));
    logger.initialize()?;
    tracing::debug!(config = %config_path.display(), level = %logger.level(), "settings loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::run(&cli.command, &settings, &mut out)
}
