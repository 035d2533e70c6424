//! Logger setup.
//!
//! The terminal belongs to the animation, so log records go to a file or
//! nowhere.

use std::fs::OpenOptions;

use color_eyre::eyre::WrapErr;
use env_logger::{Builder, Target};
use netpulse_config::Config;

/// Route `log` output to the configured file, if any.
pub fn init(config: &Config) -> color_eyre::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file '{}'", path.display()))?;

    Builder::new()
        .parse_filters(&config.log_level)
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .wrap_err("failed to install logger")?;

    log::info!("logging to {}", path.display());
    Ok(())
}
