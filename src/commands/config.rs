//! Config command - read and change settings

use std::path::Path;

use crate::{MarkrError, cli::ConfigCommands, config::MarkrConfig, ui::OutputWriter};

type Result<T> = std::result::Result<T, MarkrError>;

/// Execute a config subcommand against the default config file
///
/// # Errors
///
/// Returns an error if the config location cannot be determined or the
/// subcommand fails.
pub fn execute(
    config: &mut MarkrConfig,
    command: &ConfigCommands,
    output: &dyn OutputWriter,
) -> Result<()> {
    let path = MarkrConfig::config_path()?;
    execute_at(config, command, &path, output)
}

/// Execute a config subcommand, persisting changes to `path`
///
/// # Errors
///
/// Returns `MarkrError::InvalidInput` for a malformed `key=value`, and
/// `MarkrError::ConfigError` for unknown keys, invalid values or a failed save.
pub fn execute_at(
    config: &mut MarkrConfig,
    command: &ConfigCommands,
    path: &Path,
    output: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                MarkrError::InvalidInput(format!(
                    "Invalid format: '{setting}'. Use key=value (e.g., page_size=10)"
                ))
            })?;
            let (key, value) = (key.trim(), value.trim());
            config.set_value(key, value)?;
            config.save_to(path)?;
            output.success(&format!("Set {key} = {value}"));
        }
        ConfigCommands::Get { key } => {
            output.write(&config.get_value(key)?);
        }
    }
    Ok(())
}
