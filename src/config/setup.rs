//! Interactive setup wizard for first-time configuration
//!
//! This module handles the prompts for creating an initial configuration
//! when markr is run for the first time from a terminal.

use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::PathBuf;

use super::{DEFAULT_PAGE_SIZE, MarkrConfig};

/// Interactive first-time setup - prompts for store location and page size
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - The system data directory cannot be determined
/// - User input cannot be read
/// - The configuration cannot be saved
pub fn first_time_setup() -> Result<MarkrConfig, ConfigError> {
    println!("Welcome to markr! Let's set up your bookmark store.\n");

    let default_path = MarkrConfig::default_database_path()?;

    let db_path_str: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Store location")
        .default(default_path.to_string_lossy().to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let page_size: usize = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Bookmarks per page")
        .default(DEFAULT_PAGE_SIZE)
        .validate_with(validate_page_size)
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let config = MarkrConfig {
        database: Some(PathBuf::from(db_path_str)),
        page_size,
        quiet: false,
    };

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}

fn validate_page_size(n: &usize) -> Result<(), &'static str> {
    if *n == 0 {
        Err("must be at least 1")
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_prompt_rejects_zero() {
        assert_eq!(validate_page_size(&0), Err("must be at least 1"));
        assert_eq!(validate_page_size(&1), Ok(()));
        assert_eq!(validate_page_size(&DEFAULT_PAGE_SIZE), Ok(()));
    }
}
