//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against the session, reporting through an
//! [`OutputWriter`](crate::ui::OutputWriter).

pub mod backup;
pub mod config;
pub mod delete;
pub mod list;
pub mod open;
pub mod save;
pub mod suggest;
pub mod tags;

// Re-export execute functions for convenience
pub use backup::{export, import};
pub use config::execute as config;
pub use delete::execute as delete;
pub use list::execute as list;
pub use open::execute as open;
pub use save::execute as save;
pub use suggest::execute as suggest;
pub use tags::execute as tags;

use dialoguer::Confirm;

use crate::MarkrError;

/// Prompt user for yes/no confirmation using dialoguer
///
/// Returns `true` without prompting when `assume_yes` is set.
///
/// # Errors
///
/// Returns `MarkrError::InvalidInput` if the prompt cannot be shown.
pub fn confirm(prompt: &str, assume_yes: bool) -> Result<bool, MarkrError> {
    if assume_yes {
        return Ok(true);
    }

    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| MarkrError::InvalidInput(format!("Confirmation failed: {e}")))
}
