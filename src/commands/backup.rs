//! Export and import commands

use std::path::Path;

use crate::{MarkrError, backup, session::Session, store::RecordStore, ui::OutputWriter};

type Result<T> = std::result::Result<T, MarkrError>;

/// Destination that sends the backup to standard output
pub const STDOUT_PATH: &str = "-";

/// Export every stored bookmark as a JSON backup
///
/// # Errors
///
/// Returns an error if the store cannot be read or the file cannot be written.
pub fn export<S: RecordStore>(
    session: &Session<S>,
    path: &Path,
    output: &dyn OutputWriter,
) -> Result<()> {
    let backup = session.export()?;

    if path.as_os_str() == STDOUT_PATH {
        output.write(&backup.to_json()?);
        return Ok(());
    }

    backup.write_to(path)?;
    output.success(&format!(
        "Exported {} bookmark(s) to {}",
        backup.bookmarks.len(),
        path.display()
    ));
    Ok(())
}

/// Replace the collection with a backup file's content
///
/// The file is read and checked first; an invalid file is reported without
/// prompting and leaves the collection untouched. A valid file replaces a
/// non-empty collection only after confirmation, unless `assume_yes` is set.
///
/// # Errors
///
/// Returns an error if the file is unreadable or not a valid backup, the
/// prompt fails, or the store write fails.
pub fn import<S: RecordStore>(
    session: &mut Session<S>,
    path: &Path,
    assume_yes: bool,
    output: &dyn OutputWriter,
) -> Result<()> {
    let records = backup::read_from(path)?;

    let existing = session.bookmarks().len();
    if existing > 0
        && !super::confirm(
            &format!(
                "Replace {existing} existing bookmark(s) with {} from {}?",
                records.len(),
                path.display()
            ),
            assume_yes,
        )?
    {
        output.info("Cancelled.");
        return Ok(());
    }

    let count = session.import(records)?;
    output.success(&format!("Imported {count} bookmark(s)"));
    Ok(())
}
