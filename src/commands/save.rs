//! Save command - bookmark the active document

use crate::{
    MarkrError, browser::ActiveDocument, output, session::Session, store::RecordStore,
    ui::OutputWriter,
};

type Result<T> = std::result::Result<T, MarkrError>;

/// Execute the save command
///
/// In quiet mode only the new id is printed.
///
/// # Errors
///
/// Returns `MarkrError::NoActiveTarget` if no document is available, or a
/// store error if the write fails.
pub fn execute<S: RecordStore, D: ActiveDocument + ?Sized>(
    session: &mut Session<S>,
    active: &D,
    note: &str,
    tags: &str,
    output: &dyn OutputWriter,
    quiet: bool,
) -> Result<()> {
    let saved = session.save(active, note, tags)?;

    if quiet {
        output.write(&saved.id.to_string());
    } else {
        output.success(&format!("Saved '{}' as {}", saved.title, saved.id));
        output.info(&format!("Tags: {}", output::tag_list(&saved.tags)));
    }
    Ok(())
}
