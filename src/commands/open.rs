//! Open command - show a bookmark's address in a new viewer

use crate::{
    MarkrError, browser::ActiveDocument, session::Session, store::RecordStore, ui::OutputWriter,
};

type Result<T> = std::result::Result<T, MarkrError>;

/// Execute the open command
///
/// # Errors
///
/// Returns `MarkrError::NotFound` for an unknown id, or an I/O error if the
/// viewer cannot be launched.
pub fn execute<S: RecordStore, D: ActiveDocument + ?Sized>(
    session: &Session<S>,
    viewer: &D,
    id: i64,
    output: &dyn OutputWriter,
) -> Result<()> {
    let opened = session.open(viewer, id)?;
    output.info(&format!("Opened {}", opened.url));
    Ok(())
}
