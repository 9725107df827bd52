//! Delete command

use crate::{MarkrError, session::Session, store::RecordStore, ui::OutputWriter};

type Result<T> = std::result::Result<T, MarkrError>;

/// Execute the delete command
///
/// Asks for confirmation unless `assume_yes` is set.
///
/// # Errors
///
/// Returns `MarkrError::NotFound` for an unknown id, or an error if the
/// prompt or the store write fails.
pub fn execute<S: RecordStore>(
    session: &mut Session<S>,
    id: i64,
    assume_yes: bool,
    output: &dyn OutputWriter,
) -> Result<()> {
    let title = session
        .get(id)
        .map(|b| b.title.clone())
        .ok_or(MarkrError::NotFound(id))?;

    if !super::confirm(&format!("Delete '{title}' ({id})?"), assume_yes)? {
        output.info("Cancelled.");
        return Ok(());
    }

    let removed = session.delete(id)?;
    if removed > 1 {
        output.warning(&format!("{removed} bookmarks shared id {id}; all were deleted"));
    }
    output.success(&format!("Deleted '{title}'"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{BOOKMARKS_KEY, MemoryStore};
    use crate::testing::bookmark;
    use crate::ui::{BufferedWriter, MessageLevel};

    fn session() -> Session<MemoryStore> {
        let mut store = MemoryStore::new();
        store
            .set(BOOKMARKS_KEY, &[bookmark(1, "one", &["a"]), bookmark(2, "two", &["b"])])
            .unwrap();
        Session::load(store, 5).unwrap()
    }

    #[test]
    fn test_delete_with_yes() {
        let mut session = session();
        let writer = BufferedWriter::new();

        execute(&mut session, 1, true, &writer).unwrap();

        assert_eq!(session.bookmarks().len(), 1);
        assert!(!session.tags().contains("a"));
        assert_eq!(writer.at_level(MessageLevel::Success), vec!["Deleted 'one'"]);
    }

    #[test]
    fn test_delete_unknown_id_fails_before_prompting() {
        let mut session = session();
        let writer = BufferedWriter::new();

        let err = execute(&mut session, 3, false, &writer).unwrap_err();

        assert!(matches!(err, MarkrError::NotFound(3)));
        assert_eq!(session.bookmarks().len(), 2);
    }
}
