//! Tags command - list the tags in use

use crate::{MarkrError, output, session::Session, store::RecordStore, ui::OutputWriter};

type Result<T> = std::result::Result<T, MarkrError>;

/// Execute the tags command
///
/// Tags are listed in the order they were first used.
///
/// # Errors
///
/// This command only reads in-memory state; it currently never fails.
pub fn execute<S: RecordStore>(
    session: &Session<S>,
    output: &dyn OutputWriter,
    quiet: bool,
) -> Result<()> {
    let tags = session.tags();

    if tags.is_empty() {
        output.info("No tags in use.");
        return Ok(());
    }

    output.info("Tags in use:");
    for (tag, count) in tags.usage(session.bookmarks()) {
        output.write(&output::tag_with_count(tag, count, quiet));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{BOOKMARKS_KEY, MemoryStore};
    use crate::testing::bookmark;
    use crate::ui::{BufferedWriter, MessageLevel};

    #[test]
    fn test_tags_first_seen_order_with_counts() {
        let mut store = MemoryStore::new();
        store
            .set(
                BOOKMARKS_KEY,
                &[bookmark(1, "one", &["rust", "web"]), bookmark(2, "two", &["cli", "rust"])],
            )
            .unwrap();
        let session = Session::load(store, 5).unwrap();
        let writer = BufferedWriter::new();

        execute(&session, &writer, true).unwrap();
        assert_eq!(writer.at_level(MessageLevel::Normal), vec!["rust", "web", "cli"]);

        let writer = BufferedWriter::new();
        execute(&session, &writer, false).unwrap();
        assert_eq!(
            writer.at_level(MessageLevel::Normal)[0],
            "  rust (used by 2 bookmark(s))"
        );
    }

    #[test]
    fn test_no_tags() {
        let session = Session::load(MemoryStore::new(), 5).unwrap();
        let writer = BufferedWriter::new();

        execute(&session, &writer, false).unwrap();

        assert!(writer.at_level(MessageLevel::Normal).is_empty());
    }
}
