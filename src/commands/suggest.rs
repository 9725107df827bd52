//! Suggest command - tag autocompletion from the command line
//!
//! Drives the same entry-field state machine an interactive front end would:
//! the text is typed, then a suggestion is optionally chosen.

use crate::{
    MarkrError, completions::render, session::Session, store::RecordStore, ui::OutputWriter,
};

type Result<T> = std::result::Result<T, MarkrError>;

/// Execute the suggest command
///
/// Without `choose`, prints one matching tag per line. With `choose`,
/// prints the input with its last fragment replaced by the chosen tag.
///
/// # Errors
///
/// Returns `MarkrError::InvalidInput` if `choose` is not among the
/// suggestions for `input`.
pub fn execute<S: RecordStore>(
    session: &mut Session<S>,
    input: &str,
    choose: Option<&str>,
    output: &dyn OutputWriter,
) -> Result<()> {
    let state = session.type_tags(input);

    if let Some(tag) = choose {
        if !session.choose_tag(tag) {
            return Err(MarkrError::InvalidInput(format!(
                "'{tag}' is not a suggestion for '{input}'"
            )));
        }
        output.write(session.tag_input().text());
        return Ok(());
    }

    match render(state) {
        Some(list) => list.lines().for_each(|line| output.write(line)),
        None => output.info("No suggestions."),
    }
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
            .set(BOOKMARKS_KEY, &[bookmark(1, "t", &["work", "personal", "perf"])])
            .unwrap();
        Session::load(store, 5).unwrap()
    }

    #[test]
    fn test_lists_matches_for_last_fragment() {
        let mut session = session();
        let writer = BufferedWriter::new();

        execute(&mut session, "work, PE", None, &writer).unwrap();

        assert_eq!(writer.at_level(MessageLevel::Normal), vec!["personal", "perf"]);
    }

    #[test]
    fn test_choose_completes_text() {
        let mut session = session();
        let writer = BufferedWriter::new();

        execute(&mut session, "work, pe", Some("perf"), &writer).unwrap();

        assert_eq!(writer.at_level(MessageLevel::Normal), vec!["work, perf"]);
    }

    #[test]
    fn test_choose_single_fragment() {
        let mut session = session();
        let writer = BufferedWriter::new();

        execute(&mut session, "wo", Some("work"), &writer).unwrap();

        assert_eq!(writer.at_level(MessageLevel::Normal), vec!["work"]);
    }

    #[test]
    fn test_choose_non_match_is_rejected() {
        let mut session = session();
        let writer = BufferedWriter::new();

        let err = execute(&mut session, "work, pe", Some("work"), &writer).unwrap_err();
        assert!(matches!(err, MarkrError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_fragment_has_no_suggestions() {
        let mut session = session();
        let writer = BufferedWriter::new();

        execute(&mut session, "work, ", None, &writer).unwrap();

        assert!(writer.at_level(MessageLevel::Normal).is_empty());
        assert_eq!(writer.at_level(MessageLevel::Info), vec!["No suggestions."]);
    }
}
