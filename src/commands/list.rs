//! List command - search, filter and page through bookmarks

use crate::{MarkrError, output, session::Session, store::RecordStore, ui::OutputWriter};

type Result<T> = std::result::Result<T, MarkrError>;

/// Execute the list command
///
/// Applies the keyword and tag filter, then shows `page`. An empty tag means
/// no tag filter.
///
/// # Errors
///
/// This command only renders in-memory state; it currently never fails.
pub fn execute<S: RecordStore>(
    session: &mut Session<S>,
    keyword: &str,
    tag: &str,
    page: usize,
    output: &dyn OutputWriter,
    quiet: bool,
) -> Result<()> {
    session.set_keyword(keyword);
    session.set_tag(tag);
    session.go_to_page(page);

    if !tag.is_empty() && !session.tags().contains(tag) {
        output.warning(&format!("No bookmark is tagged '{tag}'"));
    }

    let view = session.view();

    if view.total == 0 {
        output.info("No bookmarks saved yet.");
        return Ok(());
    }
    if view.page.is_empty() {
        if view.matched == 0 {
            output.info("No bookmarks match.");
        } else {
            output.info(&format!(
                "Page {} is empty ({} page(s) of results).",
                view.page.number, view.page.total_pages
            ));
        }
        return Ok(());
    }

    if !view.state.search_keyword.is_empty() || !view.state.selected_tag.is_empty() {
        output.info(&format!("{} of {} bookmark(s) match.", view.matched, view.total));
    }
    for line in output::view(&view, quiet) {
        output.write(&line);
    }
    Ok(())
}
