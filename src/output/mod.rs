//! Output formatting for CLI display
//!
//! Rendering is a projection of state: the same view always renders to the
//! same lines, and nothing here touches the session.

use colored::Colorize;

use crate::bookmark::Bookmark;
use crate::search::PageControl;
use crate::session::View;

/// Format one bookmark for the listing
///
/// The note line only appears when the note is non-empty. In quiet mode the
/// record collapses to `id<TAB>url`.
#[must_use]
pub fn bookmark_entry(bookmark: &Bookmark, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}", bookmark.id, bookmark.url);
    }

    let mut lines = vec![
        format!("  {} {}", format!("[{}]", bookmark.id).dimmed(), bookmark.title.bold()),
        format!("      Link: {}", bookmark.url.cyan()),
    ];
    if !bookmark.note.is_empty() {
        lines.push(format!("      Note: {}", bookmark.note));
    }
    lines.push(format!("      Tags: {}", tag_list(&bookmark.tags)));
    lines.join("\n")
}

/// Tags rendered as a comma-separated list, or `(no tags)`
#[must_use]
pub fn tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        "(no tags)".to_string()
    } else {
        tags.iter()
            .map(|t| t.yellow().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One control per page, the current (disabled) one in brackets
#[must_use]
pub fn pagination(controls: &[PageControl]) -> String {
    let pages: Vec<String> = controls
        .iter()
        .map(|c| {
            if c.disabled {
                format!("[{}]", c.number).bold().to_string()
            } else {
                c.number.to_string()
            }
        })
        .collect();
    format!("Pages: {}", pages.join(" "))
}

/// Format a tag with usage count
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {tag} (used by {count} bookmark(s))")
    }
}

/// Render a whole listing view
///
/// The pagination line is omitted when there is at most one page.
#[must_use]
pub fn view(view: &View<'_>, quiet: bool) -> Vec<String> {
    let mut lines: Vec<String> = view
        .page
        .items
        .iter()
        .map(|b| bookmark_entry(b, quiet))
        .collect();

    if !quiet && let Some(controls) = view.page.controls() {
        lines.push(pagination(&controls));
    }
    lines
}
