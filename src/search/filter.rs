//! Keyword and tag filtering of bookmark collections
//!
//! # Iterator Adapter
//!
//! [`BookmarkFilterExt`] adds the two filters to any iterator of bookmark
//! references, so they can be chained:
//!
//! ```
//! use markr::search::filter::BookmarkFilterExt;
//! # use markr::bookmark::Bookmark;
//! # let records: Vec<Bookmark> = Vec::new();
//! let hits: Vec<&Bookmark> = records
//!     .iter()
//!     .matching_keyword("rust")
//!     .tagged("work")
//!     .collect();
//! ```

use crate::bookmark::Bookmark;

/// Whether `record` matches a keyword that is already lowercased
///
/// The keyword is searched in the title, URL, note, and the tags joined
/// with a comma.
fn contains_keyword(record: &Bookmark, keyword_lower: &str) -> bool {
    record.title.to_lowercase().contains(keyword_lower)
        || record.url.to_lowercase().contains(keyword_lower)
        || record.note.to_lowercase().contains(keyword_lower)
        || record.joined_tags().to_lowercase().contains(keyword_lower)
}

/// Exact tag membership; an empty tag matches everything
#[must_use]
pub fn matches_tag(record: &Bookmark, tag: &str) -> bool {
    tag.is_empty() || record.has_tag(tag)
}

/// Reduce `records` to those matching both `keyword` and `tag`
///
/// Input order is preserved.
#[must_use]
pub fn filter<'a>(records: &'a [Bookmark], keyword: &str, tag: &str) -> Vec<&'a Bookmark> {
    records.iter().matching_keyword(keyword).tagged(tag).collect()
}

/// Extension trait adding bookmark filters to iterators
pub trait BookmarkFilterExt<'a>: Iterator<Item = &'a Bookmark> + Sized {
    /// Keep records matching `keyword` (case-insensitive, empty keeps all)
    fn matching_keyword(self, keyword: &str) -> impl Iterator<Item = &'a Bookmark> {
        let keyword = keyword.to_lowercase();
        self.filter(move |b| keyword.is_empty() || contains_keyword(b, &keyword))
    }

    /// Keep records carrying `tag` verbatim (empty keeps all)
    fn tagged(self, tag: &str) -> impl Iterator<Item = &'a Bookmark> {
        let tag = tag.to_string();
        self.filter(move |b| matches_tag(b, &tag))
    }
}

impl<'a, I: Iterator<Item = &'a Bookmark>> BookmarkFilterExt<'a> for I {}
