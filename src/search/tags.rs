//! Tag index: the distinct tags currently in use
//!
//! The index is rebuilt from scratch from the whole collection after every
//! mutation; there is no incremental update path. Iteration follows the order
//! in which tags are first seen (records in insertion order, then each
//! record's tag order), which is the order tag listings and autocomplete
//! suggestions use.

use std::collections::HashSet;

use crate::bookmark::Bookmark;

/// Deduplicated set of tags across a collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    tags: Vec<String>,
}

impl TagIndex {
    /// Build the index from records
    #[must_use]
    pub fn build<'a>(records: impl IntoIterator<Item = &'a Bookmark>) -> Self {
        let mut seen = HashSet::new();
        let mut tags = Vec::new();
        for record in records {
            for tag in &record.tags {
                if seen.insert(tag.as_str()) {
                    tags.push(tag.clone());
                }
            }
        }
        Self { tags }
    }

    /// Iterate tags in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Number of records carrying each tag, in index order
    #[must_use]
    pub fn usage<'a>(&'a self, records: &[Bookmark]) -> Vec<(&'a str, usize)> {
        self.iter()
            .map(|tag| (tag, records.iter().filter(|b| b.has_tag(tag)).count()))
            .collect()
    }
}

/// Distinct tags across all records
#[must_use]
pub fn all_tags(records: &[Bookmark]) -> TagIndex {
    TagIndex::build(records)
}
