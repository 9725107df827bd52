//! Bookmark record and tag input parsing
//!
//! A bookmark is one saved document: its title, address, a free-text note
//! and an ordered list of tags. The serialized field names match the layout
//! used by backup files (`createdAt` in camel case), so the same type is
//! stored in the database and written to exports.

use serde::{Deserialize, Serialize};

/// One saved bookmark
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    /// Creation timestamp in milliseconds, doubles as the identifier
    pub id: i64,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub note: String,
    /// Tags in the order they were typed; duplicates are kept
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: i64,
}

impl Bookmark {
    /// Create a bookmark stamped with `now` (milliseconds since the epoch)
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        note: impl Into<String>,
        tags: Vec<String>,
        now: i64,
    ) -> Self {
        Self {
            id: now,
            title: title.into(),
            url: url.into(),
            note: note.into(),
            tags,
            created_at: now,
        }
    }

    /// Whether the bookmark carries `tag` verbatim (case-sensitive)
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Tags joined with a comma and no padding, as searched by keyword
    #[must_use]
    pub fn joined_tags(&self) -> String {
        self.tags.join(",")
    }
}

/// Split raw comma-separated tag text into tags
///
/// Each part is trimmed and empty parts are dropped. Duplicates are kept.
///
/// # Examples
/// ```
/// use markr::bookmark::parse_tags;
///
/// assert_eq!(parse_tags("a, b, a"), vec!["a", "b", "a"]);
/// assert!(parse_tags(" , ").is_empty());
/// ```
#[must_use]
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags_keeps_duplicates() {
        assert_eq!(parse_tags("a, b, a"), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_parse_tags_drops_empty_parts() {
        assert_eq!(parse_tags(",rust,, web ,"), vec!["rust", "web"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_new_uses_timestamp_for_id() {
        let b = Bookmark::new("Example", "https://example.com", "", vec![], 1_700_000_000_000);
        assert_eq!(b.id, 1_700_000_000_000);
        assert_eq!(b.created_at, b.id);
    }

    #[test]
    fn test_has_tag_is_case_sensitive() {
        let b = Bookmark::new("t", "u", "", vec!["Rust".into()], 1);
        assert!(b.has_tag("Rust"));
        assert!(!b.has_tag("rust"));
    }

    #[test]
    fn test_serialized_field_names() {
        let b = Bookmark::new("t", "u", "n", vec!["x".into()], 42);
        let json = serde_json::to_value(&b).unwrap();
        assert_eq!(json["createdAt"], 42);
        assert_eq!(json["tags"][0], "x");
    }

    #[test]
    fn test_missing_note_and_tags_default_to_empty() {
        let b: Bookmark =
            serde_json::from_str(r#"{"id":1,"title":"t","url":"u","createdAt":1}"#).unwrap();
        assert!(b.note.is_empty());
        assert!(b.tags.is_empty());
    }
}
