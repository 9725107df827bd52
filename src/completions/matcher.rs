//! Tag suggestions for comma-separated tag input
//!
//! Only the segment after the last comma is completed. Matching is a plain
//! case-insensitive substring test against every known tag, in tag index
//! order; there is no ranking.

use crate::search::TagIndex;

/// The segment after the last comma, trimmed and lowercased
///
/// # Examples
/// ```
/// use markr::completions::trailing_fragment;
///
/// assert_eq!(trailing_fragment("work, PE "), "pe");
/// assert_eq!(trailing_fragment("work,"), "");
/// ```
#[must_use]
pub fn trailing_fragment(input: &str) -> String {
    input
        .rsplit(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

/// Tags whose lowercase form contains the trailing fragment of `input`
///
/// Returns nothing when the fragment is empty.
#[must_use]
pub fn suggest<'a>(input: &str, index: &'a TagIndex) -> Vec<&'a str> {
    let fragment = trailing_fragment(input);
    if fragment.is_empty() {
        return Vec::new();
    }
    index
        .iter()
        .filter(|tag| tag.to_lowercase().contains(&fragment))
        .collect()
}

/// Replace the trailing segment of `input` with `tag`
///
/// The chosen tag is inserted after a single space so that it reads as a
/// continuation of the list; a leading space on the whole text is dropped.
///
/// # Examples
/// ```
/// use markr::completions::apply_choice;
///
/// assert_eq!(apply_choice("work, pe", "perf"), "work, perf");
/// assert_eq!(apply_choice("pe", "perf"), "perf");
/// ```
#[must_use]
pub fn apply_choice(input: &str, tag: &str) -> String {
    let joined = match input.rsplit_once(',') {
        Some((head, _)) => format!("{head}, {tag}"),
        None => format!(" {tag}"),
    };
    joined.strip_prefix(' ').map(String::from).unwrap_or(joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::bookmark;

    fn index(tags: &[&str]) -> TagIndex {
        TagIndex::build(&[bookmark(1, "t", tags)])
    }

    #[test]
    fn test_suggests_tags_containing_fragment() {
        let tags = index(&["work", "personal", "perf"]);
        assert_eq!(suggest("work, pe", &tags), vec!["personal", "perf"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let tags = index(&["Rust", "trust", "go"]);
        assert_eq!(suggest("RU", &tags), vec!["Rust", "trust"]);
    }

    #[test]
    fn test_empty_fragment_suggests_nothing() {
        let tags = index(&["work"]);
        assert!(suggest("", &tags).is_empty());
        assert!(suggest("work, ", &tags).is_empty());
        assert!(suggest("work,   ", &tags).is_empty());
    }

    #[test]
    fn test_no_match_suggests_nothing() {
        let tags = index(&["work"]);
        assert!(suggest("zzz", &tags).is_empty());
    }

    #[test]
    fn test_apply_choice_keeps_earlier_segments() {
        assert_eq!(apply_choice("a, b, c", "cat"), "a, b, cat");
        assert_eq!(apply_choice("a,b,c", "cat"), "a,b, cat");
    }

    #[test]
    fn test_apply_choice_on_single_segment() {
        assert_eq!(apply_choice("", "perf"), "perf");
        assert_eq!(apply_choice("  pe", "perf"), "perf");
    }

    #[test]
    fn test_apply_choice_with_leading_empty_segment() {
        assert_eq!(apply_choice(",pe", "perf"), ", perf");
    }
}
