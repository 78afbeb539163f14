//! # Channel Search
//!
//! Case-insensitive fuzzy subsequence matching over channel names.
//! A name matches when every query character appears in it, in order,
//! though not necessarily next to each other (`"bbn"` matches `"BBC News"`).
//!
//! The filter is recomputed from scratch on every keystroke. Lists are
//! human-sized, so there is no incremental state to keep in sync.

use crate::playlist::Channel;

/// Returns true if `query` is an ordered subsequence of `name`, ignoring case.
pub fn fuzzy_match(query: &str, name: &str) -> bool {
    let name = name.to_lowercase();
    let mut haystack = name.chars();
    query
        .to_lowercase()
        .chars()
        .all(|wanted| haystack.any(|c| c == wanted))
}

/// Filters `channels` down to those whose name matches `query`.
/// Source order is preserved; an empty query keeps everything.
pub fn filter(channels: &[Channel], query: &str) -> Vec<Channel> {
    if query.is_empty() {
        return channels.to_vec();
    }
    channels
        .iter()
        .filter(|channel| fuzzy_match(query, &channel.name))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::channels;

    #[test]
    fn test_fuzzy_match_contiguous_and_scattered() {
        assert!(fuzzy_match("cnn", "CNN International"));
        assert!(fuzzy_match("bbn", "BBC News"));
        assert!(fuzzy_match("", "anything"));
        assert!(!fuzzy_match("nnc", "CNN"));
    }

    #[test]
    fn test_fuzzy_match_is_case_insensitive() {
        assert!(fuzzy_match("AL J", "al jazeera"));
        assert!(fuzzy_match("jaz", "Al Jazeera"));
    }

    #[test]
    fn test_fuzzy_match_needs_every_character() {
        assert!(!fuzzy_match("bbcx", "BBC"));
        assert!(!fuzzy_match("a", ""));
    }

    #[test]
    fn test_fuzzy_match_counts_repeated_characters() {
        // Each query char consumes one haystack char.
        assert!(!fuzzy_match("ccc", "CNC"));
        assert!(fuzzy_match("cc", "CNC"));
    }

    #[test]
    fn test_filter_empty_query_returns_input() {
        let list = channels(&["BBC", "CNN", "Al Jazeera"]);
        assert_eq!(filter(&list, ""), list);
    }

    #[test]
    fn test_filter_cn_yields_cnn_only() {
        let list = channels(&["BBC", "CNN", "Al Jazeera"]);
        let names: Vec<_> = filter(&list, "cn").into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["CNN"]);
    }

    #[test]
    fn test_filter_preserves_source_order() {
        let list = channels(&["Zeta News", "Alpha", "News 24", "Sports"]);
        let names: Vec<_> = filter(&list, "news").into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Zeta News", "News 24"]);
    }

    #[test]
    fn test_filter_result_is_ordered_subset() {
        let list = channels(&["a1", "b2", "a3", "c4", "a5"]);
        for query in ["a", "1", "x", "a5", "4"] {
            let result = filter(&list, query);
            // Walk the source once: every result item must appear in order.
            let mut source = list.iter();
            for item in &result {
                assert!(source.any(|c| c == item), "{query}: {item:?} out of order");
            }
        }
    }
}
