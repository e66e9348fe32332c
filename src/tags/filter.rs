//! Prefix filtering of the suggestion pool.

use super::Suggestion;

/// Filter the suggestion pool by the current query.
///
/// Keeps every item whose lowercased name starts with the trimmed, lowercased
/// query, in source order. An empty or whitespace-only query keeps everything.
pub fn filter_suggestions(query: &str, pool: &[Suggestion]) -> Vec<Suggestion> {
    let query_lower = query.trim().to_lowercase();
    pool.iter()
        .filter(|item| item.name.to_lowercase().starts_with(&query_lower))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<Suggestion> {
        vec![
            Suggestion::new("Apple"),
            Suggestion::new("Avocado"),
            Suggestion::new("Banana"),
            Suggestion::new("apricot"),
        ]
    }

    fn names(items: &[Suggestion]) -> Vec<&str> {
        items.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_prefix_match_is_case_insensitive() {
        let filtered = filter_suggestions("a", &pool());
        assert_eq!(names(&filtered), vec!["Apple", "Avocado", "apricot"]);
    }

    #[test]
    fn test_query_is_trimmed() {
        let filtered = filter_suggestions("  AP ", &pool());
        assert_eq!(names(&filtered), vec!["Apple", "apricot"]);
    }

    #[test]
    fn test_substring_does_not_match() {
        let filtered = filter_suggestions("nan", &pool());
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_empty_query_keeps_whole_pool_in_order() {
        let filtered = filter_suggestions("", &pool());
        assert_eq!(filtered, pool());
    }
}
