//! Search Logic
//!
//! Pure functions for matching free-text queries against record text.
//! Every query is a case-insensitive substring; queries with wildcards may
//! additionally match as glob patterns (via the glob crate).

use crate::logic::listing::Listing;

fn has_wildcards(query: &str) -> bool {
    query.contains(['*', '?', '['])
}

/// Match a search query against one piece of text
///
/// # Pattern Rules
/// - Empty query matches everything
/// - Any text containing the query (case-insensitive) matches
/// - A query with "*", "?" or "[...]" also matches when it is a valid glob
///   for the whole text
///
/// # Examples
/// ```
/// use ceka::logic::search::text_matches;
///
/// assert!(text_matches("finance", "The Finance Bill 2024"));
/// assert!(text_matches("*bill 2024", "The Finance Bill 2024"));
/// assert!(text_matches("voluntary?", "Should the levy be voluntary?"));
/// assert!(!text_matches("health*", "The Finance Bill 2024"));
/// ```
pub fn text_matches(query: &str, text: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let query_lower = query.to_lowercase();
    let text_lower = text.to_lowercase();

    if text_lower.contains(&query_lower) {
        return true;
    }

    has_wildcards(&query_lower)
        && glob::Pattern::new(&query_lower).is_ok_and(|pattern| pattern.matches(&text_lower))
}

/// Whether a record matches a query on title, description or any tag
pub fn listing_matches<T: Listing + ?Sized>(query: &str, item: &T) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let query = query.trim();

    text_matches(query, item.title())
        || text_matches(query, item.description())
        || item.tags().iter().any(|tag| text_matches(query, tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_matches_all() {
        assert!(text_matches("", "anything"));
    }

    #[test]
    fn test_case_insensitive_substring() {
        assert!(text_matches("KATIBA", "Understanding the katiba"));
        assert!(text_matches("katiba", "KATIBA"));
        assert!(!text_matches("county", "national assembly"));
    }

    #[test]
    fn test_glob_whole_text() {
        assert!(text_matches("*assembly*", "National Assembly sittings"));
        assert!(text_matches("nat*", "National Assembly"));
        assert!(!text_matches("assembly*", "National Assembly sittings"));
    }

    #[test]
    fn test_question_mark_glob() {
        assert!(text_matches("bil?", "Bill"));
        assert!(!text_matches("bil?", "Bills"));
    }

    #[test]
    fn test_invalid_glob_falls_back_to_substring() {
        assert!(text_matches("[abc", "list [abc here"));
    }

    #[test]
    fn test_wildcard_characters_still_match_literally() {
        assert!(text_matches("voluntary?", "Should the housing levy be voluntary?"));
        assert!(text_matches("[43]", "Right to health under Article [43]"));
        assert!(text_matches("Article [43]", "ARTICLE [43] of the Constitution"));
        assert!(!text_matches("voluntary?", "Mandatory levy"));
    }
}
