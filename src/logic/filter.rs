//! Filter Logic
//!
//! Multi-facet filtering over in-memory record lists. Active facets are
//! combined with logical AND; an empty facet matches everything.

use std::collections::BTreeSet;

use crate::logic::listing::Listing;
use crate::logic::search::listing_matches;

/// Active filters for one list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free-text query (title, description, tags)
    pub query: String,
    /// Accepted categories, compared case-insensitively
    pub categories: BTreeSet<String>,
    /// Accepted kinds (resource type, commitment, status...)
    pub kinds: BTreeSet<String>,
}

impl FilterCriteria {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// True when no facet is active
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.categories.is_empty() && self.kinds.is_empty()
    }

    /// Replace the category facet with a single value (None clears it)
    pub fn set_category(&mut self, category: Option<&str>) {
        self.categories.clear();
        if let Some(c) = category {
            self.categories.insert(c.to_string());
        }
    }

    /// Replace the kind facet with a single value (None clears it)
    pub fn set_kind(&mut self, kind: Option<&str>) {
        self.kinds.clear();
        if let Some(k) = kind {
            self.kinds.insert(k.to_string());
        }
    }

    pub fn clear_facets(&mut self) {
        self.categories.clear();
        self.kinds.clear();
    }

    /// Whether one record satisfies every active facet
    pub fn matches<T: Listing + ?Sized>(&self, item: &T) -> bool {
        listing_matches(&self.query, item)
            && facet_matches(&self.categories, item.category())
            && facet_matches(&self.kinds, item.kind())
    }
}

fn facet_matches(accepted: &BTreeSet<String>, value: Option<&str>) -> bool {
    if accepted.is_empty() {
        return true;
    }
    match value {
        Some(v) => accepted.iter().any(|a| a.eq_ignore_ascii_case(v)),
        None => false,
    }
}

/// Indices of matching items, in input order
pub fn filter_indices<T: Listing>(items: &[T], criteria: &FilterCriteria) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| criteria.matches(*item))
        .map(|(idx, _)| idx)
        .collect()
}

/// Matching items, cloned, in input order
pub fn filter_items<T: Listing + Clone>(items: &[T], criteria: &FilterCriteria) -> Vec<T> {
    if criteria.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| criteria.matches(*item))
        .cloned()
        .collect()
}

/// Distinct category values present in a list, sorted
pub fn category_values<T: Listing>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.category().map(str::to_string))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct kind values present in a list, sorted
pub fn kind_values<T: Listing>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.kind().map(str::to_string))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Resource;
    use chrono::{TimeZone, Utc};

    fn resource(title: &str, kind: &str, category: &str, tags: &[&str]) -> Resource {
        Resource {
            id: title.to_lowercase(),
            title: title.to_string(),
            description: format!("About {}", title),
            resource_type: kind.to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            url: None,
            views: 0,
            downloads: 0,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn library() -> Vec<Resource> {
        vec![
            resource("Constitution Basics", "document", "constitution", &["rights"]),
            resource("How Parliament Works", "video", "governance", &["parliament"]),
            resource("Devolution Explained", "infographic", "governance", &["counties"]),
            resource("Bill of Rights", "document", "constitution", &["rights", "freedom"]),
        ]
    }

    #[test]
    fn test_empty_criteria_keeps_everything() {
        let items = library();
        let filtered = filter_items(&items, &FilterCriteria::default());
        assert_eq!(filtered, items);
    }

    #[test]
    fn test_query_matches_tags() {
        let items = library();
        let filtered = filter_items(&items, &FilterCriteria::with_query("counties"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Devolution Explained");
    }

    #[test]
    fn test_facets_are_anded() {
        let items = library();
        let mut criteria = FilterCriteria::default();
        criteria.set_category(Some("constitution"));
        criteria.set_kind(Some("document"));
        criteria.query = "rights".to_string();

        let idx = filter_indices(&items, &criteria);
        assert_eq!(idx, vec![0, 3]);

        criteria.set_kind(Some("video"));
        assert!(filter_indices(&items, &criteria).is_empty());
    }

    #[test]
    fn test_category_membership_set() {
        let items = library();
        let mut criteria = FilterCriteria::default();
        criteria.categories.insert("Governance".to_string());
        criteria.categories.insert("constitution".to_string());
        assert_eq!(filter_indices(&items, &criteria).len(), 4);
    }

    #[test]
    fn test_missing_facet_value_never_matches_active_facet() {
        let items = vec![resource("Untyped", "", "", &[])];
        let mut criteria = FilterCriteria::default();
        criteria.set_kind(Some("document"));
        assert!(filter_indices(&items, &criteria).is_empty());
    }

    #[test]
    fn test_facet_values_sorted_distinct() {
        let items = library();
        assert_eq!(category_values(&items), vec!["constitution", "governance"]);
        assert_eq!(kind_values(&items), vec!["document", "infographic", "video"]);
    }

    #[test]
    fn test_clear_facets_keeps_query() {
        let mut criteria = FilterCriteria::with_query("rights");
        criteria.set_category(Some("constitution"));
        criteria.clear_facets();
        assert_eq!(criteria.query, "rights");
        assert!(criteria.categories.is_empty());
    }
}
