//! Sorting comparison logic
//!
//! Pure functions for ordering listings by date, popularity or title.
//! All sorts are stable: items with equal keys keep their relative order in
//! both directions.

use std::cmp::Ordering;

use crate::logic::listing::Listing;
use crate::{SortDirection, SortKey};

/// Compare two listings according to the sort key and direction
///
/// Descending reverses the key comparison only. Equal keys stay `Equal`,
/// which is what keeps the stable sort below order-preserving.
pub fn compare_listings<T: Listing + ?Sized>(
    a: &T,
    b: &T,
    key: SortKey,
    direction: SortDirection,
) -> Ordering {
    let result = match key {
        SortKey::Date => a.created_at().cmp(&b.created_at()),
        SortKey::Popularity => a.popularity().cmp(&b.popularity()),
        SortKey::Title => a.title().to_lowercase().cmp(&b.title().to_lowercase()),
    };

    match direction {
        SortDirection::Ascending => result,
        SortDirection::Descending => result.reverse(),
    }
}

/// Stable-sort a list of indices into `items`
pub fn sort_indices<T: Listing>(
    items: &[T],
    indices: &mut [usize],
    key: SortKey,
    direction: SortDirection,
) {
    indices.sort_by(|&a, &b| compare_listings(&items[a], &items[b], key, direction));
}

/// Stable-sort a list of items in place
pub fn sort_items<T: Listing>(items: &mut [T], key: SortKey, direction: SortDirection) {
    items.sort_by(|a, b| compare_listings(a, b, key, direction));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Discussion;
    use chrono::{TimeZone, Utc};

    fn discussion(title: &str, day: u32, views: u64) -> Discussion {
        Discussion {
            id: title.to_string(),
            title: title.to_string(),
            content: String::new(),
            category: String::new(),
            tags: vec![],
            author: String::new(),
            replies: 0,
            views,
            created_at: Utc.with_ymd_and_hms(2024, 2, day, 0, 0, 0).unwrap(),
        }
    }

    fn titles(items: &[Discussion]) -> Vec<&str> {
        items.iter().map(|d| d.title.as_str()).collect()
    }

    #[test]
    fn test_title_sort_is_case_insensitive() {
        let mut items = vec![
            discussion("beta", 1, 0),
            discussion("Alpha", 2, 0),
            discussion("gamma", 3, 0),
        ];
        sort_items(&mut items, SortKey::Title, SortDirection::Ascending);
        assert_eq!(titles(&items), vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_date_descending_newest_first() {
        let mut items = vec![discussion("old", 1, 0), discussion("new", 20, 0)];
        sort_items(&mut items, SortKey::Date, SortDirection::Descending);
        assert_eq!(titles(&items), vec!["new", "old"]);
    }

    #[test]
    fn test_popularity_ties_keep_input_order_both_directions() {
        let items = vec![
            discussion("a", 1, 5),
            discussion("b", 2, 9),
            discussion("c", 3, 5),
        ];
        let mut idx: Vec<usize> = (0..items.len()).collect();

        sort_indices(&items, &mut idx, SortKey::Popularity, SortDirection::Ascending);
        assert_eq!(idx, vec![0, 2, 1]);

        sort_indices(&items, &mut idx, SortKey::Popularity, SortDirection::Descending);
        assert_eq!(idx, vec![1, 0, 2]);
    }

    #[test]
    fn test_compare_equal_keys_is_equal_when_reversed() {
        let a = discussion("x", 1, 3);
        let b = discussion("y", 1, 3);
        assert_eq!(
            compare_listings(&a, &b, SortKey::Popularity, SortDirection::Descending),
            Ordering::Equal
        );
    }
}
