//! Integration tests for list filtering and sorting
//!
//! Checks the properties every list page relies on:
//! 1. Filtering returns a subset whose items satisfy every active facet
//! 2. Filtering is idempotent
//! 3. Sorting is stable and toggling the direction twice restores the order

use chrono::{Duration, TimeZone, Utc};

use ceka::api::Resource;
use ceka::logic::filter::{filter_indices, filter_items, FilterCriteria};
use ceka::logic::listing::Listing;
use ceka::logic::sorting::sort_items;
use ceka::{SortDirection, SortKey};

fn resource(id: &str, title: &str, kind: &str, category: &str, day: i64, views: u64) -> Resource {
    Resource {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{} explained for citizens", title),
        resource_type: kind.to_string(),
        category: category.to_string(),
        tags: vec![category.to_string()],
        url: None,
        views,
        downloads: 0,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(day),
    }
}

fn library() -> Vec<Resource> {
    vec![
        resource("r1", "Know Your Rights", "document", "rights", 1, 500),
        resource("r2", "County Budgets 101", "video", "budget", 2, 120),
        resource("r3", "How a Bill Becomes Law", "infographic", "legislation", 2, 500),
        resource("r4", "Voting Rights Explained", "video", "rights", 3, 80),
        resource("r5", "Public Participation Guide", "document", "participation", 5, 120),
        resource("r6", "Devolution Basics", "audio", "", 5, 10),
    ]
}

/// Titles carrying characters that double as glob syntax
fn punctuated() -> Vec<Resource> {
    vec![
        resource("q1", "Should the housing levy be voluntary?", "document", "housing", 6, 40),
        resource("q2", "Right to health under Article [43]", "video", "rights", 7, 40),
    ]
}

fn all_resources() -> Vec<Resource> {
    let mut items = library();
    items.extend(punctuated());
    items
}

fn criteria_grid() -> Vec<FilterCriteria> {
    let mut grid = vec![
        FilterCriteria::default(),
        FilterCriteria::with_query("rights"),
        FilterCriteria::with_query("BUDGET"),
        FilterCriteria::with_query("*law"),
        FilterCriteria::with_query("nothing matches this"),
        FilterCriteria::with_query("voluntary?"),
        FilterCriteria::with_query("[43]"),
        FilterCriteria::with_query("article [43]"),
    ];

    let mut by_category = FilterCriteria::default();
    by_category.set_category(Some("rights"));
    grid.push(by_category);

    let mut by_kind_and_query = FilterCriteria::with_query("explained");
    by_kind_and_query.set_kind(Some("video"));
    grid.push(by_kind_and_query);

    let mut both_facets = FilterCriteria::default();
    both_facets.set_category(Some("Rights"));
    both_facets.set_kind(Some("document"));
    grid.push(both_facets);

    grid
}

fn ids(items: &[Resource]) -> Vec<&str> {
    items.iter().map(|r| r.id.as_str()).collect()
}

/// Test: Filtered output is a subset and every item satisfies the criteria
#[test]
fn test_filter_is_satisfying_subset() {
    let items = all_resources();
    for criteria in criteria_grid() {
        let filtered = filter_items(&items, &criteria);
        assert!(filtered.len() <= items.len());
        for item in &filtered {
            assert!(items.contains(item), "{} not in input", item.id);
            assert!(criteria.matches(item), "{} fails {:?}", item.id, criteria);
        }
        // Nothing that matches was dropped
        let matching = items.iter().filter(|i| criteria.matches(*i)).count();
        assert_eq!(matching, filtered.len());
    }
}

/// Test: Filtering a filtered list changes nothing
#[test]
fn test_filter_is_idempotent() {
    let items = all_resources();
    for criteria in criteria_grid() {
        let once = filter_items(&items, &criteria);
        let twice = filter_items(&once, &criteria);
        assert_eq!(once, twice, "not idempotent for {:?}", criteria);
    }
}

/// Test: Question marks and brackets in a query still match literal text
#[test]
fn test_punctuated_queries_match_as_substrings() {
    let items = all_resources();

    let hits = filter_items(&items, &FilterCriteria::with_query("voluntary?"));
    assert_eq!(ids(&hits), vec!["q1"]);

    let hits = filter_items(&items, &FilterCriteria::with_query("[43]"));
    assert_eq!(ids(&hits), vec!["q2"]);

    let hits = filter_items(&items, &FilterCriteria::with_query("ARTICLE [43]"));
    assert_eq!(ids(&hits), vec!["q2"]);

    // Intentional wildcards keep working alongside
    let hits = filter_items(&items, &FilterCriteria::with_query("should*?"));
    assert_eq!(ids(&hits), vec!["q1"]);
}

/// Test: Facets combine with AND and compare case-insensitively
#[test]
fn test_facets_combine_with_and() {
    let items = library();

    let mut criteria = FilterCriteria::default();
    criteria.set_category(Some("RIGHTS"));
    assert_eq!(ids(&filter_items(&items, &criteria)), vec!["r1", "r4"]);

    criteria.set_kind(Some("video"));
    assert_eq!(ids(&filter_items(&items, &criteria)), vec!["r4"]);

    // Records without a category never match a category facet
    criteria.clear_facets();
    criteria.set_category(Some(""));
    assert!(filter_indices(&items, &criteria).is_empty());
}

/// Test: Indices preserve input order
#[test]
fn test_filter_indices_keep_input_order() {
    let items = library();
    let criteria = FilterCriteria::with_query("rights");
    assert_eq!(filter_indices(&items, &criteria), vec![0, 3]);
}

/// Test: Toggling the direction twice restores the original order
#[test]
fn test_double_toggle_restores_order() {
    for key in [SortKey::Date, SortKey::Popularity, SortKey::Title] {
        let mut items = library();
        sort_items(&mut items, key, SortDirection::Ascending);
        let ascending = ids(&items).into_iter().map(String::from).collect::<Vec<_>>();

        let direction = SortDirection::Ascending.toggled();
        sort_items(&mut items, key, direction);
        sort_items(&mut items, key, direction.toggled());

        assert_eq!(ids(&items), ascending, "order changed for {:?}", key);
    }
}

/// Test: Equal keys keep their input order in both directions
#[test]
fn test_sort_is_stable_for_equal_keys() {
    let mut items = library();
    sort_items(&mut items, SortKey::Popularity, SortDirection::Descending);
    // r1 and r3 share 500 views, r2 and r5 share 120
    assert_eq!(ids(&items), vec!["r1", "r3", "r2", "r5", "r4", "r6"]);

    let mut items = library();
    sort_items(&mut items, SortKey::Date, SortDirection::Ascending);
    assert_eq!(ids(&items), vec!["r1", "r2", "r3", "r4", "r5", "r6"]);

    let mut items = library();
    sort_items(&mut items, SortKey::Date, SortDirection::Descending);
    assert_eq!(ids(&items), vec!["r5", "r6", "r4", "r2", "r3", "r1"]);
}

/// Test: Title sort ignores case
#[test]
fn test_title_sort_ignores_case() {
    let mut items = vec![
        resource("a", "voting", "document", "", 0, 0),
        resource("b", "Budget", "document", "", 0, 0),
        resource("c", "county", "document", "", 0, 0),
    ];
    sort_items(&mut items, SortKey::Title, SortDirection::Ascending);
    let titles: Vec<&str> = items.iter().map(|r| r.title()).collect();
    assert_eq!(titles, vec!["Budget", "county", "voting"]);
}
