//! Uniform read access to backend records
//!
//! Filtering, sorting and list rendering all work through [`Listing`] so the
//! same code serves bills, resources, discussions and the rest.

use chrono::{DateTime, Utc};

use crate::api::{Bill, Campaign, Discussion, Notification, Resource, VolunteerOpportunity};
use crate::logic::formatting::format_count;

pub trait Listing {
    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn description(&self) -> &str;

    fn tags(&self) -> &[String] {
        &[]
    }

    /// Category facet (None when the record has no category)
    fn category(&self) -> Option<&str> {
        None
    }

    /// Type facet, e.g. resource format or volunteer commitment
    fn kind(&self) -> Option<&str> {
        None
    }

    fn created_at(&self) -> DateTime<Utc>;

    /// Popularity score used by [`crate::SortKey::Popularity`]
    fn popularity(&self) -> u64 {
        0
    }

    /// Short status shown next to the title in lists
    fn badge(&self) -> Option<String> {
        None
    }

    /// Labelled fields for the detail pane
    fn details(&self) -> Vec<(&'static str, String)>;
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl Listing for Bill {
    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.summary
    }
    fn tags(&self) -> &[String] {
        &self.tags
    }
    fn category(&self) -> Option<&str> {
        non_empty(&self.category)
    }
    fn kind(&self) -> Option<&str> {
        non_empty(&self.status)
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    fn popularity(&self) -> u64 {
        self.views
    }
    fn badge(&self) -> Option<String> {
        non_empty(&self.status).map(str::to_string)
    }
    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Status", self.status.clone()),
            ("Sponsor", self.sponsor.clone()),
            ("Category", self.category.clone()),
            ("Views", format_count(self.views)),
        ]
    }
}

impl Listing for Resource {
    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn tags(&self) -> &[String] {
        &self.tags
    }
    fn category(&self) -> Option<&str> {
        non_empty(&self.category)
    }
    fn kind(&self) -> Option<&str> {
        non_empty(&self.resource_type)
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    fn popularity(&self) -> u64 {
        self.views.saturating_add(self.downloads)
    }
    fn badge(&self) -> Option<String> {
        non_empty(&self.resource_type).map(str::to_string)
    }
    fn details(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("Type", self.resource_type.clone()),
            ("Category", self.category.clone()),
            ("Views", format_count(self.views)),
            ("Downloads", format_count(self.downloads)),
        ];
        if let Some(url) = &self.url {
            fields.push(("Link", url.clone()));
        }
        fields
    }
}

impl Listing for Discussion {
    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.content
    }
    fn tags(&self) -> &[String] {
        &self.tags
    }
    fn category(&self) -> Option<&str> {
        non_empty(&self.category)
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    fn popularity(&self) -> u64 {
        self.views
    }
    fn badge(&self) -> Option<String> {
        Some(format!("{} replies", self.replies))
    }
    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Author", self.author.clone()),
            ("Category", self.category.clone()),
            ("Replies", self.replies.to_string()),
            ("Views", format_count(self.views)),
        ]
    }
}

impl Listing for Campaign {
    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn category(&self) -> Option<&str> {
        non_empty(&self.category)
    }
    fn kind(&self) -> Option<&str> {
        non_empty(&self.status)
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    fn popularity(&self) -> u64 {
        self.supporters
    }
    fn badge(&self) -> Option<String> {
        if self.goal == 0 {
            return None;
        }
        let pct = (self.supporters.saturating_mul(100) / self.goal).min(100);
        Some(format!("{}%", pct))
    }
    fn details(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("Status", self.status.clone()),
            ("Category", self.category.clone()),
            (
                "Supporters",
                format!("{} / {}", format_count(self.supporters), format_count(self.goal)),
            ),
        ];
        if let Some(ends_at) = self.ends_at {
            fields.push(("Ends", ends_at.format("%Y-%m-%d").to_string()));
        }
        fields
    }
}

impl Listing for VolunteerOpportunity {
    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn category(&self) -> Option<&str> {
        non_empty(&self.category)
    }
    fn kind(&self) -> Option<&str> {
        non_empty(&self.commitment)
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    fn badge(&self) -> Option<String> {
        non_empty(&self.location).map(str::to_string)
    }
    fn details(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("Organization", self.organization.clone()),
            ("Location", self.location.clone()),
            ("Commitment", self.commitment.clone()),
            ("Category", self.category.clone()),
        ];
        if let Some(date) = self.date {
            fields.push(("Date", date.format("%Y-%m-%d").to_string()));
        }
        fields
    }
}

impl Listing for Notification {
    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.message
    }
    fn kind(&self) -> Option<&str> {
        non_empty(&self.kind)
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    fn badge(&self) -> Option<String> {
        if self.read {
            None
        } else {
            Some("new".to_string())
        }
    }
    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Type", self.kind.clone()),
            ("Read", if self.read { "yes" } else { "no" }.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn resource(views: u64, downloads: u64) -> Resource {
        Resource {
            id: "r".to_string(),
            title: "Guide".to_string(),
            description: String::new(),
            resource_type: "document".to_string(),
            category: String::new(),
            tags: vec![],
            url: None,
            views,
            downloads,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_resource_popularity_sums_views_and_downloads() {
        assert_eq!(resource(10, 5).popularity(), 15);
    }

    #[test]
    fn test_resource_popularity_saturates() {
        assert_eq!(resource(u64::MAX, 1).popularity(), u64::MAX);
        assert_eq!(resource(u64::MAX, u64::MAX).popularity(), u64::MAX);
    }

    #[test]
    fn test_empty_category_is_none() {
        assert_eq!(resource(0, 0).category(), None);
        assert_eq!(resource(0, 0).kind(), Some("document"));
    }

    #[test]
    fn test_campaign_badge_caps_at_100() {
        let campaign = Campaign {
            id: "c".to_string(),
            title: "Clean water".to_string(),
            description: String::new(),
            category: String::new(),
            goal: 100,
            supporters: 250,
            status: "active".to_string(),
            ends_at: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };
        assert_eq!(campaign.badge().as_deref(), Some("100%"));
    }
}
