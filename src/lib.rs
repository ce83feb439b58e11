//! CEKA Terminal Client Library
//!
//! Exposes modules for testing

pub mod api;
pub mod cache;
pub mod config;
pub mod context;
pub mod logic;
pub mod model;
pub mod repository;
pub mod services;
pub mod widget;

/// Top-level screens, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Bills,
    Resources,
    Discussions,
    Campaigns,
    Volunteer,
    Notifications,
    Profile,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Bills,
        Page::Resources,
        Page::Discussions,
        Page::Campaigns,
        Page::Volunteer,
        Page::Notifications,
        Page::Profile,
    ];

    /// Translation key for the tab label
    pub fn label_key(&self) -> &'static str {
        match self {
            Page::Bills => "nav.bills",
            Page::Resources => "nav.resources",
            Page::Discussions => "nav.discussions",
            Page::Campaigns => "nav.campaigns",
            Page::Volunteer => "nav.volunteer",
            Page::Notifications => "nav.notifications",
            Page::Profile => "nav.profile",
        }
    }

    pub fn index(&self) -> usize {
        Page::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    /// Whether the page shows a filterable list
    pub fn has_list(&self) -> bool {
        !matches!(self, Page::Profile)
    }
}

/// Sort key for list pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Date,       // Creation date (insertion order for equal dates)
    Popularity, // views + downloads
    Title,      // Case-insensitive title
}

impl SortKey {
    pub fn as_str(&self) -> &str {
        match self {
            SortKey::Date => "Date",
            SortKey::Popularity => "Popular",
            SortKey::Title => "A-Z",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(&self) -> &str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}
