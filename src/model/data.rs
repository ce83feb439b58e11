//! Data Model
//!
//! Records loaded from the repository, per page, plus where they came from.

use std::collections::{HashMap, HashSet};

use super::types::{ConnectionState, PageView};
use crate::api::{
    Bill, Campaign, Discussion, Notification, Profile, Resource, VolunteerOpportunity,
};
use crate::logic::filter::{category_values, filter_indices, kind_values};
use crate::logic::listing::Listing;
use crate::logic::sorting::sort_indices;
use crate::repository::DataSource;
use crate::services::PageData;
use crate::Page;

/// Run `$body` with `$items` bound to the record slice behind a list page
macro_rules! with_records {
    ($data:expr, $page:expr, |$items:ident| $body:expr, $profile:expr) => {
        match $page {
            Page::Bills => {
                let $items = &$data.bills[..];
                $body
            }
            Page::Resources => {
                let $items = &$data.resources[..];
                $body
            }
            Page::Discussions => {
                let $items = &$data.discussions[..];
                $body
            }
            Page::Campaigns => {
                let $items = &$data.campaigns[..];
                $body
            }
            Page::Volunteer => {
                let $items = &$data.volunteer[..];
                $body
            }
            Page::Notifications => {
                let $items = &$data.notifications[..];
                $body
            }
            Page::Profile => $profile,
        }
    };
}

fn visible_for<T: Listing>(items: &[T], view: &PageView) -> Vec<usize> {
    let mut indices = filter_indices(items, &view.criteria);
    sort_indices(items, &mut indices, view.sort_key, view.direction);
    indices
}

#[derive(Clone, Debug)]
pub struct DataModel {
    pub bills: Vec<Bill>,
    pub resources: Vec<Resource>,
    pub discussions: Vec<Discussion>,
    pub campaigns: Vec<Campaign>,
    pub volunteer: Vec<VolunteerOpportunity>,
    pub notifications: Vec<Notification>,
    pub profile: Option<Profile>,

    /// Source of the last successful load per page
    pub sources: HashMap<Page, DataSource>,

    /// Pages with a request in flight
    pub loading: HashSet<Page>,

    /// Pages loaded at least once
    pub loaded: HashSet<Page>,

    pub connection_state: ConnectionState,
}

impl DataModel {
    pub fn new() -> Self {
        Self {
            bills: Vec::new(),
            resources: Vec::new(),
            discussions: Vec::new(),
            campaigns: Vec::new(),
            volunteer: Vec::new(),
            notifications: Vec::new(),
            profile: None,
            sources: HashMap::new(),
            loading: HashSet::new(),
            loaded: HashSet::new(),
            connection_state: ConnectionState::Connected,
        }
    }

    /// Replace a page's records with a fresh load
    pub fn apply(&mut self, page: Page, data: PageData) {
        let source = match data {
            PageData::Bills(f) => {
                self.bills = f.items;
                Some(f.source)
            }
            PageData::Resources(f) => {
                self.resources = f.items;
                Some(f.source)
            }
            PageData::Discussions(f) => {
                self.discussions = f.items;
                Some(f.source)
            }
            PageData::Campaigns(f) => {
                self.campaigns = f.items;
                Some(f.source)
            }
            PageData::Volunteer(f) => {
                self.volunteer = f.items;
                Some(f.source)
            }
            PageData::Notifications(f) => {
                self.notifications = f.items;
                Some(f.source)
            }
            PageData::Profile(profile) => {
                self.profile = profile;
                None
            }
        };
        if let Some(source) = source {
            self.sources.insert(page, source);
        }
        self.loading.remove(&page);
        self.loaded.insert(page);
    }

    pub fn len(&self, page: Page) -> usize {
        with_records!(self, page, |items| items.len(), 0)
    }

    /// Filtered and sorted record indices for a page
    pub fn visible_indices(&self, page: Page, view: &PageView) -> Vec<usize> {
        with_records!(self, page, |items| visible_for(items, view), Vec::new())
    }

    pub fn listing(&self, page: Page, index: usize) -> Option<&dyn Listing> {
        with_records!(
            self,
            page,
            |items| items.get(index).map(|item| item as &dyn Listing),
            None
        )
    }

    /// Distinct categories on a page, sorted
    pub fn categories(&self, page: Page) -> Vec<String> {
        with_records!(self, page, |items| category_values(items), Vec::new())
    }

    /// Distinct kinds on a page, sorted
    pub fn kinds(&self, page: Page) -> Vec<String> {
        with_records!(self, page, |items| kind_values(items), Vec::new())
    }

    pub fn source(&self, page: Page) -> Option<DataSource> {
        self.sources.get(&page).copied()
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Optimistically flag a notification as read; false if it was not found
    /// or already read
    pub fn mark_notification_read(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(n) if !n.read => {
                n.read = true;
                true
            }
            _ => false,
        }
    }

    /// Undo an optimistic mark after the backend refused it
    pub fn mark_notification_unread(&mut self, id: &str) {
        if let Some(n) = self.notifications.iter_mut().find(|n| n.id == id) {
            n.read = false;
        }
    }
}

impl Default for DataModel {
    fn default() -> Self {
        Self::new()
    }
}
