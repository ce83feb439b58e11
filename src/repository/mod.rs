//! Data access seam
//!
//! Everything above this layer talks to [`Repository`]; whether the rows come
//! from the live backend, the offline cache or the built-in demo set is
//! reported through [`DataSource`] and nowhere else.

use anyhow::Result;
use async_trait::async_trait;

use crate::api::{
    Bill, Campaign, Discussion, FeedbackSubmission, Notification, Profile, Resource,
    VolunteerOpportunity,
};

mod memory;
mod remote;
mod seed;

pub use memory::{demo_session, InMemoryRepository, DEMO_USER_ID};
pub use remote::RemoteRepository;

/// Where a list of records came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Live,
    /// Backend failed; rows are the last cached copy
    Cache,
    Demo,
}

impl DataSource {
    /// Translation key for the status bar
    pub fn label_key(&self) -> &'static str {
        match self {
            DataSource::Live => "source.live",
            DataSource::Cache => "source.cache",
            DataSource::Demo => "source.demo",
        }
    }
}

/// A list result tagged with its source
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub items: Vec<T>,
    pub source: DataSource,
}

impl<T> Fetched<T> {
    pub fn new(items: Vec<T>, source: DataSource) -> Self {
        Self { items, source }
    }
}

#[async_trait]
pub trait Repository: Send + Sync {
    async fn list_bills(&self) -> Result<Fetched<Bill>>;
    async fn list_resources(&self) -> Result<Fetched<Resource>>;
    async fn list_discussions(&self) -> Result<Fetched<Discussion>>;
    async fn list_campaigns(&self) -> Result<Fetched<Campaign>>;
    async fn list_volunteer_opportunities(&self) -> Result<Fetched<VolunteerOpportunity>>;
    async fn list_notifications(&self, user_id: &str) -> Result<Fetched<Notification>>;
    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>>;
    async fn mark_notification_read(&self, id: &str) -> Result<()>;
    async fn submit_feedback(&self, feedback: &FeedbackSubmission) -> Result<()>;
}
