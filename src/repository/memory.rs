use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Mutex;

use super::{seed, DataSource, Fetched, Repository};
use crate::api::{
    Bill, Campaign, Discussion, FeedbackSubmission, Notification, Profile, Resource,
    VolunteerOpportunity,
};
use crate::context::Session;

/// User id the demo notifications and profile belong to
pub const DEMO_USER_ID: &str = "demo-user";

/// Local session for the demo user; never sent anywhere
pub fn demo_session() -> Session {
    Session {
        user_id: DEMO_USER_ID.to_string(),
        email: "demo@ceka.co.ke".to_string(),
        access_token: String::new(),
        refresh_token: None,
        expires_at: Utc::now() + Duration::days(365),
    }
}

#[derive(Debug, Default)]
struct Tables {
    bills: Vec<Bill>,
    resources: Vec<Resource>,
    discussions: Vec<Discussion>,
    campaigns: Vec<Campaign>,
    volunteer: Vec<VolunteerOpportunity>,
    notifications: Vec<Notification>,
    profiles: Vec<Profile>,
    feedback: Vec<FeedbackSubmission>,
}

/// Repository backed by in-process vectors; mutations live until drop
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    tables: Mutex<Tables>,
}

impl InMemoryRepository {
    /// Empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository preloaded with the demo data set
    pub fn seeded() -> Self {
        let tables = Tables {
            bills: seed::bills(),
            resources: seed::resources(),
            discussions: seed::discussions(),
            campaigns: seed::campaigns(),
            volunteer: seed::volunteer_opportunities(),
            notifications: seed::notifications(DEMO_USER_ID),
            profiles: vec![seed::profile(DEMO_USER_ID)],
            feedback: Vec::new(),
        };
        Self {
            tables: Mutex::new(tables),
        }
    }

    pub fn with_resources(self, resources: Vec<Resource>) -> Self {
        self.lock().resources = resources;
        self
    }

    pub fn with_discussions(self, discussions: Vec<Discussion>) -> Self {
        self.lock().discussions = discussions;
        self
    }

    pub fn with_notifications(self, notifications: Vec<Notification>) -> Self {
        self.lock().notifications = notifications;
        self
    }

    /// Feedback submitted so far
    pub fn submitted_feedback(&self) -> Vec<FeedbackSubmission> {
        self.lock().feedback.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Tables> {
        // Poisoned locks still hold whole tables
        self.tables.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn list_bills(&self) -> Result<Fetched<Bill>> {
        Ok(Fetched::new(self.lock().bills.clone(), DataSource::Demo))
    }

    async fn list_resources(&self) -> Result<Fetched<Resource>> {
        Ok(Fetched::new(self.lock().resources.clone(), DataSource::Demo))
    }

    async fn list_discussions(&self) -> Result<Fetched<Discussion>> {
        Ok(Fetched::new(self.lock().discussions.clone(), DataSource::Demo))
    }

    async fn list_campaigns(&self) -> Result<Fetched<Campaign>> {
        Ok(Fetched::new(self.lock().campaigns.clone(), DataSource::Demo))
    }

    async fn list_volunteer_opportunities(&self) -> Result<Fetched<VolunteerOpportunity>> {
        Ok(Fetched::new(self.lock().volunteer.clone(), DataSource::Demo))
    }

    async fn list_notifications(&self, user_id: &str) -> Result<Fetched<Notification>> {
        let items = self
            .lock()
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        Ok(Fetched::new(items, DataSource::Demo))
    }

    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>> {
        Ok(self.lock().profiles.iter().find(|p| p.id == user_id).cloned())
    }

    async fn mark_notification_read(&self, id: &str) -> Result<()> {
        let mut tables = self.lock();
        match tables.notifications.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                Ok(())
            }
            None => bail!("Notification {} not found", id),
        }
    }

    async fn submit_feedback(&self, feedback: &FeedbackSubmission) -> Result<()> {
        if feedback.message.trim().is_empty() {
            bail!("Feedback message is empty");
        }
        self.lock().feedback.push(feedback.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_lists_are_demo() {
        let repo = InMemoryRepository::seeded();
        let bills = repo.list_bills().await.unwrap();
        assert_eq!(bills.source, DataSource::Demo);
        assert!(!bills.items.is_empty());
        assert!(!repo.list_resources().await.unwrap().items.is_empty());
    }

    #[tokio::test]
    async fn test_notifications_are_per_user() {
        let repo = InMemoryRepository::seeded();
        assert!(!repo.list_notifications(DEMO_USER_ID).await.unwrap().items.is_empty());
        assert!(repo.list_notifications("someone-else").await.unwrap().items.is_empty());
    }

    #[tokio::test]
    async fn test_mark_notification_read() {
        let repo = InMemoryRepository::seeded();
        repo.mark_notification_read("n1").await.unwrap();
        let items = repo.list_notifications(DEMO_USER_ID).await.unwrap().items;
        assert!(items.iter().find(|n| n.id == "n1").unwrap().read);

        assert!(repo.mark_notification_read("missing").await.is_err());
    }

    #[tokio::test]
    async fn test_submit_feedback() {
        let repo = InMemoryRepository::new();
        let mut fb = FeedbackSubmission {
            user_id: None,
            category: "general".to_string(),
            message: "   ".to_string(),
            rating: None,
        };
        assert!(repo.submit_feedback(&fb).await.is_err());

        fb.message = "Great resource library".to_string();
        repo.submit_feedback(&fb).await.unwrap();
        assert_eq!(repo.submitted_feedback(), vec![fb]);
    }

    #[tokio::test]
    async fn test_demo_profile() {
        let repo = InMemoryRepository::seeded();
        assert!(repo.get_profile(DEMO_USER_ID).await.unwrap().is_some());
        assert!(repo.get_profile("nobody").await.unwrap().is_none());
    }
}
