use anyhow::{Context, Result};
use async_trait::async_trait;
use std::future::Future;
use std::sync::Mutex;
use tracing::{debug, warn};

use super::{DataSource, Fetched, Repository};
use crate::api::{
    BackendClient, Bill, Campaign, Discussion, FeedbackSubmission, Notification, Profile,
    Record, Resource, VolunteerOpportunity,
};
use crate::cache::CacheDb;

/// Live backend with a write-through offline cache
pub struct RemoteRepository {
    client: BackendClient,
    cache: Mutex<CacheDb>,
}

impl RemoteRepository {
    pub fn new(client: BackendClient, cache: CacheDb) -> Self {
        Self {
            client,
            cache: Mutex::new(cache),
        }
    }

    fn cache(&self) -> std::sync::MutexGuard<'_, CacheDb> {
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Run a live list call, caching success and falling back to the cache
    /// on failure when it holds rows for the table
    async fn fetch<T, F>(&self, live: F) -> Result<Fetched<T>>
    where
        T: Record,
        F: Future<Output = Result<Vec<T>>> + Send,
    {
        let table = T::TABLE.as_str();
        match live.await {
            Ok(items) => {
                debug!(table, rows = items.len(), "live fetch");
                if let Err(e) = self.cache().save_records(&items) {
                    warn!(table, error = %e, "failed to write cache");
                }
                Ok(Fetched::new(items, DataSource::Live))
            }
            Err(err) => {
                let cached: Vec<T> = self.cache().load_records().unwrap_or_else(|e| {
                    warn!(table, error = %e, "failed to read cache");
                    Vec::new()
                });
                if cached.is_empty() {
                    return Err(err).with_context(|| format!("Failed to load {}", table));
                }
                warn!(table, error = %err, rows = cached.len(), "backend unavailable, serving cache");
                Ok(Fetched::new(cached, DataSource::Cache))
            }
        }
    }
}

#[async_trait]
impl Repository for RemoteRepository {
    async fn list_bills(&self) -> Result<Fetched<Bill>> {
        self.fetch(self.client.list::<Bill>()).await
    }

    async fn list_resources(&self) -> Result<Fetched<Resource>> {
        self.fetch(self.client.list::<Resource>()).await
    }

    async fn list_discussions(&self) -> Result<Fetched<Discussion>> {
        self.fetch(self.client.list::<Discussion>()).await
    }

    async fn list_campaigns(&self) -> Result<Fetched<Campaign>> {
        self.fetch(self.client.list::<Campaign>()).await
    }

    async fn list_volunteer_opportunities(&self) -> Result<Fetched<VolunteerOpportunity>> {
        self.fetch(self.client.list::<VolunteerOpportunity>()).await
    }

    async fn list_notifications(&self, user_id: &str) -> Result<Fetched<Notification>> {
        let mut fetched = self
            .fetch(self.client.list_for_user::<Notification>(user_id))
            .await?;
        // The cache is not keyed by user
        fetched.items.retain(|n| n.user_id == user_id);
        Ok(fetched)
    }

    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>> {
        self.client
            .get_profile(user_id)
            .await
            .context("Failed to load profile")
    }

    async fn mark_notification_read(&self, id: &str) -> Result<()> {
        self.client
            .mark_notification_read(id)
            .await
            .context("Failed to mark notification read")
    }

    async fn submit_feedback(&self, feedback: &FeedbackSubmission) -> Result<()> {
        self.client
            .insert_feedback(feedback)
            .await
            .context("Failed to submit feedback")
    }
}
