use anyhow::{Context, Result};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::context::Session;

/// Backend tables the client reads or writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Bills,
    Resources,
    Discussions,
    Campaigns,
    VolunteerOpportunities,
    Notifications,
    Profiles,
    Feedback,
}

impl Table {
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Bills => "bills",
            Table::Resources => "resources",
            Table::Discussions => "discussions",
            Table::Campaigns => "campaigns",
            Table::VolunteerOpportunities => "volunteer_opportunities",
            Table::Notifications => "notifications",
            Table::Profiles => "profiles",
            Table::Feedback => "feedback",
        }
    }
}

/// A row type stored in one backend table
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const TABLE: Table;

    fn record_id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub status: String, // "First Reading", "Committee Stage", "Passed", ...
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sponsor: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub views: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub resource_type: String, // "document", "video", "infographic", "audio"
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub downloads: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discussion {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub replies: u64,
    #[serde(default)]
    pub views: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub goal: u64,
    #[serde(default)]
    pub supporters: u64,
    #[serde(default)]
    pub status: String, // "active", "completed"
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerOpportunity {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type", default)]
    pub commitment: String, // "remote", "in-person", "hybrid"
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: String, // "bill_update", "discussion_reply", "system"
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    #[serde(default)]
    pub user_id: Option<String>,
    pub category: String,
    pub message: String,
    #[serde(default)]
    pub rating: Option<u8>,
}

macro_rules! impl_record {
    ($ty:ty, $table:expr) => {
        impl Record for $ty {
            const TABLE: Table = $table;

            fn record_id(&self) -> &str {
                &self.id
            }
        }
    };
}

impl_record!(Bill, Table::Bills);
impl_record!(Resource, Table::Resources);
impl_record!(Discussion, Table::Discussions);
impl_record!(Campaign, Table::Campaigns);
impl_record!(VolunteerOpportunity, Table::VolunteerOpportunities);
impl_record!(Notification, Table::Notifications);
impl_record!(Profile, Table::Profiles);

/// Typed failures reported by the backend
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("not signed in")]
    NotAuthenticated,
}

#[derive(Debug, Deserialize)]
struct AuthUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    expires_in: i64,
    user: AuthUser,
}

/// Thin REST client for the hosted backend (PostgREST tables + token auth)
#[derive(Clone)]
pub struct BackendClient {
    base_url: String,
    anon_key: String,
    access_token: Option<String>,
    client: Client,
}

impl BackendClient {
    pub fn new(base_url: String, anon_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
            access_token: None,
            client,
        })
    }

    /// Copy of this client that authenticates as the signed-in user
    pub fn with_access_token(&self, token: &str) -> Self {
        Self {
            access_token: Some(token.to_string()),
            ..self.clone()
        }
    }

    fn request(&self, method: Method, path_and_query: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path_and_query);
        let bearer = self.access_token.as_deref().unwrap_or(&self.anon_key);
        self.client
            .request(method, url)
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer)
    }

    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(BackendError::Status {
            status: status.as_u16(),
            message,
        }
        .into())
    }

    /// Fetch every row of a table, newest first
    pub async fn list<T: Record>(&self) -> Result<Vec<T>> {
        let path = format!("/rest/v1/{}?select=*&order=created_at.desc", T::TABLE.as_str());
        let response = self.request(Method::GET, &path).send().await?;
        let rows = Self::check(response)
            .await?
            .json::<Vec<T>>()
            .await
            .with_context(|| format!("Failed to decode {} rows", T::TABLE.as_str()))?;
        Ok(rows)
    }

    /// Fetch the rows of a table owned by one user, newest first
    pub async fn list_for_user<T: Record>(&self, user_id: &str) -> Result<Vec<T>> {
        let path = format!(
            "/rest/v1/{}?select=*&user_id=eq.{}&order=created_at.desc",
            T::TABLE.as_str(),
            urlencoding::encode(user_id)
        );
        let response = self.request(Method::GET, &path).send().await?;
        let rows = Self::check(response).await?.json::<Vec<T>>().await?;
        Ok(rows)
    }

    pub async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>> {
        let path = format!(
            "/rest/v1/{}?select=*&id=eq.{}",
            Table::Profiles.as_str(),
            urlencoding::encode(user_id)
        );
        let response = self.request(Method::GET, &path).send().await?;
        let mut rows = Self::check(response).await?.json::<Vec<Profile>>().await?;
        Ok(if rows.is_empty() { None } else { Some(rows.remove(0)) })
    }

    pub async fn mark_notification_read(&self, id: &str) -> Result<()> {
        let path = format!(
            "/rest/v1/{}?id=eq.{}",
            Table::Notifications.as_str(),
            urlencoding::encode(id)
        );
        let response = self
            .request(Method::PATCH, &path)
            .json(&serde_json::json!({ "read": true }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn insert_feedback(&self, feedback: &FeedbackSubmission) -> Result<()> {
        let path = format!("/rest/v1/{}", Table::Feedback.as_str());
        let response = self
            .request(Method::POST, &path)
            .header("Prefer", "return=minimal")
            .json(feedback)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Exchange email + password for a session
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session> {
        let response = self
            .request(Method::POST, "/auth/v1/token?grant_type=password")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .context("Failed to reach auth endpoint")?;
        let token: TokenResponse = Self::check(response).await?.json().await?;

        Ok(Session {
            user_id: token.user.id,
            email: token.user.email.unwrap_or_else(|| email.to_string()),
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            expires_at: Utc::now() + ChronoDuration::seconds(token.expires_in),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_deserializes_type_field() {
        let json = r#"{
            "id": "r1",
            "title": "Understanding the Constitution",
            "description": "A guide",
            "type": "document",
            "category": "constitution",
            "tags": ["rights"],
            "views": 10,
            "downloads": 4,
            "created_at": "2024-03-01T10:00:00Z"
        }"#;
        let resource: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.resource_type, "document");
        assert_eq!(resource.downloads, 4);
        assert!(resource.url.is_none());
    }

    #[test]
    fn test_bill_defaults_missing_fields() {
        let json = r#"{
            "id": "b1",
            "title": "Finance Bill",
            "status": "Committee Stage",
            "created_at": "2024-05-10T00:00:00Z"
        }"#;
        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.views, 0);
        assert!(bill.tags.is_empty());
        assert_eq!(bill.summary, "");
    }

    #[test]
    fn test_notification_kind_renamed() {
        let json = r#"{
            "id": "n1",
            "user_id": "u1",
            "title": "Bill updated",
            "type": "bill_update",
            "created_at": "2024-05-10T00:00:00Z"
        }"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(n.kind, "bill_update");
        assert!(!n.read);
    }

    #[test]
    fn test_record_tables() {
        assert_eq!(Bill::TABLE.as_str(), "bills");
        assert_eq!(VolunteerOpportunity::TABLE.as_str(), "volunteer_opportunities");
        assert_eq!(Profile::TABLE, Table::Profiles);
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = BackendClient::new("https://example.test/".to_string(), "key".to_string()).unwrap();
        assert_eq!(client.base_url, "https://example.test");
        assert!(client.access_token.is_none());
        let authed = client.with_access_token("tok");
        assert_eq!(authed.access_token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_backend_error_message() {
        let err = BackendError::Status {
            status: 401,
            message: "JWT expired".to_string(),
        };
        assert_eq!(err.to_string(), "backend returned HTTP 401: JWT expired");
    }
}
