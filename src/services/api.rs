use anyhow::Result;
use chrono::Utc;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::time::{interval, Duration};
use tracing::debug;

use crate::api::{
    BackendError, Bill, Campaign, Discussion, FeedbackSubmission, Notification, Profile,
    Resource, VolunteerOpportunity,
};
use crate::context::Session;
use crate::repository::{Fetched, Repository};
use crate::Page;

/// Priority level for API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High,   // User-initiated mutations (mark read, feedback)
    Medium, // Page loads
    Low,    // Profile
}

/// Unique identifier for deduplicating requests
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum RequestKey {
    Page(Page),
    Profile { user_id: String },
    /// Mutations never deduplicate
    Mutation(u64),
}

/// API request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// Load the records behind a page
    LoadPage(Page),

    LoadProfile { user_id: String },

    MarkNotificationRead { id: String },

    SubmitFeedback(FeedbackSubmission),
}

impl ApiRequest {
    pub fn priority(&self) -> Priority {
        match self {
            ApiRequest::MarkNotificationRead { .. } | ApiRequest::SubmitFeedback(_) => {
                Priority::High
            }
            ApiRequest::LoadPage(_) => Priority::Medium,
            ApiRequest::LoadProfile { .. } => Priority::Low,
        }
    }

    fn key(&self, seq: u64) -> RequestKey {
        match self {
            ApiRequest::LoadPage(page) => RequestKey::Page(*page),
            ApiRequest::LoadProfile { user_id } => RequestKey::Profile {
                user_id: user_id.clone(),
            },
            ApiRequest::MarkNotificationRead { .. } | ApiRequest::SubmitFeedback(_) => {
                RequestKey::Mutation(seq)
            }
        }
    }
}

/// Records loaded for one page
#[derive(Debug, Clone)]
pub enum PageData {
    Bills(Fetched<Bill>),
    Resources(Fetched<Resource>),
    Discussions(Fetched<Discussion>),
    Campaigns(Fetched<Campaign>),
    Volunteer(Fetched<VolunteerOpportunity>),
    Notifications(Fetched<Notification>),
    Profile(Option<Profile>),
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    PageLoaded {
        page: Page,
        data: Result<PageData, anyhow::Error>,
    },

    NotificationMarked {
        id: String,
        result: Result<(), anyhow::Error>,
    },

    FeedbackSubmitted {
        result: Result<(), anyhow::Error>,
    },
}

/// Internal message for tracking completed requests
pub(crate) enum InternalMessage {
    Completed(RequestKey),
}

/// API service worker that processes requests in the background
pub struct ApiService {
    repo: Arc<dyn Repository>,
    session: watch::Receiver<Option<Session>>,
    request_queue: VecDeque<(ApiRequest, Priority, RequestKey)>,
    in_flight: HashSet<RequestKey>,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    completion_tx: mpsc::UnboundedSender<InternalMessage>,
    max_concurrent: usize,
    seq: u64,
}

impl ApiService {
    pub(crate) fn new(
        repo: Arc<dyn Repository>,
        session: watch::Receiver<Option<Session>>,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        completion_tx: mpsc::UnboundedSender<InternalMessage>,
    ) -> Self {
        Self {
            repo,
            session,
            request_queue: VecDeque::new(),
            in_flight: HashSet::new(),
            response_tx,
            completion_tx,
            max_concurrent: 4,
            seq: 0,
        }
    }

    /// Add a request to the queue, dropping duplicates of queued or
    /// in-flight loads
    fn enqueue(&mut self, request: ApiRequest) {
        self.seq += 1;
        let key = request.key(self.seq);

        if self.in_flight.contains(&key) || self.request_queue.iter().any(|(_, _, k)| *k == key)
        {
            debug!(?key, "dropping duplicate request");
            return;
        }

        let priority = request.priority();

        // Insert based on priority (high priority at front)
        let insert_pos = self
            .request_queue
            .iter()
            .position(|(_, p, _)| *p > priority)
            .unwrap_or(self.request_queue.len());

        self.request_queue.insert(insert_pos, (request, priority, key));
    }

    /// Process the next request from the queue
    fn process_next(&mut self) {
        if self.in_flight.len() >= self.max_concurrent {
            return; // At capacity, wait for some to complete
        }

        let Some((request, _, key)) = self.request_queue.pop_front() else {
            return;
        };

        self.in_flight.insert(key.clone());

        let repo = Arc::clone(&self.repo);
        let user_id = current_user(&self.session);
        let response_tx = self.response_tx.clone();
        let completion_tx = self.completion_tx.clone();

        // No per-request retries; the user reloads with `R`
        tokio::spawn(async move {
            debug!(?request, "executing request");
            let response = Self::execute_request(repo.as_ref(), user_id, request).await;
            let _ = response_tx.send(response);
            let _ = completion_tx.send(InternalMessage::Completed(key));
        });
    }

    /// Execute an API request and return the response
    async fn execute_request(
        repo: &dyn Repository,
        user_id: Option<String>,
        request: ApiRequest,
    ) -> ApiResponse {
        match request {
            ApiRequest::LoadPage(page) => {
                let data = Self::load_page(repo, user_id, page).await;
                if let Err(e) = &data {
                    debug!(page = page.label_key(), error = %e, "page load failed");
                }
                ApiResponse::PageLoaded { page, data }
            }

            ApiRequest::LoadProfile { user_id } => {
                let data = repo.get_profile(&user_id).await.map(PageData::Profile);
                ApiResponse::PageLoaded {
                    page: Page::Profile,
                    data,
                }
            }

            ApiRequest::MarkNotificationRead { id } => {
                let result = repo.mark_notification_read(&id).await;
                ApiResponse::NotificationMarked { id, result }
            }

            ApiRequest::SubmitFeedback(feedback) => {
                let result = repo.submit_feedback(&feedback).await;
                ApiResponse::FeedbackSubmitted { result }
            }
        }
    }

    async fn load_page(
        repo: &dyn Repository,
        user_id: Option<String>,
        page: Page,
    ) -> Result<PageData> {
        Ok(match page {
            Page::Bills => PageData::Bills(repo.list_bills().await?),
            Page::Resources => PageData::Resources(repo.list_resources().await?),
            Page::Discussions => PageData::Discussions(repo.list_discussions().await?),
            Page::Campaigns => PageData::Campaigns(repo.list_campaigns().await?),
            Page::Volunteer => PageData::Volunteer(repo.list_volunteer_opportunities().await?),
            Page::Notifications => {
                let user_id = user_id.ok_or(BackendError::NotAuthenticated)?;
                PageData::Notifications(repo.list_notifications(&user_id).await?)
            }
            Page::Profile => {
                let user_id = user_id.ok_or(BackendError::NotAuthenticated)?;
                PageData::Profile(repo.get_profile(&user_id).await?)
            }
        })
    }
}

/// User id of a live session, if any
fn current_user(session: &watch::Receiver<Option<Session>>) -> Option<String> {
    session
        .borrow()
        .as_ref()
        .filter(|s| !s.is_expired_at(Utc::now()))
        .map(|s| s.user_id.clone())
}

/// Spawn the API service worker
pub fn spawn_api_service(
    repo: Arc<dyn Repository>,
    session: watch::Receiver<Option<Session>>,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<InternalMessage>();

    tokio::spawn(async move {
        let mut service = ApiService::new(repo, session, response_tx, completion_tx);

        // Ticker for processing queue
        let mut tick = interval(Duration::from_millis(10));

        loop {
            tokio::select! {
                request = request_rx.recv() => {
                    match request {
                        Some(request) => service.enqueue(request),
                        // Every sender dropped: the app has quit
                        None => break,
                    }
                }

                Some(InternalMessage::Completed(key)) = completion_rx.recv() => {
                    service.in_flight.remove(&key);
                }

                _ = tick.tick() => {
                    for _ in 0..service.max_concurrent {
                        if service.request_queue.is_empty() {
                            break;
                        }
                        service.process_next();
                    }
                }
            }
        }
    });

    (request_tx, response_rx)
}
