//! API Response Handler
//!
//! Applies responses from the background request queue to the model.

use tracing::warn;

use ceka::logic::errors::{classify_error, format_error_message};
use ceka::model::ConnectionState;
use ceka::repository::DataSource;
use ceka::services::{ApiResponse, PageData};

use crate::App;

/// Handle API response from background service
///
/// Response types:
/// - PageLoaded: Records for one page (replaces what the page held)
/// - NotificationMarked: Backend result of an optimistic mark-as-read
/// - FeedbackSubmitted: Result of the feedback form
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::PageLoaded { page, data } => match data {
            Ok(data) => {
                let source = match &data {
                    PageData::Bills(f) => f.source,
                    PageData::Resources(f) => f.source,
                    PageData::Discussions(f) => f.source,
                    PageData::Campaigns(f) => f.source,
                    PageData::Volunteer(f) => f.source,
                    PageData::Notifications(f) => f.source,
                    PageData::Profile(_) => DataSource::Live,
                };
                // Cached rows mean the backend call itself failed
                if source != DataSource::Cache {
                    app.model.data.connection_state = ConnectionState::Connected;
                }
                app.model.data.apply(page, data);
                app.model.refresh_view(page);
            }
            Err(error) => {
                app.model.data.loading.remove(&page);
                let message = format_error_message(&error);
                warn!(page = page.label_key(), error = %message, "page load failed");
                app.model.data.connection_state = ConnectionState::Disconnected {
                    error_type: classify_error(&error),
                    message: message.clone(),
                };
                app.model.show_toast(format!("Error: {}", message));
            }
        },

        ApiResponse::NotificationMarked { id, result } => match result {
            Ok(()) => {
                let msg = app.ctx.t("notification.marked_read").to_string();
                app.model.show_toast(msg);
            }
            Err(error) => {
                app.model.data.mark_notification_unread(&id);
                app.model.refresh_view(ceka::Page::Notifications);
                app.model
                    .show_toast(format!("Error: {}", format_error_message(&error)));
            }
        },

        ApiResponse::FeedbackSubmitted { result } => match result {
            Ok(()) => {
                let msg = app.ctx.t("feedback.sent").to_string();
                app.model.show_toast(msg);
            }
            Err(error) => {
                app.model
                    .show_toast(format!("Error: {}", format_error_message(&error)));
            }
        },
    }
}
