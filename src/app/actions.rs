//! User actions that reach the backend or the context stores

use tracing::debug;

use ceka::api::FeedbackSubmission;
use ceka::model::FeedbackForm;
use ceka::services::ApiRequest;
use ceka::Page;

use crate::App;

impl App {
    /// Queue a load for a page unless one is already in flight
    pub(crate) fn request_page(&mut self, page: Page) {
        if !self.model.data.loading.insert(page) {
            return;
        }
        debug!(page = page.label_key(), "requesting page");
        if self.api_tx.send(ApiRequest::LoadPage(page)).is_err() {
            self.model.data.loading.remove(&page);
        }
    }

    pub(crate) fn reload_current_page(&mut self) {
        let page = self.model.current_page();
        self.request_page(page);
    }

    /// Optimistically mark the selected notification read, then tell the
    /// backend; a failure reverts the flag
    pub(crate) fn mark_selected_notification_read(&mut self) {
        if self.model.current_page() != Page::Notifications {
            return;
        }
        let Some(id) = self.model.selected_listing().map(|n| n.id().to_string()) else {
            return;
        };
        if self.model.data.mark_notification_read(&id) {
            self.model.refresh_current_view();
            let _ = self.api_tx.send(ApiRequest::MarkNotificationRead { id });
        }
    }

    pub(crate) fn open_feedback(&mut self) {
        self.model.ui.search_mode = false;
        self.model.ui.feedback = Some(FeedbackForm::default());
    }

    pub(crate) fn cancel_feedback(&mut self) {
        self.model.ui.feedback = None;
    }

    pub(crate) fn submit_feedback(&mut self) {
        let Some(form) = self.model.ui.feedback.as_ref() else {
            return;
        };
        if !form.is_submittable() {
            let msg = format!("Error: {}", self.ctx.t("feedback.empty"));
            self.model.show_toast(msg);
            return;
        }

        let submission = FeedbackSubmission {
            user_id: self.ctx.session.user_id(),
            category: form.category_name().to_string(),
            message: form.message.trim().to_string(),
            rating: form.rating,
        };
        self.model.ui.feedback = None;
        let _ = self.api_tx.send(ApiRequest::SubmitFeedback(submission));
    }

    pub(crate) fn toggle_theme(&mut self) {
        let theme = self.ctx.theme.toggle();
        let msg = format!("{}: {}", self.ctx.t("settings.theme"), theme.as_str());
        self.model.show_toast(msg);
    }

    pub(crate) fn toggle_language(&mut self) {
        let language = self.ctx.language.toggle();
        let msg = format!("{}: {}", self.ctx.t("settings.language"), language.code());
        self.model.show_toast(msg);
    }

    pub(crate) fn quit(&mut self) {
        self.model.ui.should_quit = true;
    }
}
