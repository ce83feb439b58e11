//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, the search prompt, the feedback form and visual state.

use std::time::Instant;

use super::types::{FeedbackForm, VimCommandState};

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Vim command state (for 'gg' double-key)
    pub vim_command_state: VimCommandState,

    /// Rows added per "load more"
    pub page_size: usize,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// Feedback form, when open
    pub feedback: Option<FeedbackForm>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    // ============================================
    // SEARCH
    // ============================================
    /// Whether search input is active (receiving keystrokes)
    pub search_mode: bool,

    // ============================================
    // VISUAL STATE
    // ============================================
    /// Static support line replaces the widget once it has expired
    pub support_link_visible: bool,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool, page_size: usize) -> Self {
        Self {
            vim_mode,
            vim_command_state: VimCommandState::None,
            page_size,
            feedback: None,
            toast_message: None,
            search_mode: false,
            support_link_visible: false,
            should_quit: false,
        }
    }

    /// Check if any modal input is currently active
    pub fn has_modal(&self) -> bool {
        self.feedback.is_some() || self.search_mode
    }

    pub fn close_all_modals(&mut self) {
        self.feedback = None;
        self.search_mode = false;
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_model_creation() {
        let model = UiModel::new(false, 20);
        assert!(!model.vim_mode);
        assert!(!model.should_quit);
        assert!(!model.support_link_visible);
        assert!(!model.has_modal());
    }

    #[test]
    fn test_close_all_modals() {
        let mut model = UiModel::new(false, 20);
        model.feedback = Some(FeedbackForm::default());
        model.search_mode = true;
        assert!(model.has_modal());

        model.close_all_modals();
        assert!(!model.has_modal());
    }

    #[test]
    fn test_toast() {
        let mut model = UiModel::new(false, 20);
        model.show_toast("Test".to_string());
        assert!(model.toast_message.is_some());
        assert!(!model.should_dismiss_toast());

        model.dismiss_toast();
        assert!(model.toast_message.is_none());
    }
}
