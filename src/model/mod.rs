//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **DataModel**: Records per page, data sources, connection state
//! - **NavigationModel**: Current page, per-page filter/sort/selection
//! - **UiModel**: Preferences, search prompt, feedback form, toast
//!
//! Key principles:
//! - Clone + Debug: Can snapshot state
//! - No services: All I/O lives in the App runtime
//! - Pure accessors: Helper methods are side-effect free

pub mod data;
pub mod navigation;
pub mod types;
pub mod ui;

pub use data::DataModel;
pub use navigation::NavigationModel;
pub use types::*;
pub use ui::UiModel;

use crate::logic;
use crate::logic::listing::Listing;
use crate::Page;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub data: DataModel,
    pub navigation: NavigationModel,
    pub ui: UiModel,
}

impl Model {
    pub fn new(vim_mode: bool, page_size: usize) -> Self {
        Self {
            data: DataModel::new(),
            navigation: NavigationModel::new(page_size),
            ui: UiModel::new(vim_mode, page_size),
        }
    }

    pub fn current_page(&self) -> Page {
        self.navigation.page
    }

    /// Recompute a page's visible rows, keeping the selected record when it
    /// survives the new filter
    pub fn refresh_view(&mut self, page: Page) {
        let previous = self.navigation.view(page).selected_record();
        let visible = self.data.visible_indices(page, self.navigation.view(page));

        let view = self.navigation.view_mut(page);
        view.visible = visible;

        let shown_len = view.shown().len();
        view.selected = match previous.and_then(|rec| view.shown().iter().position(|&i| i == rec)) {
            Some(pos) => Some(pos),
            None => logic::navigation::clamp_selection(view.selected, shown_len),
        };
    }

    pub fn refresh_current_view(&mut self) {
        self.refresh_view(self.navigation.page);
    }

    /// Record under the cursor on the current page
    pub fn selected_listing(&self) -> Option<&dyn Listing> {
        let page = self.navigation.page;
        let index = self.navigation.view(page).selected_record()?;
        self.data.listing(page, index)
    }

    /// Rows currently shown on the current page
    pub fn shown_len(&self) -> usize {
        self.navigation.current_view().shown().len()
    }

    pub fn is_loading(&self, page: Page) -> bool {
        self.data.loading.contains(&page)
    }

    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    pub fn should_dismiss_toast(&self) -> bool {
        self.ui.should_dismiss_toast()
    }

    pub fn dismiss_toast(&mut self) {
        self.ui.dismiss_toast();
    }
}
