//! Page switching, row selection and "load more"

use ceka::logic;
use ceka::Page;

use crate::App;

impl App {
    /// Switch to a page, loading it the first time it is shown
    pub(crate) fn switch_page(&mut self, page: Page) {
        if self.model.navigation.page == page {
            return;
        }
        self.model.navigation.page = page;
        self.model.ui.search_mode = false;

        if !self.model.data.loaded.contains(&page) {
            self.request_page(page);
        }
        self.model.refresh_view(page);
    }

    pub(crate) fn next_page(&mut self) {
        self.switch_page(logic::navigation::next_page(self.model.navigation.page));
    }

    pub(crate) fn prev_page(&mut self) {
        self.switch_page(logic::navigation::prev_page(self.model.navigation.page));
    }

    pub(crate) fn select_next(&mut self) {
        let len = self.model.shown_len();
        let view = self.model.navigation.current_view_mut();
        view.selected = logic::navigation::next_selection(view.selected, len);
    }

    pub(crate) fn select_prev(&mut self) {
        let len = self.model.shown_len();
        let view = self.model.navigation.current_view_mut();
        view.selected = logic::navigation::prev_selection(view.selected, len);
    }

    pub(crate) fn select_first(&mut self) {
        let len = self.model.shown_len();
        self.model.navigation.current_view_mut().selected = if len > 0 { Some(0) } else { None };
    }

    pub(crate) fn select_last(&mut self) {
        let len = self.model.shown_len();
        self.model.navigation.current_view_mut().selected = len.checked_sub(1);
    }

    /// Reveal another page of rows on the current list
    pub(crate) fn load_more(&mut self) {
        let page_size = self.model.ui.page_size;
        let view = self.model.navigation.current_view_mut();
        let total = view.visible.len();
        if logic::navigation::has_more(view.limit, total) {
            view.limit = logic::navigation::grow_limit(view.limit, total, page_size);
        }
    }
}
