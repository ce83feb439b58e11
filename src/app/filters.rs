//! Search and facet filters
//!
//! The search query filters live: every keystroke re-runs the filter over the
//! current page. Category and type facets cycle through the values present in
//! the loaded records. Any filter change resets "load more".

use ceka::logic;

use crate::App;

impl App {
    /// Re-run filter + sort for the current page and reset paging
    fn apply_filters(&mut self) {
        let page_size = self.model.ui.page_size;
        self.model.navigation.current_view_mut().limit = page_size;
        self.model.refresh_current_view();
    }

    pub(crate) fn start_search(&mut self) {
        if self.model.current_page().has_list() {
            self.model.ui.search_mode = true;
        }
    }

    pub(crate) fn push_search_char(&mut self, c: char) {
        self.model.navigation.current_view_mut().criteria.query.push(c);
        self.apply_filters();
    }

    pub(crate) fn pop_search_char(&mut self) {
        self.model.navigation.current_view_mut().criteria.query.pop();
        self.apply_filters();
    }

    /// Leave the search prompt keeping the query
    pub(crate) fn accept_search(&mut self) {
        self.model.ui.search_mode = false;
    }

    /// Leave the search prompt and drop the query
    pub(crate) fn clear_search(&mut self) {
        self.model.ui.search_mode = false;
        self.model.navigation.current_view_mut().criteria.query.clear();
        self.apply_filters();
    }

    pub(crate) fn cycle_category(&mut self) {
        let page = self.model.current_page();
        let values = self.model.data.categories(page);
        let criteria = &mut self.model.navigation.current_view_mut().criteria;
        let current = criteria.categories.iter().next().map(String::as_str);
        let next = logic::ui::cycle_facet(current, &values);
        criteria.set_category(next.as_deref());
        self.apply_filters();
    }

    pub(crate) fn cycle_kind(&mut self) {
        let page = self.model.current_page();
        let values = self.model.data.kinds(page);
        let criteria = &mut self.model.navigation.current_view_mut().criteria;
        let current = criteria.kinds.iter().next().map(String::as_str);
        let next = logic::ui::cycle_facet(current, &values);
        criteria.set_kind(next.as_deref());
        self.apply_filters();
    }

    pub(crate) fn clear_facets(&mut self) {
        self.model.navigation.current_view_mut().criteria.clear_facets();
        self.apply_filters();
    }
}
