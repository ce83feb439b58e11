//! Sorting orchestration methods
//!
//! Sort key and direction are per page. The selected record is preserved
//! across re-sorts by `Model::refresh_view`.

use ceka::logic;

use crate::App;

impl App {
    pub(crate) fn cycle_sort_key(&mut self) {
        let view = self.model.navigation.current_view_mut();
        view.sort_key = logic::ui::cycle_sort_key(view.sort_key);
        self.model.refresh_current_view();
    }

    pub(crate) fn toggle_sort_direction(&mut self) {
        let view = self.model.navigation.current_view_mut();
        view.direction = view.direction.toggled();
        self.model.refresh_current_view();
    }
}
