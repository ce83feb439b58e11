//! Navigation Model
//!
//! Current page plus the filter/sort/selection state of every list page.

use super::types::PageView;
use crate::Page;

#[derive(Clone, Debug)]
pub struct NavigationModel {
    pub page: Page,

    /// One view per page, indexed by `Page::index`
    pub views: Vec<PageView>,
}

impl NavigationModel {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: Page::Bills,
            views: Page::ALL.iter().map(|_| PageView::new(page_size)).collect(),
        }
    }

    pub fn view(&self, page: Page) -> &PageView {
        &self.views[page.index()]
    }

    pub fn view_mut(&mut self, page: Page) -> &mut PageView {
        &mut self.views[page.index()]
    }

    pub fn current_view(&self) -> &PageView {
        self.view(self.page)
    }

    pub fn current_view_mut(&mut self) -> &mut PageView {
        let page = self.page;
        self.view_mut(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_view_per_page() {
        let mut nav = NavigationModel::new(20);
        assert_eq!(nav.views.len(), Page::ALL.len());

        nav.page = Page::Resources;
        nav.current_view_mut().criteria.query = "rights".to_string();
        assert_eq!(nav.view(Page::Resources).criteria.query, "rights");
        assert!(nav.view(Page::Bills).criteria.query.is_empty());
    }
}
