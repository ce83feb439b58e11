//! Shared types for the Model

use crate::logic::errors::ErrorType;
use crate::logic::filter::FilterCriteria;
use crate::{SortDirection, SortKey};

/// Vim command state for tracking double-key commands like 'gg'
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG, // First 'g' pressed, waiting for second 'g'
}

/// Backend reachability as last observed
#[derive(Clone, Debug, PartialEq)]
pub enum ConnectionState {
    Connected,
    Disconnected {
        error_type: ErrorType,
        message: String,
    },
}

/// Filter, sort and paging state of one list page
#[derive(Clone, Debug, PartialEq)]
pub struct PageView {
    pub criteria: FilterCriteria,
    pub sort_key: SortKey,
    pub direction: SortDirection,
    /// Index into `visible`
    pub selected: Option<usize>,
    /// Indices into the page's records after filter + sort
    pub visible: Vec<usize>,
    /// Rows shown; grows with "load more"
    pub limit: usize,
}

impl PageView {
    pub fn new(page_size: usize) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort_key: SortKey::Date,
            direction: SortDirection::Descending,
            selected: None,
            visible: Vec::new(),
            limit: page_size,
        }
    }

    /// Visible record indices within the current limit
    pub fn shown(&self) -> &[usize] {
        &self.visible[..self.visible.len().min(self.limit)]
    }

    /// Record index of the selected row
    pub fn selected_record(&self) -> Option<usize> {
        self.selected.and_then(|i| self.shown().get(i).copied())
    }
}

pub const FEEDBACK_CATEGORIES: [&str; 4] = ["general", "bug", "content", "suggestion"];

/// Which field of the feedback form receives keystrokes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackField {
    Category,
    Rating,
    Message,
}

/// In-progress feedback form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackForm {
    pub category: usize,
    pub rating: Option<u8>,
    pub message: String,
    pub field: FeedbackField,
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self {
            category: 0,
            rating: None,
            message: String::new(),
            field: FeedbackField::Message,
        }
    }
}

impl FeedbackForm {
    pub fn category_name(&self) -> &'static str {
        FEEDBACK_CATEGORIES[self.category % FEEDBACK_CATEGORIES.len()]
    }

    pub fn next_field(&mut self) {
        self.field = match self.field {
            FeedbackField::Category => FeedbackField::Rating,
            FeedbackField::Rating => FeedbackField::Message,
            FeedbackField::Message => FeedbackField::Category,
        };
    }

    pub fn cycle_category(&mut self) {
        self.category = (self.category + 1) % FEEDBACK_CATEGORIES.len();
    }

    /// Ratings run 1..=5; anything else clears
    pub fn set_rating(&mut self, rating: u8) {
        self.rating = if (1..=5).contains(&rating) {
            Some(rating)
        } else {
            None
        };
    }

    pub fn is_submittable(&self) -> bool {
        !self.message.trim().is_empty()
    }
}
