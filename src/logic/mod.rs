//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Error classification for the backend connection state
//! - filter: Multi-facet filtering of listings
//! - formatting: Counts, relative dates, width-aware truncation
//! - listing: Uniform read access to backend records
//! - navigation: Selection, page cycling and "load more" limits
//! - search: Free-text and glob matching
//! - sorting: Stable date/popularity/title ordering
//! - ui: UI state cycling and toast rules

pub mod errors;
pub mod filter;
pub mod formatting;
pub mod listing;
pub mod navigation;
pub mod search;
pub mod sorting;
pub mod ui;
