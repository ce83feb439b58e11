//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in ceka::model)
//! - Services (API request queue, context stores, widget controller)
//! - Handlers (in src/handlers/)
//! - Logic (pure business logic in ceka::logic)
//!
//! Methods are kept as `impl App` but organized by functional domain
//! for better discoverability and maintainability.

pub(crate) mod actions;
pub(crate) mod filters;
pub(crate) mod navigation;
pub(crate) mod sorting;
pub(crate) mod widget;
