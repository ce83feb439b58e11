//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - api: API responses from background service
//! - keyboard: User keyboard input
//! - mouse: Pointer movement and clicks (donation widget hover/expand)
//!
//! Handlers are free functions that take &mut App and process one event.

pub mod api;
pub mod keyboard;
pub mod mouse;

// Re-export for convenience
pub use api::handle_api_response;
pub use keyboard::handle_key;
pub use mouse::handle_mouse;
