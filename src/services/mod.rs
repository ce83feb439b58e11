//! External Services
//!
//! - api: prioritised background request queue over the repository

pub mod api;

pub use api::{spawn_api_service, ApiRequest, ApiResponse, PageData, Priority};
