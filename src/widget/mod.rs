//! Donation Widget
//!
//! The floating "support us" call-to-action:
//! - controller: timer-driven state machine (show, pulse, idle, expand, expire)
//! - timers: named one-shot deadlines the controller arms and cancels

pub mod controller;
pub mod timers;

pub use controller::{
    TimingsError, WidgetController, WidgetEvent, WidgetPhase, WidgetState, WidgetTimings,
    WidgetView,
};
pub use timers::{TimerId, TimerSet};
