//! UI state transition logic
//!
//! Pure functions for UI state cycling and transitions.

use ratatui::layout::{Position, Rect};
use std::time::{Duration, Instant};

use crate::widget::WidgetEvent;
use crate::SortKey;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

/// Upper bound on how long the event loop waits for input
pub const MAX_POLL: Duration = Duration::from_millis(250);

/// Event poll timeout that wakes the loop in time for the next widget timer
///
/// # Examples
/// ```
/// use std::time::{Duration, Instant};
/// use ceka::logic::ui::{poll_timeout, MAX_POLL};
///
/// let now = Instant::now();
/// assert_eq!(poll_timeout(None, now), MAX_POLL);
/// assert_eq!(poll_timeout(Some(now + Duration::from_millis(40)), now), Duration::from_millis(40));
/// assert_eq!(poll_timeout(Some(now), now), Duration::ZERO);
/// ```
pub fn poll_timeout(next_deadline: Option<Instant>, now: Instant) -> Duration {
    match next_deadline {
        Some(deadline) => deadline.saturating_duration_since(now).min(MAX_POLL),
        None => MAX_POLL,
    }
}

/// Cycle to the next sort key: Date → Popularity → Title → Date
///
/// # Examples
/// ```
/// use ceka::SortKey;
/// use ceka::logic::ui::cycle_sort_key;
///
/// assert_eq!(cycle_sort_key(SortKey::Date), SortKey::Popularity);
/// assert_eq!(cycle_sort_key(SortKey::Popularity), SortKey::Title);
/// assert_eq!(cycle_sort_key(SortKey::Title), SortKey::Date);
/// ```
pub fn cycle_sort_key(current: SortKey) -> SortKey {
    match current {
        SortKey::Date => SortKey::Popularity,
        SortKey::Popularity => SortKey::Title,
        SortKey::Title => SortKey::Date,
    }
}

/// Cycle a single-valued facet through the available values
///
/// None → first value → ... → last value → None. A current value that is no
/// longer available restarts from None.
///
/// # Examples
/// ```
/// use ceka::logic::ui::cycle_facet;
///
/// let values = vec!["document".to_string(), "video".to_string()];
/// assert_eq!(cycle_facet(None, &values), Some("document".to_string()));
/// assert_eq!(cycle_facet(Some("document"), &values), Some("video".to_string()));
/// assert_eq!(cycle_facet(Some("video"), &values), None);
/// ```
pub fn cycle_facet(current: Option<&str>, values: &[String]) -> Option<String> {
    match current {
        None => values.first().cloned(),
        Some(cur) => {
            let pos = values.iter().position(|v| v == cur)?;
            values.get(pos + 1).cloned()
        }
    }
}

/// Whether a toast shown `elapsed_ms` ago should be dismissed
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Toast messages starting with "Error:" render as failures
pub fn is_error_toast(message: &str) -> bool {
    message.starts_with("Error:")
}

/// Enter/leave event for a pointer tested against the widget's hit area
///
/// Only crossings produce an event. With no known pointer position nothing is
/// emitted, so a stationary cursor is re-tested once the area changes.
pub fn hover_event(
    area: Option<Rect>,
    pointer: Option<Position>,
    hovering: bool,
) -> Option<WidgetEvent> {
    let pointer = pointer?;
    let inside = area.is_some_and(|area| area.contains(pointer));
    match (inside, hovering) {
        (true, false) => Some(WidgetEvent::PointerEnter),
        (false, true) => Some(WidgetEvent::PointerLeave),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_facet_empty_values() {
        assert_eq!(cycle_facet(None, &[]), None);
    }

    #[test]
    fn test_cycle_facet_unknown_current_resets() {
        let values = vec!["a".to_string()];
        assert_eq!(cycle_facet(Some("zzz"), &values), None);
    }

    #[test]
    fn test_toast_dismiss_threshold() {
        assert!(!should_dismiss_toast(1499));
        assert!(should_dismiss_toast(1500));
    }

    #[test]
    fn test_error_toast_detection() {
        assert!(is_error_toast("Error: backend unreachable"));
        assert!(!is_error_toast("Feedback sent"));
    }

    #[test]
    fn test_hover_event_crossings_only() {
        let button = Rect::new(60, 20, 18, 3);
        let over = Some(Position::new(65, 21));
        let away = Some(Position::new(2, 2));

        assert_eq!(hover_event(Some(button), over, false), Some(WidgetEvent::PointerEnter));
        assert_eq!(hover_event(Some(button), over, true), None);
        assert_eq!(hover_event(Some(button), away, true), Some(WidgetEvent::PointerLeave));
        assert_eq!(hover_event(Some(button), away, false), None);
        assert_eq!(hover_event(Some(button), None, false), None);
    }

    #[test]
    fn test_collapsed_button_under_resting_pointer_is_entered() {
        // Panel was open and hovering was cleared by the expand
        let panel = Rect::new(10, 5, 60, 11);
        let button = Rect::new(60, 20, 18, 3);
        let pointer = Some(Position::new(65, 21));
        assert_eq!(hover_event(Some(panel), pointer, false), None);

        // After collapse the button is drawn under the pointer again
        assert_eq!(hover_event(Some(button), pointer, false), Some(WidgetEvent::PointerEnter));

        // Widget hidden: a hovering flag left over is released
        assert_eq!(hover_event(None, pointer, true), Some(WidgetEvent::PointerLeave));
    }
}
