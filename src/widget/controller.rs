//! Donation widget controller
//!
//! Explicit state machine for the floating "support us" widget. All
//! transitions happen inside [`WidgetController::dispatch`] (user events) and
//! [`WidgetController::advance`] (timers). Time is always passed in by the
//! caller, so the controller is fully deterministic under test.

use std::fmt;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::debug;

use super::timers::{TimerId, TimerSet};

/// Delays that drive the widget, all relative to mount time except the tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetTimings {
    pub show_after: Duration,
    pub pulse_after: Duration,
    pub idle_after: Duration,
    /// Total display budget before forced expiry
    pub budget: Duration,
    /// Period of the budget re-check while visible
    pub tick_every: Duration,
}

impl Default for WidgetTimings {
    fn default() -> Self {
        Self {
            show_after: Duration::from_millis(5_000),
            pulse_after: Duration::from_millis(12_000),
            idle_after: Duration::from_millis(30_000),
            budget: Duration::from_millis(300_000),
            tick_every: Duration::from_millis(10_000),
        }
    }
}

/// Why a set of widget delays was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimingsError {
    #[error("show_after must not exceed pulse_after")]
    ShowAfterPulse,
    #[error("pulse_after must not exceed idle_after")]
    PulseAfterIdle,
    #[error("idle_after must not exceed budget")]
    IdleAfterBudget,
    #[error("tick_every must be positive")]
    ZeroTick,
}

impl WidgetTimings {
    /// Check that the delays are ordered show <= pulse <= idle <= budget
    pub fn validate(&self) -> Result<(), TimingsError> {
        if self.show_after > self.pulse_after {
            return Err(TimingsError::ShowAfterPulse);
        }
        if self.pulse_after > self.idle_after {
            return Err(TimingsError::PulseAfterIdle);
        }
        if self.idle_after > self.budget {
            return Err(TimingsError::IdleAfterBudget);
        }
        if self.tick_every.is_zero() {
            return Err(TimingsError::ZeroTick);
        }
        Ok(())
    }
}

/// Full widget state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetState {
    pub visible: bool,
    pub expanded: bool,
    pub pulsing: bool,
    pub idle: bool,
    pub hovering: bool,
    /// Latched once the budget is exhausted; never cleared
    pub timed_out: bool,
    pub mounted_at: Instant,
}

impl WidgetState {
    fn new(mounted_at: Instant) -> Self {
        Self {
            visible: false,
            expanded: false,
            pulsing: false,
            idle: false,
            hovering: false,
            timed_out: false,
            mounted_at,
        }
    }

    /// Whether every state invariant holds
    pub fn invariants_hold(&self) -> bool {
        let expiry_hides = !self.timed_out || !self.visible || self.expanded;
        let animations_exclusive = !(self.pulsing && self.idle);
        let quiet_when_expanded = !self.expanded || (!self.pulsing && !self.idle);
        expiry_hides && animations_exclusive && quiet_when_expanded
    }
}

/// Render snapshot consumed by the view layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidgetView {
    pub visible: bool,
    pub expanded: bool,
    pub pulsing: bool,
    pub idle: bool,
    pub hovering: bool,
}

/// User interaction events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    PointerEnter,
    PointerLeave,
    ExpandRequest,
    CollapseRequest,
}

/// Named state derived from the flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetPhase {
    Hidden,
    Collapsed,
    Pulsing,
    Idle,
    Expanded,
    Expired,
}

impl WidgetPhase {
    pub fn as_str(&self) -> &str {
        match self {
            WidgetPhase::Hidden => "hidden",
            WidgetPhase::Collapsed => "collapsed",
            WidgetPhase::Pulsing => "pulsing",
            WidgetPhase::Idle => "idle",
            WidgetPhase::Expanded => "expanded",
            WidgetPhase::Expired => "expired",
        }
    }
}

type ExpiryListener = Box<dyn FnMut() + Send>;

/// Timer-driven controller for the donation widget
pub struct WidgetController {
    state: WidgetState,
    timings: WidgetTimings,
    timers: TimerSet,
    on_expired: Option<ExpiryListener>,
    expiry_notified: bool,
    mounted: bool,
}

impl fmt::Debug for WidgetController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetController")
            .field("state", &self.state)
            .field("timings", &self.timings)
            .field("timers", &self.timers)
            .field("on_expired", &self.on_expired.as_ref().map(|_| "<listener>"))
            .field("expiry_notified", &self.expiry_notified)
            .field("mounted", &self.mounted)
            .finish()
    }
}

impl WidgetController {
    /// Create the controller and arm the show/pulse/idle/expire timers
    pub fn mount(timings: WidgetTimings, now: Instant) -> Self {
        let mut timers = TimerSet::default();
        timers.schedule(TimerId::Show, now + timings.show_after);
        timers.schedule(TimerId::Pulse, now + timings.pulse_after);
        timers.schedule(TimerId::Idle, now + timings.idle_after);
        timers.schedule(TimerId::Expire, now + timings.budget);

        debug!(?timings, "donation widget mounted");

        Self {
            state: WidgetState::new(now),
            timings,
            timers,
            on_expired: None,
            expiry_notified: false,
            mounted: true,
        }
    }

    /// Register the host callback fired when the widget permanently expires
    pub fn with_expiry_listener(mut self, listener: impl FnMut() + Send + 'static) -> Self {
        self.set_expiry_listener(listener);
        self
    }

    pub fn set_expiry_listener(&mut self, listener: impl FnMut() + Send + 'static) {
        self.on_expired = Some(Box::new(listener));
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn timings(&self) -> &WidgetTimings {
        &self.timings
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn view(&self) -> WidgetView {
        WidgetView {
            visible: self.state.visible,
            expanded: self.state.expanded,
            pulsing: self.state.pulsing,
            idle: self.state.idle,
            hovering: self.state.hovering,
        }
    }

    pub fn phase(&self) -> WidgetPhase {
        let s = &self.state;
        if s.timed_out && !s.expanded {
            WidgetPhase::Expired
        } else if s.expanded {
            WidgetPhase::Expanded
        } else if !s.visible {
            WidgetPhase::Hidden
        } else if s.idle {
            WidgetPhase::Idle
        } else if s.pulsing {
            WidgetPhase::Pulsing
        } else {
            WidgetPhase::Collapsed
        }
    }

    /// Time since mount, saturating at zero for instants before mount
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.state.mounted_at)
    }

    /// Earliest pending timer (None once unmounted or fully settled)
    pub fn next_deadline(&self) -> Option<Instant> {
        if !self.mounted {
            return None;
        }
        self.timers.next_deadline()
    }

    pub fn is_timer_armed(&self, id: TimerId) -> bool {
        self.timers.is_armed(id)
    }

    /// Fire every timer due at or before `now`, in deadline order
    pub fn advance(&mut self, now: Instant) {
        if !self.mounted {
            return;
        }
        while let Some((id, at)) = self.timers.pop_due(now) {
            self.fire(id, at);
        }
    }

    /// Apply a user event at `now`
    ///
    /// Timers strictly before `now` fire first. The event is then applied
    /// ahead of any timer due at exactly `now`, so a click racing the budget
    /// wins and the expiry is latched instead.
    pub fn dispatch(&mut self, event: WidgetEvent, now: Instant) {
        if !self.mounted {
            return;
        }
        while let Some((id, at)) = self.timers.pop_overdue(now) {
            self.fire(id, at);
        }

        let before = self.phase();
        self.apply(event, now);
        self.log_transition(before, &format!("{:?}", event));

        self.advance(now);
    }

    /// Cancel all pending timers; the controller ignores everything afterwards
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.timers.cancel_all();
        self.on_expired = None;
        self.mounted = false;
        debug!(phase = self.phase().as_str(), "donation widget unmounted");
    }

    fn apply(&mut self, event: WidgetEvent, now: Instant) {
        match event {
            WidgetEvent::PointerEnter => {
                if self.state.visible && !self.state.expanded && !self.state.hovering {
                    self.state.hovering = true;
                    self.state.idle = false;
                }
            }
            WidgetEvent::PointerLeave => {
                if !self.state.hovering {
                    return;
                }
                self.state.hovering = false;
                // The original idle deadline may have been swallowed while hovering
                if !self.state.timed_out
                    && self.state.visible
                    && !self.state.expanded
                    && self.elapsed(now) >= self.timings.idle_after
                {
                    self.timers.schedule(TimerId::Idle, now);
                }
            }
            WidgetEvent::ExpandRequest => {
                if self.state.expanded || self.state.timed_out {
                    return;
                }
                self.state.expanded = true;
                self.state.visible = true;
                self.state.pulsing = false;
                self.state.idle = false;
                self.state.hovering = false;
                self.timers.cancel(TimerId::Show);
                self.timers.cancel(TimerId::Pulse);
                self.timers.cancel(TimerId::Idle);
                if !self.timers.is_armed(TimerId::Tick) {
                    self.timers.schedule(TimerId::Tick, now + self.timings.tick_every);
                }
            }
            WidgetEvent::CollapseRequest => {
                if !self.state.expanded {
                    return;
                }
                self.state.expanded = false;
                if self.state.timed_out {
                    self.hide();
                    self.notify_expired();
                    return;
                }
                let mounted_at = self.state.mounted_at;
                self.timers
                    .schedule(TimerId::Pulse, (mounted_at + self.timings.pulse_after).max(now));
                self.timers
                    .schedule(TimerId::Idle, (mounted_at + self.timings.idle_after).max(now));
            }
        }
    }

    fn fire(&mut self, id: TimerId, at: Instant) {
        let before = self.phase();

        match id {
            TimerId::Show => {
                if !self.state.timed_out && !self.state.visible {
                    self.state.visible = true;
                    self.timers.schedule(TimerId::Tick, at + self.timings.tick_every);
                }
            }
            TimerId::Pulse => {
                let s = &self.state;
                if s.visible && !s.expanded && !s.timed_out && !s.idle {
                    self.state.pulsing = true;
                }
            }
            TimerId::Idle => {
                let s = &self.state;
                if s.visible && !s.expanded && !s.hovering && !s.timed_out {
                    self.state.idle = true;
                    self.state.pulsing = false;
                }
            }
            TimerId::Tick => {
                if self.state.visible && !self.state.timed_out {
                    if self.elapsed(at) >= self.timings.budget {
                        self.expire();
                    } else {
                        self.timers.schedule(TimerId::Tick, at + self.timings.tick_every);
                    }
                }
            }
            TimerId::Expire => self.expire(),
        }

        self.log_transition(before, &format!("{:?} timer", id));
    }

    fn expire(&mut self) {
        if self.state.timed_out {
            return;
        }
        self.state.timed_out = true;
        self.timers.cancel_all();

        if self.state.expanded {
            debug!("display budget exhausted while expanded, expiry deferred to collapse");
        } else {
            self.hide();
            self.notify_expired();
        }
    }

    fn hide(&mut self) {
        self.state.visible = false;
        self.state.pulsing = false;
        self.state.idle = false;
        self.state.hovering = false;
    }

    fn notify_expired(&mut self) {
        if self.expiry_notified {
            return;
        }
        self.expiry_notified = true;
        if let Some(listener) = self.on_expired.as_mut() {
            listener();
        }
    }

    fn log_transition(&self, before: WidgetPhase, cause: &str) {
        debug_assert!(self.state.invariants_hold(), "widget invariants violated: {:?}", self.state);
        let after = self.phase();
        if before != after {
            debug!(
                from = before.as_str(),
                to = after.as_str(),
                cause,
                "donation widget transition"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    fn mounted() -> (WidgetController, Instant, Arc<AtomicUsize>) {
        let t0 = Instant::now();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let controller = WidgetController::mount(WidgetTimings::default(), t0)
            .with_expiry_listener(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        (controller, t0, fired)
    }

    #[test]
    fn test_hidden_until_show_delay() {
        let (mut w, t0, _) = mounted();
        w.advance(t0 + Duration::from_millis(4_999));
        assert!(!w.view().visible);
        assert_eq!(w.phase(), WidgetPhase::Hidden);

        w.advance(t0 + secs(5));
        assert!(w.view().visible);
        assert_eq!(w.phase(), WidgetPhase::Collapsed);
    }

    #[test]
    fn test_show_arms_tick() {
        let (mut w, t0, _) = mounted();
        assert!(!w.is_timer_armed(TimerId::Tick));
        w.advance(t0 + secs(5));
        assert!(w.is_timer_armed(TimerId::Tick));
    }

    #[test]
    fn test_pulse_then_idle() {
        let (mut w, t0, _) = mounted();
        w.advance(t0 + secs(12));
        assert!(w.view().pulsing);

        w.advance(t0 + secs(30));
        assert!(w.view().idle);
        assert!(!w.view().pulsing);
    }

    #[test]
    fn test_hover_clears_idle_immediately() {
        let (mut w, t0, _) = mounted();
        w.advance(t0 + secs(31));
        assert!(w.view().idle);

        w.dispatch(WidgetEvent::PointerEnter, t0 + secs(32));
        assert!(w.view().hovering);
        assert!(!w.view().idle);
    }

    #[test]
    fn test_pointer_enter_ignored_while_hidden() {
        let (mut w, t0, _) = mounted();
        w.dispatch(WidgetEvent::PointerEnter, t0 + secs(1));
        assert!(!w.view().hovering);
    }

    #[test]
    fn test_expand_cancels_animations() {
        let (mut w, t0, _) = mounted();
        w.advance(t0 + secs(20));
        assert!(w.view().pulsing);

        w.dispatch(WidgetEvent::ExpandRequest, t0 + secs(20));
        let v = w.view();
        assert!(v.expanded && v.visible);
        assert!(!v.pulsing && !v.idle);

        // Idle deadline passes while expanded; nothing changes
        w.advance(t0 + secs(45));
        assert!(!w.view().idle);
    }

    #[test]
    fn test_collapse_reevaluates_idle() {
        let (mut w, t0, _) = mounted();
        w.advance(t0 + secs(6));
        w.dispatch(WidgetEvent::ExpandRequest, t0 + secs(6));
        w.dispatch(WidgetEvent::CollapseRequest, t0 + secs(40));

        let v = w.view();
        assert!(v.visible && !v.expanded);
        assert!(v.idle);
        assert!(!v.pulsing);
    }

    #[test]
    fn test_collapse_before_pulse_rearms_pulse() {
        let (mut w, t0, _) = mounted();
        w.dispatch(WidgetEvent::ExpandRequest, t0 + secs(6));
        w.dispatch(WidgetEvent::CollapseRequest, t0 + secs(8));
        assert!(!w.view().pulsing);

        w.advance(t0 + secs(12));
        assert!(w.view().pulsing);
    }

    #[test]
    fn test_collapse_when_collapsed_is_noop() {
        let (mut w, t0, _) = mounted();
        w.advance(t0 + secs(6));
        let before = *w.state();
        w.dispatch(WidgetEvent::CollapseRequest, t0 + secs(6));
        assert_eq!(*w.state(), before);
    }

    #[test]
    fn test_expire_without_interaction() {
        let (mut w, t0, fired) = mounted();
        w.advance(t0 + secs(300));
        assert!(w.state().timed_out);
        assert!(!w.view().visible);
        assert_eq!(w.phase(), WidgetPhase::Expired);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(w.next_deadline(), None);
    }

    #[test]
    fn test_expand_racing_budget_wins() {
        let (mut w, t0, fired) = mounted();
        w.advance(t0 + secs(299));
        w.dispatch(WidgetEvent::ExpandRequest, t0 + secs(300));

        assert!(w.state().timed_out);
        assert!(w.view().visible && w.view().expanded);
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        w.dispatch(WidgetEvent::CollapseRequest, t0 + secs(301));
        assert!(!w.view().visible);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_expand_after_expiry_is_ignored() {
        let (mut w, t0, _) = mounted();
        w.advance(t0 + secs(300));
        w.dispatch(WidgetEvent::ExpandRequest, t0 + secs(301));
        assert!(!w.view().visible);
        assert!(!w.view().expanded);
    }

    #[test]
    fn test_tick_detects_budget_when_expire_timer_missed() {
        let t0 = Instant::now();
        let timings = WidgetTimings::default();
        let mut w = WidgetController::mount(timings, t0);
        w.advance(t0 + secs(5));
        // Drop the dedicated expiry timer; the periodic tick must still catch it
        w.timers.cancel(TimerId::Expire);
        w.advance(t0 + secs(305));
        assert!(w.state().timed_out);
        assert!(!w.view().visible);
    }

    #[test]
    fn test_unmount_cancels_everything() {
        let (mut w, t0, fired) = mounted();
        w.advance(t0 + secs(6));
        w.unmount();
        assert!(!w.is_mounted());
        assert_eq!(w.next_deadline(), None);

        w.advance(t0 + secs(400));
        w.dispatch(WidgetEvent::ExpandRequest, t0 + secs(401));
        assert!(!w.state().timed_out);
        assert!(!w.view().expanded);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_timings_validation() {
        assert_eq!(WidgetTimings::default().validate(), Ok(()));

        let late_show = WidgetTimings {
            show_after: secs(20),
            ..WidgetTimings::default()
        };
        assert_eq!(late_show.validate(), Err(TimingsError::ShowAfterPulse));

        let late_pulse = WidgetTimings {
            pulse_after: secs(40),
            ..WidgetTimings::default()
        };
        assert_eq!(late_pulse.validate(), Err(TimingsError::PulseAfterIdle));

        let bad = WidgetTimings {
            idle_after: secs(400),
            ..WidgetTimings::default()
        };
        assert_eq!(bad.validate(), Err(TimingsError::IdleAfterBudget));

        let zero_tick = WidgetTimings {
            tick_every: Duration::ZERO,
            ..WidgetTimings::default()
        };
        assert_eq!(zero_tick.validate(), Err(TimingsError::ZeroTick));
        assert_eq!(
            zero_tick.validate().unwrap_err().to_string(),
            "tick_every must be positive"
        );
    }

    #[test]
    fn test_debug_hides_listener() {
        let (w, _, _) = mounted();
        let rendered = format!("{:?}", w);
        assert!(rendered.contains("<listener>"));
    }
}
