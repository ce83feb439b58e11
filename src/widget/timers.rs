//! Named timer handles
//!
//! Timers are plain deadlines. Nothing in here sleeps: the owner decides what
//! "now" is and pops whichever timers have fallen due.

use std::time::Instant;

/// Every timer the widget controller can arm
///
/// Declaration order doubles as the tie-break when two deadlines coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimerId {
    Show,
    Pulse,
    Idle,
    Tick,
    Expire,
}

impl TimerId {
    pub const ALL: [TimerId; 5] = [
        TimerId::Show,
        TimerId::Pulse,
        TimerId::Idle,
        TimerId::Tick,
        TimerId::Expire,
    ];

    fn slot(self) -> usize {
        self as usize
    }
}

/// One-shot deadlines keyed by [`TimerId`]
///
/// Scheduling an armed timer replaces its deadline.
#[derive(Debug, Clone, Default)]
pub struct TimerSet {
    deadlines: [Option<Instant>; 5],
}

impl TimerSet {
    pub fn schedule(&mut self, id: TimerId, at: Instant) {
        self.deadlines[id.slot()] = Some(at);
    }

    pub fn cancel(&mut self, id: TimerId) {
        self.deadlines[id.slot()] = None;
    }

    pub fn cancel_all(&mut self) {
        self.deadlines = [None; 5];
    }

    pub fn deadline(&self, id: TimerId) -> Option<Instant> {
        self.deadlines[id.slot()]
    }

    pub fn is_armed(&self, id: TimerId) -> bool {
        self.deadline(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.deadlines.iter().all(Option::is_none)
    }

    /// Earliest pending deadline across all timers
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.iter().flatten().min().copied()
    }

    /// Disarm and return the earliest timer with `deadline <= now`
    pub fn pop_due(&mut self, now: Instant) -> Option<(TimerId, Instant)> {
        self.pop_earliest(|deadline| deadline <= now)
    }

    /// Disarm and return the earliest timer with `deadline < now`
    pub fn pop_overdue(&mut self, now: Instant) -> Option<(TimerId, Instant)> {
        self.pop_earliest(|deadline| deadline < now)
    }

    fn pop_earliest(&mut self, eligible: impl Fn(Instant) -> bool) -> Option<(TimerId, Instant)> {
        let mut best: Option<(TimerId, Instant)> = None;

        for id in TimerId::ALL {
            let Some(deadline) = self.deadline(id) else {
                continue;
            };
            if !eligible(deadline) {
                continue;
            }
            // Strict comparison keeps the earlier-declared timer on ties
            if best.map_or(true, |(_, current)| deadline < current) {
                best = Some((id, deadline));
            }
        }

        if let Some((id, _)) = best {
            self.cancel(id);
        }
        best
    }
}
