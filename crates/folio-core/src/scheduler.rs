#![forbid(unsafe_code)]

//! Deterministic timer queue on a virtual clock.
//!
//! [`TimerQueue`] holds one-shot and repeating timers that carry an event
//! value. Nothing here reads the wall clock: the owner advances time
//! explicitly and drains due timers with [`pop_due`](TimerQueue::pop_due),
//! so tests can replay an animation to the millisecond.
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//! use folio_core::scheduler::TimerQueue;
//!
//! let mut queue = TimerQueue::new();
//! queue.schedule_after(Duration::from_millis(100), "tick");
//! let blink = queue.schedule_every(Duration::from_millis(50), "blink");
//!
//! let limit = Duration::from_millis(100);
//! assert_eq!(queue.pop_due(limit).map(|(_, e)| e), Some("blink"));
//! assert_eq!(queue.pop_due(limit).map(|(_, e)| e), Some("tick"));
//! assert_eq!(queue.pop_due(limit).map(|(_, e)| e), Some("blink"));
//! assert!(queue.cancel(blink));
//! assert!(queue.is_empty());
//! ```
//!
//! # Invariants
//!
//! 1. Timers fire in deadline order; equal deadlines fire in scheduling order.
//! 2. The clock never moves backwards.
//! 3. A cancelled timer never fires, including a repeating timer's next period.
//! 4. A repeating timer keeps its [`TimerId`] across periods.
//!
//! # Failure Modes
//!
//! - Cancelling an unknown or already-fired one-shot id returns `false`.
//! - A zero period on a repeating timer is clamped to 1ns so draining a
//!   window always terminates.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Handle identifying a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Raw sequence number (monotonic per queue).
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
struct PendingTimer<E> {
    event: E,
    period: Option<Duration>,
}

/// Ordering key: deadline first, then a sequence number that grows with
/// every (re-)arm so ties resolve in scheduling order.
type SlotKey = (Duration, u64);

/// Virtual-clock queue of cancellable timers.
#[derive(Debug, Clone)]
pub struct TimerQueue<E> {
    now: Duration,
    next_seq: u64,
    next_id: u64,
    slots: BTreeMap<SlotKey, (TimerId, PendingTimer<E>)>,
    index: HashMap<TimerId, SlotKey>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Construction & inspection
// ---------------------------------------------------------------------------

impl<E> TimerQueue<E> {
    /// Create an empty queue with the clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            next_id: 0,
            slots: BTreeMap::new(),
            index: HashMap::new(),
        }
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of armed timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no timer is armed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether `id` is still armed.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.index.contains_key(&id)
    }

    /// Deadline of the earliest armed timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.slots.keys().next().map(|&(deadline, _)| deadline)
    }

    /// Time remaining until the earliest armed timer, zero if already due.
    #[must_use]
    pub fn time_until_next(&self) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_sub(self.now))
    }

    /// Iterate armed events in firing order.
    pub fn pending_events(&self) -> impl Iterator<Item = &E> {
        self.slots.values().map(|(_, timer)| &timer.event)
    }
}

// ---------------------------------------------------------------------------
// Scheduling
// ---------------------------------------------------------------------------

impl<E> TimerQueue<E> {
    /// Arm a one-shot timer firing `delay` after the current time.
    pub fn schedule_after(&mut self, delay: Duration, event: E) -> TimerId {
        self.arm(delay, event, None)
    }

    /// Arm a repeating timer firing every `period`, first after one period.
    pub fn schedule_every(&mut self, period: Duration, event: E) -> TimerId {
        let period = if period.is_zero() {
            Duration::from_nanos(1)
        } else {
            period
        };
        self.arm(period, event, Some(period))
    }

    /// Disarm a timer. Returns `true` if it was pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.index.remove(&id) {
            Some(key) => {
                self.slots.remove(&key);
                true
            }
            None => false,
        }
    }

    /// Disarm every timer. The clock is untouched.
    pub fn cancel_all(&mut self) {
        self.slots.clear();
        self.index.clear();
    }

    fn arm(&mut self, delay: Duration, event: E, period: Option<Duration>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let key = self.next_key(self.now.saturating_add(delay));
        self.slots.insert(key, (id, PendingTimer { event, period }));
        self.index.insert(id, key);
        id
    }

    fn next_key(&mut self, deadline: Duration) -> SlotKey {
        let seq = self.next_seq;
        self.next_seq += 1;
        (deadline, seq)
    }
}

// ---------------------------------------------------------------------------
// Firing
// ---------------------------------------------------------------------------

impl<E: Clone> TimerQueue<E> {
    /// Remove and return the earliest timer due at or before `limit`.
    ///
    /// The clock moves to that timer's deadline. Repeating timers are
    /// re-armed one period later under the same id. Returns `None` (clock
    /// untouched) when nothing is due.
    pub fn pop_due(&mut self, limit: Duration) -> Option<(TimerId, E)> {
        let (&key, _) = self.slots.iter().next()?;
        let (deadline, _) = key;
        if deadline > limit {
            return None;
        }
        let (id, timer) = self.slots.remove(&key)?;
        self.now = self.now.max(deadline);

        match timer.period {
            Some(period) => {
                let event = timer.event.clone();
                let rearm = self.next_key(deadline.saturating_add(period));
                self.slots.insert(rearm, (id, timer));
                self.index.insert(id, rearm);
                Some((id, event))
            }
            None => {
                self.index.remove(&id);
                Some((id, timer.event))
            }
        }
    }

    /// Move the clock forward to `to` without firing anything.
    ///
    /// Call after draining [`pop_due`](Self::pop_due) up to `to`.
    pub fn advance_clock(&mut self, to: Duration) {
        self.now = self.now.max(to);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const MS_100: Duration = Duration::from_millis(100);
    const MS_200: Duration = Duration::from_millis(200);
    const MS_500: Duration = Duration::from_millis(500);

    fn drain(queue: &mut TimerQueue<&'static str>, limit: Duration) -> Vec<&'static str> {
        let mut fired = Vec::new();
        while let Some((_, event)) = queue.pop_due(limit) {
            fired.push(event);
        }
        queue.advance_clock(limit);
        fired
    }

    #[test]
    fn fires_in_deadline_order() {
        let mut queue = TimerQueue::new();
        queue.schedule_after(MS_500, "late");
        queue.schedule_after(MS_100, "early");
        queue.schedule_after(MS_200, "middle");
        assert_eq!(drain(&mut queue, MS_500), ["early", "middle", "late"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn ties_fire_in_scheduling_order() {
        let mut queue = TimerQueue::new();
        queue.schedule_after(MS_100, "a");
        queue.schedule_after(MS_100, "b");
        queue.schedule_after(MS_100, "c");
        assert_eq!(drain(&mut queue, MS_100), ["a", "b", "c"]);
    }

    #[test]
    fn nothing_due_leaves_clock_alone() {
        let mut queue = TimerQueue::new();
        queue.schedule_after(MS_500, "x");
        assert!(queue.pop_due(MS_100).is_none());
        assert_eq!(queue.now(), Duration::ZERO);
        assert_eq!(queue.time_until_next(), Some(MS_500));
    }

    #[test]
    fn pop_moves_clock_to_deadline() {
        let mut queue = TimerQueue::new();
        queue.schedule_after(MS_200, "x");
        queue.pop_due(MS_500);
        assert_eq!(queue.now(), MS_200);
        queue.advance_clock(MS_500);
        assert_eq!(queue.now(), MS_500);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule_after(MS_100, "gone");
        queue.schedule_after(MS_200, "kept");
        assert!(queue.cancel(id));
        assert!(!queue.cancel(id));
        assert!(!queue.is_pending(id));
        assert_eq!(drain(&mut queue, MS_500), ["kept"]);
    }

    #[test]
    fn repeating_timer_rearms_with_same_id() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule_every(MS_100, "blink");
        let mut ids = Vec::new();
        while let Some((fired, _)) = queue.pop_due(Duration::from_millis(350)) {
            ids.push(fired);
        }
        assert_eq!(ids, [id, id, id]);
        assert!(queue.is_pending(id));
        assert_eq!(queue.next_deadline(), Some(Duration::from_millis(400)));
    }

    #[test]
    fn cancelling_repeating_timer_stops_future_periods() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule_every(MS_100, "blink");
        assert_eq!(drain(&mut queue, MS_100), ["blink"]);
        assert!(queue.cancel(id));
        assert!(drain(&mut queue, MS_500).is_empty());
    }

    #[test]
    fn zero_period_still_terminates() {
        let mut queue = TimerQueue::new();
        queue.schedule_every(Duration::ZERO, "spin");
        let mut count = 0;
        while queue.pop_due(Duration::from_nanos(5)).is_some() {
            count += 1;
        }
        assert_eq!(count, 5);
    }

    #[test]
    fn schedule_is_relative_to_current_time() {
        let mut queue = TimerQueue::new();
        queue.advance_clock(MS_500);
        queue.schedule_after(MS_100, "x");
        assert_eq!(queue.next_deadline(), Some(Duration::from_millis(600)));
    }

    #[test]
    fn cancel_all_keeps_clock() {
        let mut queue = TimerQueue::new();
        queue.advance_clock(MS_200);
        queue.schedule_after(MS_100, "a");
        queue.schedule_every(MS_100, "b");
        queue.cancel_all();
        assert!(queue.is_empty());
        assert_eq!(queue.now(), MS_200);
    }
}
