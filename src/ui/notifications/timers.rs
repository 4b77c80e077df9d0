// SPDX-License-Identifier: MPL-2.0
//! Cancellable single-fire deadlines against a logical clock.
//!
//! A [`Timers`] set is owned by the component that schedules into it and is
//! the only place its deadlines can be cancelled from. Nothing fires on its
//! own: the owner polls [`Timers::take_expired`] with the current time.

use std::time::Instant;

#[derive(Debug, Clone)]
struct Entry<K> {
    key: K,
    deadline: Instant,
    seq: u64,
}

/// A set of pending deadlines, at most one per key.
#[derive(Debug, Clone)]
pub struct Timers<K> {
    entries: Vec<Entry<K>>,
    next_seq: u64,
}

impl<K> Default for Timers<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<K: PartialEq + Clone> Timers<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `key` to fire at `deadline`, replacing any pending deadline
    /// for the same key.
    pub fn schedule(&mut self, key: K, deadline: Instant) {
        self.cancel(&key);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { key, deadline, seq });
    }

    /// Schedules `key` unless it is already pending.
    pub fn schedule_if_idle(&mut self, key: K, deadline: Instant) {
        if !self.is_scheduled(&key) {
            self.schedule(key, deadline);
        }
    }

    /// Cancels the deadline for `key`. Returns whether one was pending.
    pub fn cancel(&mut self, key: &K) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| &entry.key != key);
        self.entries.len() != before
    }

    /// Cancels every deadline whose key matches `predicate`.
    pub fn cancel_where(&mut self, mut predicate: impl FnMut(&K) -> bool) {
        self.entries.retain(|entry| !predicate(&entry.key));
    }

    /// Cancels everything.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn is_scheduled(&self, key: &K) -> bool {
        self.entries.iter().any(|entry| &entry.key == key)
    }

    #[must_use]
    pub fn deadline(&self, key: &K) -> Option<Instant> {
        self.entries
            .iter()
            .find(|entry| &entry.key == key)
            .map(|entry| entry.deadline)
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }

    /// Removes and returns every key whose deadline is at or before `now`,
    /// ordered by deadline, then by scheduling order.
    pub fn take_expired(&mut self, now: Instant) -> Vec<K> {
        let mut expired: Vec<Entry<K>> = Vec::new();
        self.entries.retain(|entry| {
            if entry.deadline <= now {
                expired.push(entry.clone());
                false
            } else {
                true
            }
        });
        expired.sort_by_key(|entry| (entry.deadline, entry.seq));
        expired.into_iter().map(|entry| entry.key).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn fires_once_at_deadline() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule("a", t0 + ms(100));

        assert!(timers.take_expired(t0 + ms(99)).is_empty());
        assert_eq!(timers.take_expired(t0 + ms(100)), vec!["a"]);
        assert!(timers.take_expired(t0 + ms(500)).is_empty());
    }

    #[test]
    fn rescheduling_replaces_previous_deadline() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(1, t0 + ms(100));
        timers.schedule(1, t0 + ms(300));

        assert_eq!(timers.len(), 1);
        assert!(timers.take_expired(t0 + ms(200)).is_empty());
        assert_eq!(timers.take_expired(t0 + ms(300)), vec![1]);
    }

    #[test]
    fn schedule_if_idle_keeps_existing_deadline() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule_if_idle(1, t0 + ms(100));
        timers.schedule_if_idle(1, t0 + ms(900));
        assert_eq!(timers.deadline(&1), Some(t0 + ms(100)));
    }

    #[test]
    fn expired_keys_come_out_in_deadline_order() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule("late", t0 + ms(30));
        timers.schedule("early", t0 + ms(10));
        timers.schedule("tie", t0 + ms(10));

        assert_eq!(
            timers.take_expired(t0 + ms(50)),
            vec!["early", "tie", "late"]
        );
    }

    #[test]
    fn cancellation() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule((1, 1), t0 + ms(10));
        timers.schedule((1, 2), t0 + ms(10));
        timers.schedule((2, 1), t0 + ms(10));

        assert!(timers.cancel(&(2, 1)));
        assert!(!timers.cancel(&(2, 1)));
        timers.cancel_where(|(id, _)| *id == 1);
        assert!(timers.is_empty());

        timers.schedule((3, 1), t0 + ms(10));
        timers.cancel_all();
        assert!(timers.take_expired(t0 + ms(100)).is_empty());
        assert_eq!(timers.next_deadline(), None);
    }
}
