//! Per-screen virtual-time timers.
//!
//! Every screen controller owns one `Timers` set and drives it from its tick
//! handler. Time only moves when the owner advances it, so tests can
//! fast-forward deterministically. Dropping the set drops every armed timer:
//! a screen that has been replaced can never fire a stale callback.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u32);

#[derive(Debug, Clone, Copy)]
enum Kind {
    OneShot,
    Repeating(Duration),
}

#[derive(Debug)]
struct Entry<E> {
    id: TimerId,
    due: Duration,
    kind: Kind,
    event: E,
}

#[derive(Debug)]
pub struct Timers<E> {
    now: Duration,
    next_id: u32,
    entries: Vec<Entry<E>>,
}

impl<E: Copy> Timers<E> {
    pub fn new() -> Self {
        Self { now: Duration::ZERO, next_id: 0, entries: Vec::new() }
    }

    /// Virtual time elapsed since the set was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_armed(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// One-shot timer firing `delay` from now.
    pub fn after(&mut self, delay: Duration, event: E) -> TimerId {
        self.arm(delay, Kind::OneShot, event)
    }

    /// Repeating timer, first firing one `period` from now.
    pub fn every(&mut self, period: Duration, event: E) -> TimerId {
        // a zero period would spin forever inside next_due
        let period = period.max(Duration::from_millis(1));
        self.arm(period, Kind::Repeating(period), event)
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn deadline(&self, dt: Duration) -> Duration {
        self.now + dt
    }

    /// Pops the earliest event due at or before `deadline` and moves virtual
    /// time to its due time. Once nothing is due, time jumps to `deadline`
    /// and `None` is returned.
    pub fn next_due(&mut self, deadline: Duration) -> Option<E> {
        // ties go to the timer armed first (ids are handed out in order)
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= deadline)
            .min_by_key(|(_, e)| (e.due, e.id.0))
            .map(|(i, _)| i);

        let Some(idx) = idx else {
            self.now = self.now.max(deadline);
            return None;
        };

        let entry = &mut self.entries[idx];
        self.now = self.now.max(entry.due);
        let event = entry.event;
        match entry.kind {
            Kind::OneShot => {
                self.entries.swap_remove(idx);
            }
            Kind::Repeating(period) => entry.due += period,
        }
        Some(event)
    }

    fn arm(&mut self, delay: Duration, kind: Kind, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, due: self.now + delay, kind, event });
        id
    }
}

impl<E: Copy> Default for Timers<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn drain(t: &mut Timers<char>, dt: Duration) -> Vec<char> {
        let deadline = t.deadline(dt);
        let mut out = Vec::new();
        while let Some(e) = t.next_due(deadline) {
            out.push(e);
        }
        out
    }

    #[test]
    fn one_shot_fires_once_at_its_due_time() {
        let mut t = Timers::new();
        t.after(ms(100), 'a');
        assert!(drain(&mut t, ms(99)).is_empty());
        assert_eq!(drain(&mut t, ms(1)), vec!['a']);
        assert!(drain(&mut t, ms(1000)).is_empty());
        assert_eq!(t.pending(), 0);
        assert_eq!(t.now(), ms(1100));
    }

    #[test]
    fn repeating_fires_every_period() {
        let mut t = Timers::new();
        t.every(ms(20), 'r');
        assert_eq!(drain(&mut t, ms(100)).len(), 5);
        assert_eq!(drain(&mut t, ms(19)).len(), 0);
        assert_eq!(drain(&mut t, ms(1)).len(), 1);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut t = Timers::new();
        let id = t.after(ms(10), 'x');
        assert!(t.is_armed(id));
        assert!(t.cancel(id));
        assert!(!t.cancel(id));
        assert!(drain(&mut t, ms(50)).is_empty());
    }

    #[test]
    fn ties_fire_in_arming_order() {
        let mut t = Timers::new();
        t.after(ms(50), 'b');
        t.every(ms(50), 'a');
        assert_eq!(drain(&mut t, ms(50)), vec!['b', 'a']);
    }

    #[test]
    fn events_interleave_by_due_time() {
        let mut t = Timers::new();
        t.every(ms(20), 'u');
        t.every(ms(50), 'r');
        assert_eq!(drain(&mut t, ms(100)), vec!['u', 'u', 'r', 'u', 'u', 'u', 'r']);
    }

    #[test]
    fn timer_armed_mid_advance_fires_in_same_advance() {
        let mut t = Timers::new();
        t.after(ms(10), 'a');
        let deadline = t.deadline(ms(100));
        assert_eq!(t.next_due(deadline), Some('a'));
        assert_eq!(t.now(), ms(10));
        t.after(ms(30), 'b');
        assert_eq!(t.next_due(deadline), Some('b'));
        assert_eq!(t.now(), ms(40));
        assert_eq!(t.next_due(deadline), None);
        assert_eq!(t.now(), ms(100));
    }
}
