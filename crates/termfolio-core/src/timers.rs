//! Cancellable, owner-tagged scheduled tasks.
//!
//! The core never sleeps or registers callbacks. Delayed transitions (fades,
//! the exit grace period) are queued here with a deadline and fired by the
//! owner when it is told the current time. Every task belongs to an owner so
//! tearing the owner down can cancel all of its pending work at once.

/// Milliseconds on the caller's clock.
pub type Millis = u64;

/// Handle for a single scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Entry<O, T> {
    id: TimerId,
    owner: O,
    due: Millis,
    task: T,
}

/// Pending tasks ordered by deadline, then by scheduling order.
#[derive(Debug)]
pub struct TimerQueue<O, T> {
    entries: Vec<Entry<O, T>>,
    next_id: u64,
}

impl<O: PartialEq + Copy, T> TimerQueue<O, T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Queue `task` to fire `delay` ms after `now`.
    pub fn schedule(&mut self, owner: O, task: T, now: Millis, delay: Millis) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            owner,
            due: now.saturating_add(delay),
            task,
        });
        id
    }

    /// Cancel one task. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Cancel every pending task of `owner`, returning how many were dropped.
    pub fn cancel_owner(&mut self, owner: O) -> usize {
        self.cancel_matching(owner, |_| true)
    }

    /// Cancel the pending tasks of `owner` selected by `pred`.
    pub fn cancel_matching(&mut self, owner: O, pred: impl Fn(&T) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !(e.owner == owner && pred(&e.task)));
        before - self.entries.len()
    }

    /// Remove and return every task due at or before `now`, in firing order.
    pub fn take_due(&mut self, now: Millis) -> Vec<(O, T)> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.entries.drain(..).partition(|e| e.due <= now);
        self.entries = pending;
        due.sort_by_key(|e| (e.due, e.id));
        due.into_iter().map(|e| (e.owner, e.task)).collect()
    }

    /// Earliest pending deadline, if any.
    pub fn next_due(&self) -> Option<Millis> {
        self.entries.iter().map(|e| e.due).min()
    }

    pub fn has_pending(&self, owner: O) -> bool {
        self.entries.iter().any(|e| e.owner == owner)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<O: PartialEq + Copy, T> Default for TimerQueue<O, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_in_deadline_order() {
        let mut q = TimerQueue::new();
        q.schedule(1, "late", 0, 300);
        q.schedule(2, "early", 0, 100);
        q.schedule(1, "tie", 0, 100);

        assert!(q.take_due(99).is_empty());
        assert_eq!(q.take_due(100), vec![(2, "early"), (1, "tie")]);
        assert_eq!(q.next_due(), Some(300));
        assert_eq!(q.take_due(1000), vec![(1, "late")]);
        assert!(q.is_empty());
    }

    #[test]
    fn test_cancel_single() {
        let mut q = TimerQueue::new();
        let id = q.schedule(1, "a", 0, 10);
        assert!(q.cancel(id));
        assert!(!q.cancel(id));
        assert!(q.take_due(100).is_empty());
    }

    #[test]
    fn test_cancel_owner_leaves_others() {
        let mut q = TimerQueue::new();
        q.schedule(1, "a", 0, 10);
        q.schedule(1, "b", 0, 20);
        q.schedule(2, "c", 0, 30);

        assert_eq!(q.cancel_owner(1), 2);
        assert!(!q.has_pending(1));
        assert_eq!(q.take_due(100), vec![(2, "c")]);
    }

    #[test]
    fn test_cancel_matching() {
        let mut q = TimerQueue::new();
        q.schedule(1, "fade", 0, 10);
        q.schedule(1, "exit", 0, 20);

        assert_eq!(q.cancel_matching(1, |t| *t == "fade"), 1);
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn test_deadline_saturates() {
        let mut q = TimerQueue::new();
        q.schedule(1, "x", Millis::MAX, 10);
        assert_eq!(q.next_due(), Some(Millis::MAX));
    }
}
