//! Cancellable deferred tasks driven by the host clock.
//!
//! Nothing here sleeps: the host asks for [`DeferredQueue::next_deadline`]
//! to schedule its own wake-up and then hands the current instant to
//! [`DeferredQueue::drain_due`].

use smallvec::SmallVec;
use web_time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DeferredId(u64);

#[derive(Debug)]
struct Deferred<T> {
    id: DeferredId,
    deadline: Instant,
    task: T,
}

#[derive(Debug)]
pub struct DeferredQueue<T> {
    next_id: u64,
    entries: SmallVec<[Deferred<T>; 4]>,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            entries: SmallVec::new(),
        }
    }
}

impl<T> DeferredQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn schedule(&mut self, deadline: Instant, task: T) -> DeferredId {
        let id = DeferredId(self.next_id);
        self.next_id += 1;
        self.entries.push(Deferred { id, deadline, task });
        id
    }

    /// Cancels a pending task. Returns `false` if it already ran or was
    /// cancelled before.
    pub fn cancel(&mut self, id: DeferredId) -> bool {
        match self.entries.iter().position(|entry| entry.id == id) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }

    /// Removes and returns every task whose deadline is at or before `now`,
    /// earliest first. Ties keep scheduling order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<(DeferredId, T)> {
        let mut due = Vec::new();
        let mut pending = SmallVec::new();
        for entry in self.entries.drain(..) {
            if entry.deadline <= now {
                due.push(entry);
            } else {
                pending.push(entry);
            }
        }
        self.entries = pending;
        due.sort_by_key(|entry| (entry.deadline, entry.id.0));
        due.into_iter().map(|entry| (entry.id, entry.task)).collect()
    }
}
