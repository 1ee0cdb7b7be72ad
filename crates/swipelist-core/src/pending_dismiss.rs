//! Batching of dismiss completions.
//!
//! Overlapping dismiss animations are reported to the host as a single
//! batch once the last of them finishes. Positions are reported in
//! descending order so the host can remove them one by one without earlier
//! removals invalidating later positions.

use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDismissal<H> {
    pub position: usize,
    /// Visible row that played the dismiss animation; `None` for rows
    /// dismissed while off-screen.
    pub handle: Option<H>,
}

/// A flushed set of dismissals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DismissBatch<H> {
    /// Dismissed positions, highest first.
    pub positions: Vec<usize>,
    /// Rows whose transient visual state must be reset, in the same order.
    pub handles: Vec<H>,
}

#[derive(Clone, Debug)]
pub struct PendingDismissQueue<H> {
    entries: SmallVec<[PendingDismissal<H>; 4]>,
    in_flight: usize,
}

impl<H> Default for PendingDismissQueue<H> {
    fn default() -> Self {
        Self {
            entries: SmallVec::new(),
            in_flight: 0,
        }
    }
}

impl<H> PendingDismissQueue<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of dismiss animations still running.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Maps a host position to its index in the item state. Entries still
    /// queued have already left the item state but not the host, so every
    /// queued position below `position` shifts it down by one. `None` if
    /// `position` itself is queued.
    pub fn store_index(&self, position: usize) -> Option<usize> {
        let mut below = 0;
        for entry in &self.entries {
            match entry.position.cmp(&position) {
                std::cmp::Ordering::Less => below += 1,
                std::cmp::Ordering::Equal => return None,
                std::cmp::Ordering::Greater => {}
            }
        }
        Some(position - below)
    }

    /// Inverse of [`Self::store_index`].
    pub fn host_position(&self, index: usize) -> usize {
        let mut queued: SmallVec<[usize; 4]> =
            self.entries.iter().map(|entry| entry.position).collect();
        queued.sort_unstable();
        queued.into_iter().fold(index, |position, queued| {
            if queued <= position {
                position + 1
            } else {
                position
            }
        })
    }

    /// Registers a dismiss animation that has started.
    pub fn begin_animation(&mut self) {
        self.in_flight += 1;
    }

    pub fn enqueue(&mut self, position: usize, handle: Option<H>) {
        self.entries.push(PendingDismissal { position, handle });
    }

    /// Marks one dismiss animation as finished. Returns the batch when this
    /// was the last one in flight.
    pub fn finish_animation(&mut self) -> Option<DismissBatch<H>> {
        match self.in_flight.checked_sub(1) {
            Some(remaining) => self.in_flight = remaining,
            None => log::warn!("dismiss animation finished with none in flight"),
        }
        self.flush_if_idle()
    }

    /// Flushes queued dismissals if no animation is running.
    pub fn flush_if_idle(&mut self) -> Option<DismissBatch<H>> {
        if self.in_flight > 0 || self.entries.is_empty() {
            return None;
        }

        let mut entries = std::mem::take(&mut self.entries);
        entries.sort_by(|a, b| b.position.cmp(&a.position));

        let mut batch = DismissBatch {
            positions: Vec::with_capacity(entries.len()),
            handles: Vec::new(),
        };
        for entry in entries {
            batch.positions.push(entry.position);
            if let Some(handle) = entry.handle {
                batch.handles.push(handle);
            }
        }
        log::debug!("flushing dismissals {:?}", batch.positions);
        Some(batch)
    }
}
