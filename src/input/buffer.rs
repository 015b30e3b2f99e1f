//! Bounded, most-recent-first sample history with change notification.
//!
//! Samples live in a fixed ring so that evicting the oldest entry is a single
//! overwrite. Consecutive duplicates (same direction and button) are folded
//! into the head entry, which keeps the history a list of *changes* in stick
//! and button state rather than a list of frames.

use crate::input::sample::{Direction, Sample};
use std::fmt;

/// Number of samples retained per player.
pub const BUFFER_CAPACITY: usize = 30;

/// Fixed-capacity ring of samples, indexed from the most recent entry.
#[derive(Clone)]
pub struct InputHistory {
    slots: [Option<Sample>; BUFFER_CAPACITY],
    /// Slot holding the most recent sample (meaningless while `len == 0`).
    head: usize,
    len: usize,
}

impl InputHistory {
    pub fn new() -> Self {
        Self {
            slots: [None; BUFFER_CAPACITY],
            head: 0,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        BUFFER_CAPACITY
    }

    /// Most recent sample.
    pub fn head(&self) -> Option<&Sample> {
        self.get(0)
    }

    /// Oldest retained sample.
    pub fn oldest(&self) -> Option<&Sample> {
        self.len.checked_sub(1).and_then(|index| self.get(index))
    }

    /// Sample `index` steps back from the most recent one (0 = head).
    pub fn get(&self, index: usize) -> Option<&Sample> {
        if index >= self.len {
            return None;
        }
        let slot = (self.head + BUFFER_CAPACITY - index) % BUFFER_CAPACITY;
        self.slots[slot].as_ref()
    }

    /// Iterate most recent first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Sample> + '_ {
        (0..self.len).filter_map(move |index| self.get(index))
    }

    /// Owned most-recent-first copy of the history.
    pub fn snapshot(&self) -> Vec<Sample> {
        self.iter().copied().collect()
    }

    /// Write `sample` as the new head, overwriting the oldest slot when full.
    /// Returns the evicted sample, if any.
    fn insert(&mut self, sample: Sample) -> Option<Sample> {
        let evicted = if self.len == BUFFER_CAPACITY {
            self.oldest().copied()
        } else {
            None
        };

        self.head = if self.len == 0 {
            0
        } else {
            (self.head + 1) % BUFFER_CAPACITY
        };
        self.slots[self.head] = Some(sample);
        self.len = (self.len + 1).min(BUFFER_CAPACITY);
        evicted
    }

    fn clear(&mut self) {
        self.slots = [None; BUFFER_CAPACITY];
        self.head = 0;
        self.len = 0;
    }
}

impl Default for InputHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InputHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Handle returned by [`InputBuffer::on_change`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type ChangeHandler = Box<dyn FnMut(&InputHistory) + Send>;

/// Per-player input buffer: a deduplicating [`InputHistory`] plus subscribers
/// notified synchronously after every accepted push.
pub struct InputBuffer {
    history: InputHistory,
    subscribers: Vec<(SubscriptionId, ChangeHandler)>,
    next_subscription: u64,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self {
            history: InputHistory::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Offer a new sample to the buffer.
    ///
    /// Returns `false` without notifying anyone when the sample repeats the
    /// head's direction and button, or when its direction is
    /// [`Direction::Unknown`].
    pub fn push(&mut self, sample: Sample) -> bool {
        if sample.direction == Direction::Unknown {
            log::trace!("rejecting sample without stick signal: {sample}");
            return false;
        }
        if let Some(head) = self.history.head() {
            if head.same_input(&sample) {
                return false;
            }
        }

        if let Some(evicted) = self.history.insert(sample) {
            log::trace!("evicted oldest sample {evicted}");
        }

        for (_, handler) in self.subscribers.iter_mut() {
            handler(&self.history);
        }
        true
    }

    /// Register a handler invoked after each accepted push, in registration order.
    pub fn on_change<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&InputHistory) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(handler)));
        id
    }

    /// Remove a handler. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Read-only view of the retained samples.
    pub fn history(&self) -> &InputHistory {
        &self.history
    }

    /// Owned most-recent-first copy of the retained samples.
    pub fn snapshot(&self) -> Vec<Sample> {
        self.history.snapshot()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Drop every retained sample. Subscribers are not notified.
    pub fn clear(&mut self) {
        self.history.clear();
    }
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InputBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputBuffer")
            .field("history", &self.history)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
