use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use chrono::{DateTime, Utc};

use super::event::Event;

/// Size-bounded accumulator keeping the most recent events seen so far.
///
/// Backed by a min-heap keyed on timestamp: when the accumulator is full,
/// a new event displaces the oldest retained one only if it is more
/// recent. Observable behavior is identical to re-sorting and truncating
/// after every batch, since only more-recent entries are ever retained.
pub struct FeedAccumulator {
    capacity: usize,
    next_seq: u64,
    heap: BinaryHeap<Reverse<HeapEntry>>,
}

struct HeapEntry {
    occurred_at: DateTime<Utc>,
    // Insertion counter; breaks timestamp ties so later arrivals win,
    // matching truncation of a stably-sorted list.
    seq: u64,
    event: Event,
}

impl HeapEntry {
    fn key(&self) -> (DateTime<Utc>, u64) {
        (self.occurred_at, self.seq)
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl FeedAccumulator {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            next_seq: 0,
            heap: BinaryHeap::with_capacity(capacity.saturating_add(1)),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Offer an event; it is retained only while it ranks among the
    /// `capacity` most recent seen so far.
    pub fn push(&mut self, event: Event) {
        if self.capacity == 0 {
            return;
        }

        let entry = HeapEntry {
            occurred_at: event.occurred_at,
            seq: self.next_seq,
            event,
        };
        self.next_seq += 1;

        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(entry));
            return;
        }

        // Full: the root is the oldest retained entry.
        let displaces_oldest = match self.heap.peek() {
            Some(Reverse(oldest)) => entry > *oldest,
            None => true,
        };
        if displaces_oldest {
            self.heap.pop();
            self.heap.push(Reverse(entry));
        }
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = Event>) {
        for event in events {
            self.push(event);
        }
    }

    /// Consume the accumulator, yielding the retained events ascending by
    /// timestamp.
    pub fn into_sorted(self) -> Vec<Event> {
        let mut entries: Vec<HeapEntry> = self.heap.into_iter().map(|Reverse(e)| e).collect();
        entries.sort_by_key(HeapEntry::key);
        entries.into_iter().map(|e| e.event).collect()
    }
}
