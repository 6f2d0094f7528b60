use std::{cmp::Reverse, collections::BinaryHeap, time::Duration};

use crate::Instant;

/// Time-ordered index over sent messages, oldest send first.
///
/// Entries are never removed when a message completes early; the owner keeps
/// the authoritative map and discards popped keys it no longer tracks. Stale
/// entries are drained by the same sweep once they pass the expiry threshold,
/// so the heap only ever holds roughly one timeout window of traffic.
pub struct ExpiryQueue<K: Ord> {
    heap: BinaryHeap<Reverse<(Instant, K)>>,
}

impl<K: Ord> Default for ExpiryQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> ExpiryQueue<K> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, sent_at: Instant, key: K) {
        self.heap.push(Reverse((sent_at, key)));
    }

    pub fn peek_oldest(&self) -> Option<(&Instant, &K)> {
        self.heap
            .peek()
            .map(|Reverse((sent_at, key))| (sent_at, key))
    }

    /// Removes and returns, oldest first, every entry whose elapsed time at
    /// `now` is strictly greater than `max_duration`
    pub fn pop_expired(&mut self, now: &Instant, max_duration: Duration) -> Vec<(Instant, K)> {
        let mut expired = Vec::new();
        while let Some(Reverse((sent_at, _))) = self.heap.peek() {
            if sent_at.elapsed(now) <= max_duration {
                break;
            }
            if let Some(Reverse(entry)) = self.heap.pop() {
                expired.push(entry);
            }
        }
        expired
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
