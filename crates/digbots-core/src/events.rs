//! Tick-ranked queue for scheduling bot actions.
//!
//! Entries are kept in a min-heap keyed by `(tick, insertion_order)`, so
//! earlier ticks pop first and ties pop in FIFO order.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<E> {
    event: E,
    tick: u64,
    seq: u64,
}

impl<E> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.tick == other.tick && self.seq == other.seq
    }
}

impl<E> Eq for Entry<E> {}

impl<E> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Entry<E> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.tick.cmp(&other.tick).then(self.seq.cmp(&other.seq))
    }
}

/// A priority queue of events scheduled at ticks.
#[derive(Debug)]
pub struct EventQueue<E> {
    heap: BinaryHeap<Reverse<Entry<E>>>,
    seq: u64,
}

impl<E> EventQueue<E> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Schedule `event` at `tick`.
    pub fn push(&mut self, event: E, tick: u64) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { event, tick, seq }));
    }

    /// Pop the earliest event together with its tick.
    pub fn pop(&mut self) -> Option<(E, u64)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.event, entry.tick))
    }

    /// Tick of the next event without removing it.
    pub fn peek_tick(&self) -> Option<u64> {
        self.heap.peek().map(|Reverse(entry)| entry.tick)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Drop every event for which `keep` returns `false`.
    pub fn retain(&mut self, keep: impl Fn(&E) -> bool) {
        let old = std::mem::take(&mut self.heap);
        self.heap = old
            .into_iter()
            .filter(|Reverse(entry)| keep(&entry.event))
            .collect();
    }
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earliest_tick_first() {
        let mut q = EventQueue::new();
        q.push("late", 9);
        q.push("early", 1);
        q.push("mid", 4);
        assert_eq!(q.peek_tick(), Some(1));
        assert_eq!(q.pop(), Some(("early", 1)));
        assert_eq!(q.pop(), Some(("mid", 4)));
        assert_eq!(q.pop(), Some(("late", 9)));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn same_tick_is_fifo() {
        let mut q = EventQueue::new();
        q.push('a', 2);
        q.push('b', 2);
        q.push('c', 2);
        let order: Vec<char> = std::iter::from_fn(|| q.pop().map(|(e, _)| e)).collect();
        assert_eq!(order, vec!['a', 'b', 'c']);
    }

    #[test]
    fn retain_filters() {
        let mut q = EventQueue::new();
        for i in 0..6 {
            q.push(i, i as u64);
        }
        q.retain(|e| e % 3 == 0);
        assert_eq!(q.len(), 2);
        assert_eq!(q.pop(), Some((0, 0)));
        assert_eq!(q.pop(), Some((3, 3)));
        assert!(q.is_empty());
    }
}
