//! Frontier containers: a FIFO [`Queue`] for breadth-first search and a
//! min-[`PriorityQueue`] for Dijkstra and A*.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// First-in first-out queue.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    elements: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            elements: VecDeque::new(),
        }
    }

    /// Append `x` at the back.
    #[inline]
    pub fn put(&mut self, x: T) {
        self.elements.push_back(x);
    }

    /// Remove and return the oldest element.
    #[inline]
    pub fn get(&mut self) -> Option<T> {
        self.elements.pop_front()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

/// Heap entry ordered by `(priority, seq)`, reversed so that `BinaryHeap`
/// (a max-heap) pops the smallest first.
#[derive(Debug, Clone)]
struct Entry<T, P> {
    priority: P,
    seq: u64,
    item: T,
}

impl<T, P: Ord> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, P: Ord> Eq for Entry<T, P> {}

impl<T, P: Ord> Ord for Entry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T, P: Ord> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Binary min-heap keyed by `P`.
///
/// The same item may be queued several times at different priorities; every
/// copy stays until popped. Items of equal priority come out in the order
/// they were put, so expansion order is reproducible.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P> {
    heap: BinaryHeap<Entry<T, P>>,
    next_seq: u64,
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> PriorityQueue<T, P> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Insert `item` with `priority`.
    pub fn put(&mut self, item: T, priority: P) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            item,
        });
    }

    /// Remove and return the item with the smallest priority.
    #[inline]
    pub fn get(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.item)
    }

    /// Like [`get`](Self::get), also returning the priority it was queued at.
    #[inline]
    pub fn get_with_priority(&mut self) -> Option<(T, P)> {
        self.heap.pop().map(|e| (e.item, e.priority))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued entries, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_is_fifo() {
        let mut q = Queue::new();
        assert!(q.is_empty());
        q.put('a');
        q.put('b');
        q.put('c');
        assert_eq!(q.len(), 3);
        assert_eq!(q.get(), Some('a'));
        assert_eq!(q.get(), Some('b'));
        q.put('d');
        assert_eq!(q.get(), Some('c'));
        assert_eq!(q.get(), Some('d'));
        assert_eq!(q.get(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn priority_queue_pops_smallest_first() {
        let mut pq = PriorityQueue::new();
        pq.put("five", 5);
        pq.put("one", 1);
        pq.put("three", 3);
        assert_eq!(pq.get_with_priority(), Some(("one", 1)));
        assert_eq!(pq.get(), Some("three"));
        assert_eq!(pq.get(), Some("five"));
        assert_eq!(pq.get(), None);
    }

    #[test]
    fn priority_queue_ties_pop_in_insertion_order() {
        let mut pq = PriorityQueue::new();
        for name in ["d", "a", "c", "b"] {
            pq.put(name, 7);
        }
        pq.put("first", 0);
        let order: Vec<_> = std::iter::from_fn(|| pq.get()).collect();
        assert_eq!(order, vec!["first", "d", "a", "c", "b"]);
    }

    #[test]
    fn priority_queue_keeps_duplicates() {
        let mut pq = PriorityQueue::new();
        pq.put('x', 9);
        pq.put('x', 2);
        assert_eq!(pq.len(), 2);
        assert_eq!(pq.get_with_priority(), Some(('x', 2)));
        assert_eq!(pq.get_with_priority(), Some(('x', 9)));
        assert!(pq.is_empty());
    }
}
