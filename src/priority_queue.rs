use crate::collections::FxHashMap;
use crate::errors::QueueError;

use std::{hash::Hash, fmt::Debug};


/// Min priority queue with decrease-key
/// https://en.wikipedia.org/wiki/Binary_heap
///
/// Entries live in a binary array-heap ordered by priority. `slots` maps each
/// live node to its offset in `heap`, so `update` can find a node without a
/// linear scan. Every move inside the heap goes through `swap`, which keeps
/// both displaced nodes' slots in sync.
///
/// Ties between equal priorities come out in no particular order.
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<N, P> {
    heap: Vec<Entry<N, P>>,
    slots: FxHashMap<N, usize>,
}

#[derive(Debug, Clone)]
struct Entry<N, P> {
    node: N,
    priority: P,
}

impl<N, P> Default for IndexedPriorityQueue<N, P> {
    fn default() -> Self {
        Self {
            heap: Vec::new(),
            slots: FxHashMap::default(),
        }
    }
}

impl<N, P> IndexedPriorityQueue<N, P>
where
    N: Eq + Hash + Clone + Debug,
    P: Ord + Copy,
{

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            slots: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.slots.contains_key(node)
    }

    /// Current priority of a live node
    pub fn priority(&self, node: &N) -> Option<P> {
        self.slots.get(node).map(|&slot| self.heap[slot].priority)
    }

    /// Node with the lowest priority, without removing it
    pub fn peek(&self) -> Option<(&N, P)> {
        self.heap.first().map(|e| (&e.node, e.priority))
    }

    /// Insert a node that is not already queued
    pub fn push(&mut self, node: N, priority: P) -> Result<(), QueueError> {
        if self.slots.contains_key(&node) {
            return Err(QueueError::DuplicateNode(format!("{node:?}")));
        }

        let slot = self.heap.len();
        self.slots.insert(node.clone(), slot);
        self.heap.push(Entry { node, priority });
        self.sift_up(slot);
        Ok(())
    }

    /// Remove the node with the lowest priority
    pub fn pop(&mut self) -> Option<(N, P)> {
        if self.heap.is_empty() {
            return None;
        }

        // move the root to the back so it can be popped off the vec
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let Entry { node, priority } = self.heap.pop()?;
        self.slots.remove(&node);

        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((node, priority))
    }

    /// Change the priority of a queued node and restore heap order
    /// Usually a decrease, but raising a priority works too
    pub fn update(&mut self, node: &N, priority: P) -> Result<(), QueueError> {
        let slot = match self.slots.get(node) {
            Some(&slot) => slot,
            None => return Err(QueueError::MissingNode(format!("{node:?}"))),
        };

        let old = std::mem::replace(&mut self.heap[slot].priority, priority);
        if priority < old {
            self.sift_up(slot);
        } else if priority > old {
            self.sift_down(slot);
        }
        Ok(())
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].priority < self.heap[parent].priority {
                self.swap(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;

            if left < len && self.heap[left].priority < self.heap[smallest].priority {
                smallest = left;
            }
            if right < len && self.heap[right].priority < self.heap[smallest].priority {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        // both nodes are live so the slot entries always exist
        if let Some(s) = self.slots.get_mut(&self.heap[a].node) {
            *s = a;
        }
        if let Some(s) = self.slots.get_mut(&self.heap[b].node) {
            *s = b;
        }
    }

    #[cfg(test)]
    fn assert_consistent(&self) {
        assert_eq!(self.heap.len(), self.slots.len());
        for (slot, entry) in self.heap.iter().enumerate() {
            assert_eq!(self.slots.get(&entry.node), Some(&slot), "slot index out of sync for {:?}", entry.node);
            if slot > 0 {
                assert!(self.heap[(slot - 1) / 2].priority <= entry.priority, "heap order broken at {slot}");
            }
        }
    }
}
