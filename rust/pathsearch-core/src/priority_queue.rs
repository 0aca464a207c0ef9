use crate::heap::{BinaryHeap, Compare};

/// Orders `(element, priority)` pairs on the priority alone, lowest first.
#[derive(Clone, Copy, Debug, Default)]
pub struct ByPriority;

impl<E, P: Ord> Compare<(E, P)> for ByPriority {
    #[inline(always)]
    fn above(&self, a: &(E, P), b: &(E, P)) -> bool {
        a.1 < b.1
    }
}

/// A min-priority queue over a [`BinaryHeap`].
///
/// Elements with equal priority come out in whatever order the heap leaves
/// them; insertion order is not preserved.
#[derive(Clone, Debug)]
pub struct PriorityQueue<E, P> {
    heap: BinaryHeap<(E, P), ByPriority>,
}

impl<E, P: Ord> PriorityQueue<E, P> {
    pub fn new() -> Self {
        Self { heap: BinaryHeap::new(ByPriority) }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { heap: BinaryHeap::with_capacity(capacity, ByPriority) }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Enqueue `element` with `priority`.
    pub fn put(&mut self, element: E, priority: P) {
        self.heap.push((element, priority));
    }

    /// Dequeue the lowest-priority element.
    pub fn get(&mut self) -> Option<E> {
        self.heap.pop().map(|(element, _)| element)
    }

    /// Dequeue the lowest-priority element together with its priority.
    pub fn get_with_priority(&mut self) -> Option<(E, P)> {
        self.heap.pop()
    }

    pub fn peek(&self) -> Option<&E> {
        self.heap.peek().map(|(element, _)| element)
    }

    pub fn peek_priority(&self) -> Option<&P> {
        self.heap.peek().map(|(_, priority)| priority)
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Lazily dequeue everything in ascending priority.
    ///
    /// Consumes the queue's contents; once exhausted a fresh `drain` yields
    /// nothing.
    pub fn drain(&mut self) -> Drain<'_, E, P> {
        Drain { queue: self }
    }

    pub fn as_heap(&self) -> &BinaryHeap<(E, P), ByPriority> {
        &self.heap
    }
}

impl<E, P: Ord> Default for PriorityQueue<E, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, P: Ord> FromIterator<(E, P)> for PriorityQueue<E, P> {
    fn from_iter<I: IntoIterator<Item = (E, P)>>(iter: I) -> Self {
        let values: Vec<(E, P)> = iter.into_iter().collect();
        Self { heap: BinaryHeap::from_vec(values, ByPriority) }
    }
}

impl<E, P: Ord> Extend<(E, P)> for PriorityQueue<E, P> {
    fn extend<I: IntoIterator<Item = (E, P)>>(&mut self, iter: I) {
        self.heap.extend_from_vec(iter.into_iter().collect());
    }
}

pub struct Drain<'a, E, P> {
    queue: &'a mut PriorityQueue<E, P>,
}

impl<E, P: Ord> Iterator for Drain<'_, E, P> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        self.queue.get()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.queue.len();
        (n, Some(n))
    }
}

impl<E, P: Ord> ExactSizeIterator for Drain<'_, E, P> {}

pub struct IntoIter<E, P> {
    queue: PriorityQueue<E, P>,
}

impl<E, P: Ord> Iterator for IntoIter<E, P> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        self.queue.get()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.queue.len();
        (n, Some(n))
    }
}

impl<E, P: Ord> ExactSizeIterator for IntoIter<E, P> {}

impl<E, P: Ord> IntoIterator for PriorityQueue<E, P> {
    type Item = E;
    type IntoIter = IntoIter<E, P>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}
