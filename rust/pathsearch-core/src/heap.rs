use std::fmt;

/// Ordering primitive injected into [`BinaryHeap`].
///
/// `above(a, b)` returns true when `a` belongs nearer the root than `b`.
/// Closures of shape `Fn(&T, &T) -> bool` implement this directly.
pub trait Compare<T> {
    fn above(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline(always)]
    fn above(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Smallest element at the root.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinFirst;

impl<T: Ord> Compare<T> for MinFirst {
    #[inline(always)]
    fn above(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Largest element at the root.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxFirst;

impl<T: Ord> Compare<T> for MaxFirst {
    #[inline(always)]
    fn above(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// An array-backed binary heap whose order is decided by a [`Compare`] value.
///
/// The backing vector is always fully packed: the children of index `i` live
/// at `2i + 1` and `2i + 2`, and no child is ever `above` its parent.
///
/// Ties are resolved by heap structure alone; equal elements come out in no
/// particular order.
#[derive(Clone)]
pub struct BinaryHeap<T, C> {
    data: Vec<T>,
    comparator: C,
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    pub fn new(comparator: C) -> Self {
        Self { data: Vec::new(), comparator }
    }

    pub fn with_capacity(capacity: usize, comparator: C) -> Self {
        Self { data: Vec::with_capacity(capacity), comparator }
    }

    /// Build a heap from arbitrary contents in O(n).
    ///
    /// Sifts every non-leaf index down, last parent first.
    pub fn from_vec(values: Vec<T>, comparator: C) -> Self {
        let mut heap = Self { data: values, comparator };
        heap.rebuild();
        heap
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Insert an element, restoring heap order in O(log n).
    pub fn push(&mut self, element: T) {
        self.data.push(element);
        let last = self.data.len() - 1;
        self.sift_up(last);
    }

    /// Remove and return the root, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.data.pop()?;
        if self.data.is_empty() {
            return Some(last);
        }
        let root = std::mem::replace(&mut self.data[0], last);
        self.sift_down(0);
        Some(root)
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Backing array in storage order (not sorted).
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Drain every element in comparator order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Some(element) = self.pop() {
            out.push(element);
        }
        out
    }

    /// Append elements and re-heapify once.
    pub fn extend_from_vec(&mut self, mut values: Vec<T>) {
        if values.len() < self.data.len() / 2 {
            for v in values {
                self.push(v);
            }
        } else {
            self.data.append(&mut values);
            self.rebuild();
        }
    }

    /// Check the heap-order invariant over the whole array. O(n).
    pub fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|child| {
            let parent = (child - 1) / 2;
            !self.comparator.above(&self.data[child], &self.data[parent])
        })
    }

    fn rebuild(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.comparator.above(&self.data[index], &self.data[parent]) {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut extreme = index;
            if left < len && self.comparator.above(&self.data[left], &self.data[extreme]) {
                extreme = left;
            }
            if right < len && self.comparator.above(&self.data[right], &self.data[extreme]) {
                extreme = right;
            }
            if extreme == index {
                break;
            }
            self.data.swap(index, extreme);
            index = extreme;
        }
    }
}

impl<T: Ord> BinaryHeap<T, MinFirst> {
    pub fn min_heap() -> Self {
        Self::new(MinFirst)
    }
}

impl<T: Ord> BinaryHeap<T, MaxFirst> {
    pub fn max_heap() -> Self {
        Self::new(MaxFirst)
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap").field("data", &self.data).finish()
    }
}
