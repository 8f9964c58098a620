//! Binary min-heap used to pick the next pipeline during the merge.
//!
//! `std::collections::BinaryHeap` leaves the placement of equal elements
//! unspecified across versions. The merge output depends on that placement
//! when the comparator reports ties, so the sift rules are fixed here:
//!
//! - sift up stops as soon as the element is not smaller than its parent;
//! - sift down takes the right child only when it is strictly smaller than
//!   the left one, and stops as soon as the element is not larger than that
//!   child;
//! - pop moves the last element to the root and sifts it down.

use std::cmp::Ordering;

/// Comparator deciding the heap order.
pub type Compare<T> = fn(&T, &T) -> Ordering;

/// A min-heap with deterministic tie placement.
pub struct MergeQueue<T> {
    heap: Vec<T>,
    compare: Compare<T>,
}

impl<T> MergeQueue<T> {
    pub fn new(compare: Compare<T>) -> Self {
        Self::with_capacity(0, compare)
    }

    pub fn with_capacity(capacity: usize, compare: Compare<T>) -> Self {
        MergeQueue {
            heap: Vec::with_capacity(capacity),
            compare,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn push(&mut self, item: T) {
        self.heap.push(item);
        self.sift_up(self.heap.len() - 1);
    }

    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Mutable access to the smallest element.
    ///
    /// Changing the element's ordering key leaves the heap unordered until
    /// [`MergeQueue::pop`] or [`MergeQueue::resift_top`] is called.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.heap.first_mut()
    }

    pub fn pop(&mut self) -> Option<T> {
        let last = self.heap.pop()?;
        if self.heap.is_empty() {
            return Some(last);
        }
        let top = std::mem::replace(&mut self.heap[0], last);
        self.sift_down(0);
        Some(top)
    }

    /// Restore the heap after the top element's key changed.
    pub fn resift_top(&mut self) {
        if self.heap.len() > 1 {
            if let Some(top) = self.pop() {
                self.push(top);
            }
        }
    }

    fn sift_up(&mut self, mut k: usize) {
        while k > 0 {
            let parent = (k - 1) / 2;
            if (self.compare)(&self.heap[k], &self.heap[parent]) != Ordering::Less {
                break;
            }
            self.heap.swap(k, parent);
            k = parent;
        }
    }

    fn sift_down(&mut self, mut k: usize) {
        let size = self.heap.len();
        let half = size / 2;
        while k < half {
            let mut child = 2 * k + 1;
            let right = child + 1;
            if right < size
                && (self.compare)(&self.heap[child], &self.heap[right]) == Ordering::Greater
            {
                child = right;
            }
            if (self.compare)(&self.heap[k], &self.heap[child]) != Ordering::Greater {
                break;
            }
            self.heap.swap(k, child);
            k = child;
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for MergeQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MergeQueue").field("heap", &self.heap).finish()
    }
}
