//! Array-backed max-heap with implicit tree topology.

use crate::{EmptyHeap, PriorityQueue};

/// A max-heap over a contiguous `Vec<i64>`.
///
/// The tree shape is implicit: the parent of index `i` is `(i - 1) / 2` and
/// its children are `2i + 1` and `2i + 2`. The backing vector has no gaps,
/// so the tree is always complete.
#[derive(Debug, Default, Clone)]
pub struct ArrayHeap {
    heap: Vec<i64>,
}

impl ArrayHeap {
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn push(&mut self, value: i64) {
        self.heap.push(value);
        self.sift_up(self.heap.len() - 1);
    }

    pub fn top(&self) -> Result<i64, EmptyHeap> {
        self.heap.first().copied().ok_or(EmptyHeap)
    }

    pub fn pop(&mut self) -> Result<i64, EmptyHeap> {
        let n = self.heap.len();
        if n == 0 {
            return Err(EmptyHeap);
        }
        self.heap.swap(0, n - 1);
        let max = self.heap.pop().ok_or(EmptyHeap)?;
        self.sift_down(0);
        Ok(max)
    }

    /// Replaces the heap's contents with `values`, then restores heap order
    /// from the last internal node down to the root (linear-time heapify).
    pub fn build(&mut self, values: &[i64]) {
        self.heap.clear();
        self.heap.extend_from_slice(values);
        self.heapify();
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Iterates the current elements in level order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.heap.iter().copied()
    }

    /// Restores heap order over arbitrary contents by sifting down from the
    /// last internal node to the root.
    fn heapify(&mut self) {
        for i in (0..self.heap.len() / 2).rev() {
            self.sift_down(i);
        }
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[parent] >= self.heap[i] {
                break;
            }
            self.heap.swap(parent, i);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            // Strict comparisons: on equal children the left index stays the
            // pivot.
            let mut largest = i;
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            if left < n && self.heap[left] > self.heap[largest] {
                largest = left;
            }
            if right < n && self.heap[right] > self.heap[largest] {
                largest = right;
            }
            if largest == i {
                return;
            }
            self.heap.swap(largest, i);
            i = largest;
        }
    }
}

impl From<Vec<i64>> for ArrayHeap {
    fn from(values: Vec<i64>) -> Self {
        let mut heap = Self { heap: values };
        heap.heapify();
        heap
    }
}

impl PriorityQueue for ArrayHeap {
    fn len(&self) -> usize {
        self.len()
    }

    fn push(&mut self, value: i64) {
        self.push(value);
    }

    fn top(&self) -> Result<i64, EmptyHeap> {
        self.top()
    }

    fn pop(&mut self) -> Result<i64, EmptyHeap> {
        self.pop()
    }

    fn build(&mut self, values: &[i64]) {
        self.build(values);
    }

    fn clear(&mut self) {
        self.clear();
    }
}
