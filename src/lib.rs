//! Max-priority queues over two interchangeable backing representations.
//!
//! [`ArrayHeap`] keeps its elements in a contiguous `Vec` and derives tree
//! topology from index arithmetic. [`LinkedHeap`] keeps explicit parent/child
//! links in an index arena and locates structural positions (the next free
//! slot, the current last node) by walking the binary digits of the element
//! count. Both satisfy the same [`PriorityQueue`] contract: constant-time
//! `top`, logarithmic `push`/`pop`, and a complete-tree shape after every
//! mutation.

use std::fmt;

pub mod array_heap;
pub mod linked_heap;

pub use array_heap::ArrayHeap;
pub use linked_heap::LinkedHeap;

/// Error returned by [`PriorityQueue::top`] and [`PriorityQueue::pop`] on a
/// heap with no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyHeap;

impl fmt::Display for EmptyHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "heap is empty")
    }
}

impl std::error::Error for EmptyHeap {}

/// Common contract satisfied by both heap representations.
///
/// `push`, `build`, and `clear` are total; `top` and `pop` fail with
/// [`EmptyHeap`] when no elements are held.
pub trait PriorityQueue {
    /// Returns the number of elements in the heap.
    fn len(&self) -> usize;

    /// Returns `true` if the heap holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts a value, restoring heap order in O(log n).
    fn push(&mut self, value: i64);

    /// Returns the maximum value without removing it.
    fn top(&self) -> Result<i64, EmptyHeap>;

    /// Removes and returns the maximum value.
    fn pop(&mut self) -> Result<i64, EmptyHeap>;

    /// Replaces the heap's contents with the given values, discarding any
    /// prior elements.
    fn build(&mut self, values: &[i64]);

    /// Removes all elements.
    fn clear(&mut self);
}
