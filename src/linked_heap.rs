//! Linked-node max-heap with explicit topology over an index arena.
//!
//! Nodes carry parent/left/right links, so the tree shape is explicit
//! pointers rather than index arithmetic. Structural positions are found by
//! a binary-path walk: writing a node's 1-based level-order position in
//! binary and reading the digits below the leading one, high to low, spells
//! out the path from the root (`0` = left, `1` = right). That reproduces
//! array-index addressing on a linked tree in O(log n) without stored
//! subtree sizes.

use std::collections::VecDeque;

use crate::{EmptyHeap, PriorityQueue};

#[derive(Debug, Clone)]
struct Node {
    value: i64,
    /// Non-owning back-reference; `left`/`right` are the owning edges.
    parent: Option<usize>,
    left: Option<usize>,
    right: Option<usize>,
}

/// A max-heap of explicitly linked nodes.
///
/// Nodes live in an arena addressed by index; slots freed by `pop` are
/// recycled through a free list. `last` always references the node at
/// 1-based level-order position `len`, keeping the tree complete.
#[derive(Debug, Default, Clone)]
pub struct LinkedHeap {
    nodes: Vec<Node>,
    free: Vec<usize>,
    root: Option<usize>,
    last: Option<usize>,
    len: usize,
}

impl LinkedHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn push(&mut self, value: i64) {
        let id = self.alloc(value);
        match self.root {
            None => self.root = Some(id),
            Some(_) => {
                // The slot at position len + 1 hangs off the node at
                // (len + 1) / 2, which a complete tree always has.
                let parent = self.node_at((self.len + 1) / 2).unwrap();
                if self.nodes[parent].left.is_none() {
                    self.nodes[parent].left = Some(id);
                } else {
                    self.nodes[parent].right = Some(id);
                }
                self.nodes[id].parent = Some(parent);
            }
        }
        self.last = Some(id);
        self.len += 1;
        self.sift_up(id);
    }

    pub fn top(&self) -> Result<i64, EmptyHeap> {
        self.root.map(|id| self.nodes[id].value).ok_or(EmptyHeap)
    }

    /// Removes and returns the maximum.
    ///
    /// The last node's value moves into the root and the emptied last node
    /// is the one released — the logical root is never detached.
    pub fn pop(&mut self) -> Result<i64, EmptyHeap> {
        let root = self.root.ok_or(EmptyHeap)?;
        let max = self.nodes[root].value;
        if self.len == 1 {
            self.release(root);
            self.root = None;
            self.last = None;
            self.len = 0;
            return Ok(max);
        }

        let last = self.last.ok_or(EmptyHeap)?;
        self.nodes[root].value = self.nodes[last].value;

        // A non-root node always has a parent to detach from.
        let parent = self.nodes[last].parent.unwrap();
        if self.nodes[parent].right == Some(last) {
            self.nodes[parent].right = None;
        } else {
            self.nodes[parent].left = None;
        }
        self.release(last);
        self.len -= 1;

        self.last = if self.len == 1 {
            self.root
        } else {
            self.node_at(self.len)
        };
        self.sift_down(root);
        Ok(max)
    }

    /// Resets the heap, then pushes each value in order. Unlike the array
    /// representation there is no linear-time batch pass; every insertion
    /// pays its own sift-up.
    pub fn build(&mut self, values: &[i64]) {
        self.clear();
        self.nodes.reserve(values.len());
        for &value in values {
            self.push(value);
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.root = None;
        self.last = None;
        self.len = 0;
    }

    /// Iterates the current elements in level order.
    pub fn iter(&self) -> LevelOrder<'_> {
        LevelOrder {
            heap: self,
            queue: self.root.into_iter().collect(),
        }
    }

    /// Locates the node at 1-based level-order position `pos` by walking the
    /// binary digits of `pos` below the leading one.
    fn node_at(&self, pos: usize) -> Option<usize> {
        let mut cur = self.root?;
        let bits = usize::BITS - pos.leading_zeros();
        for shift in (0..bits.saturating_sub(1)).rev() {
            let node = &self.nodes[cur];
            cur = if pos >> shift & 1 == 0 {
                node.left
            } else {
                node.right
            }?;
        }
        Some(cur)
    }

    fn alloc(&mut self, value: i64) -> usize {
        let node = Node {
            value,
            parent: None,
            left: None,
            right: None,
        };
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = node;
                id
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, id: usize) {
        self.free.push(id);
    }

    fn sift_up(&mut self, mut id: usize) {
        while let Some(parent) = self.nodes[id].parent {
            if self.nodes[parent].value >= self.nodes[id].value {
                break;
            }
            let value = self.nodes[id].value;
            self.nodes[id].value = self.nodes[parent].value;
            self.nodes[parent].value = value;
            id = parent;
        }
    }

    fn sift_down(&mut self, mut id: usize) {
        loop {
            // Strict comparisons: the node itself wins ties, and on equal
            // children the left one stays the pivot.
            let mut largest = id;
            if let Some(left) = self.nodes[id].left {
                if self.nodes[left].value > self.nodes[largest].value {
                    largest = left;
                }
            }
            if let Some(right) = self.nodes[id].right {
                if self.nodes[right].value > self.nodes[largest].value {
                    largest = right;
                }
            }
            if largest == id {
                return;
            }
            let value = self.nodes[id].value;
            self.nodes[id].value = self.nodes[largest].value;
            self.nodes[largest].value = value;
            id = largest;
        }
    }
}

impl From<Vec<i64>> for LinkedHeap {
    fn from(values: Vec<i64>) -> Self {
        let mut heap = Self::with_capacity(values.len());
        for value in values {
            heap.push(value);
        }
        heap
    }
}

impl PriorityQueue for LinkedHeap {
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

/// Breadth-first iterator over a [`LinkedHeap`]'s values.
///
/// Created by [`LinkedHeap::iter`].
pub struct LevelOrder<'a> {
    heap: &'a LinkedHeap,
    queue: VecDeque<usize>,
}

impl<'a> Iterator for LevelOrder<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let id = self.queue.pop_front()?;
        let node = &self.heap.nodes[id];
        if let Some(left) = node.left {
            self.queue.push_back(left);
        }
        if let Some(right) = node.right {
            self.queue.push_back(right);
        }
        Some(node.value)
    }
}
