//! Strategy-selected frontier behind one push/pop interface
//!
//! Each search strategy differs only in how its frontier orders discovered
//! nodes: FIFO for breadth-first, LIFO for depth-first, and a binary heap
//! keyed by priority for the cost-ordered searches. Heap entries carry a
//! monotonically increasing sequence number so equal priorities pop in
//! insertion order, keeping exploration counts reproducible.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::spatial::Position;

/// Discovered-but-not-settled nodes, ordered per strategy
#[derive(Debug)]
pub enum Frontier {
    /// First-in first-out queue (breadth-first)
    Fifo(VecDeque<Position>),
    /// Last-in first-out stack (depth-first)
    Lifo(Vec<Position>),
    /// Min-heap ordered by priority, then insertion order
    Priority {
        /// Entries as `Reverse((priority, sequence, position))`
        heap: BinaryHeap<Reverse<(usize, u64, Position)>>,
        /// Next insertion sequence number
        seq: u64,
    },
}

impl Frontier {
    /// Create a FIFO frontier
    pub const fn fifo() -> Self {
        Self::Fifo(VecDeque::new())
    }

    /// Create a LIFO frontier
    pub const fn lifo() -> Self {
        Self::Lifo(Vec::new())
    }

    /// Create a priority frontier
    pub const fn priority() -> Self {
        Self::Priority {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Add a node; `priority` is ignored by the FIFO and LIFO variants
    pub fn push(&mut self, pos: Position, priority: usize) {
        match self {
            Self::Fifo(queue) => queue.push_back(pos),
            Self::Lifo(stack) => stack.push(pos),
            Self::Priority { heap, seq } => {
                heap.push(Reverse((priority, *seq, pos)));
                *seq += 1;
            }
        }
    }

    /// Remove the next node according to the strategy's ordering
    pub fn pop(&mut self) -> Option<Position> {
        match self {
            Self::Fifo(queue) => queue.pop_front(),
            Self::Lifo(stack) => stack.pop(),
            Self::Priority { heap, .. } => heap.pop().map(|Reverse((_, _, pos))| pos),
        }
    }
}
