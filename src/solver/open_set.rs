use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::config::Algorithm;

use super::node::{NodeArena, SearchNode};

/// Nodes waiting to be expanded, by index into the node arena.
#[derive(Debug)]
pub(crate) enum OpenSet {
    Fifo(VecDeque<usize>),
    Lifo(Vec<usize>),
    Priority {
        heap: BinaryHeap<Entry>,
        /// Order by `h` alone instead of `f`.
        greedy: bool,
    },
}

impl OpenSet {
    pub(crate) fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::BreadthFirst => OpenSet::Fifo(VecDeque::new()),
            Algorithm::DepthFirst | Algorithm::IdaStar => OpenSet::Lifo(Vec::new()),
            Algorithm::Greedy => OpenSet::Priority {
                heap: BinaryHeap::new(),
                greedy: true,
            },
            Algorithm::AStar => OpenSet::Priority {
                heap: BinaryHeap::new(),
                greedy: false,
            },
        }
    }

    pub(crate) fn push(&mut self, index: usize, node: &SearchNode) {
        match self {
            OpenSet::Fifo(queue) => queue.push_back(index),
            OpenSet::Lifo(stack) => stack.push(index),
            OpenSet::Priority { heap, greedy } => {
                let key = if *greedy { node.h } else { node.f() };
                heap.push(Entry {
                    key,
                    h: node.h,
                    index,
                });
            }
        }
    }

    /// `children` are most preferred first, that one should also come out first.
    pub(crate) fn push_children(&mut self, children: &[usize], nodes: &NodeArena) {
        let is_stack = match self {
            OpenSet::Lifo(_) => true,
            _ => false,
        };
        if is_stack {
            for &child in children.iter().rev() {
                self.push(child, &nodes[child]);
            }
        } else {
            for &child in children {
                self.push(child, &nodes[child]);
            }
        }
    }

    pub(crate) fn pop(&mut self) -> Option<usize> {
        match self {
            OpenSet::Fifo(queue) => queue.pop_front(),
            OpenSet::Lifo(stack) => stack.pop(),
            OpenSet::Priority { heap, .. } => heap.pop().map(|entry| entry.index),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            OpenSet::Fifo(queue) => queue.len(),
            OpenSet::Lifo(stack) => stack.len(),
            OpenSet::Priority { heap, .. } => heap.len(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Entry {
    key: u32,
    h: u32,
    index: usize,
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // intentionally reversed for BinaryHeap: lowest key, then lowest h, then newest
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| self.index.cmp(&other.index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data::Pos;
    use crate::state::State;

    fn node(g: u32, h: u32) -> SearchNode {
        let mut node = SearchNode::root(State::new(Pos::new(0, 0), vec![]), h);
        node.g = g;
        node
    }

    fn drain(open: &mut OpenSet) -> Vec<usize> {
        let mut order = Vec::new();
        while let Some(index) = open.pop() {
            order.push(index);
        }
        order
    }

    #[test]
    fn fifo_and_lifo() {
        let mut bfs = OpenSet::new(Algorithm::BreadthFirst);
        let mut dfs = OpenSet::new(Algorithm::DepthFirst);
        for i in 0..3 {
            bfs.push(i, &node(0, 0));
            dfs.push(i, &node(0, 0));
        }
        assert_eq!(bfs.len(), 3);
        assert_eq!(drain(&mut bfs), vec![0, 1, 2]);
        assert_eq!(drain(&mut dfs), vec![2, 1, 0]);
    }

    #[test]
    fn a_star_order() {
        let mut open = OpenSet::new(Algorithm::AStar);
        open.push(0, &node(5, 5)); // f 10
        open.push(1, &node(2, 6)); // f 8, h 6
        open.push(2, &node(4, 4)); // f 8, h 4
        open.push(3, &node(6, 4)); // f 10, h 4
        open.push(4, &node(4, 4)); // same as 2 but newer
        assert_eq!(drain(&mut open), vec![4, 2, 1, 3, 0]);
    }

    #[test]
    fn preferred_child_first() {
        let mut nodes = NodeArena::default();
        let children: Vec<usize> = (0..3).map(|_| nodes.push(node(1, 1))).collect();
        for &algorithm in &[Algorithm::BreadthFirst, Algorithm::DepthFirst] {
            let mut open = OpenSet::new(algorithm);
            open.push_children(&children, &nodes);
            assert_eq!(open.pop(), Some(0));
        }
    }

    #[test]
    fn greedy_ignores_cost() {
        let mut open = OpenSet::new(Algorithm::Greedy);
        open.push(0, &node(0, 3));
        open.push(1, &node(100, 1));
        open.push(2, &node(1, 2));
        assert_eq!(drain(&mut open), vec![1, 2, 0]);
    }
}
