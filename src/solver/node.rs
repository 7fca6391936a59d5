use std::ops::Index;

use crate::moves::Label;
use crate::state::State;

#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub(crate) state: State,
    pub(crate) parent: Option<usize>,
    /// The edge from the parent, `None` only for the root.
    pub(crate) label: Option<Label>,
    pub(crate) g: u32,
    pub(crate) h: u32,
    /// Number of labels from the root.
    pub(crate) depth: usize,
}

impl SearchNode {
    pub(crate) fn root(state: State, h: u32) -> Self {
        SearchNode {
            state,
            parent: None,
            label: None,
            g: 0,
            h,
            depth: 0,
        }
    }

    pub(crate) fn f(&self) -> u32 {
        self.g + self.h
    }
}

/// All nodes created during one search run, parents are referenced by index.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub(crate) fn push(&mut self, node: SearchNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl Index<usize> for NodeArena {
    type Output = SearchNode;

    fn index(&self, index: usize) -> &SearchNode {
        &self.nodes[index]
    }
}
