use crate::graph::{BaseGraph, FillEdges};
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexState {
    Unsearched,
    InSeparator,
    Component(usize),
}

/// A connected component of `G - S` together with `N(C) ∩ S`. Both lists are
/// sorted ascending.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Block {
    pub component: Vec<usize>,
    pub neighborhood: Vec<usize>,
}

impl Block {
    /// `C ∪ N(C)`, sorted.
    pub fn vertices(&self) -> Vec<usize> {
        let mut vertices = Vec::with_capacity(self.component.len() + self.neighborhood.len());
        vertices.extend_from_slice(&self.component);
        vertices.extend_from_slice(&self.neighborhood);
        vertices.sort_unstable();
        vertices
    }
}

/// Reusable engine computing the blocks of `G - S`.
///
/// All scratch buffers are sized once to the order of the graph. The blocks
/// returned by a call are overwritten by the next call, copy them out if they
/// need to outlive it.
pub struct SeparatorBlocks<'a, G: BaseGraph> {
    graph: &'a G,
    state: Vec<VertexState>,
    queue: VecDeque<usize>,
    last_seen: Vec<usize>,
    scratch: Vec<usize>,
    separator_size: usize,
    blocks: Vec<Block>,
}

impl<'a, G: BaseGraph> SeparatorBlocks<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        let n = graph.order();
        Self {
            graph,
            state: vec![VertexState::Unsearched; n],
            queue: VecDeque::with_capacity(n),
            last_seen: Vec::with_capacity(n),
            scratch: Vec::with_capacity(n),
            separator_size: 0,
            blocks: Vec::new(),
        }
    }

    pub fn graph(&self) -> &'a G {
        self.graph
    }

    pub fn separate(&mut self, separator: &[usize]) -> &[Block] {
        self.run(separator, None);
        &self.blocks
    }

    /// Like [`SeparatorBlocks::separate`], treating the overlay edges as edges
    /// of the graph.
    pub fn separate_with_fill(&mut self, fill: &FillEdges, separator: &[usize]) -> &[Block] {
        self.run(separator, Some(fill));
        &self.blocks
    }

    /// Separates by `N[v]`.
    pub fn separate_closed_neighborhood(&mut self, v: usize) -> &[Block] {
        let mut closed = std::mem::take(&mut self.scratch);
        closed.clear();
        closed.push(v);
        closed.extend_from_slice(self.graph.neighborhood(v));
        self.run(&closed, None);
        self.scratch = closed;
        &self.blocks
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn full_blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        self.blocks.iter().filter(move |block| self.is_full(block))
    }

    /// Number of distinct vertices in the last separator.
    pub fn separator_size(&self) -> usize {
        self.separator_size
    }

    #[inline]
    pub fn is_full(&self, block: &Block) -> bool {
        block.neighborhood.len() == self.separator_size
    }

    #[inline]
    pub fn state(&self, v: usize) -> VertexState {
        self.state[v]
    }

    /// Index into [`SeparatorBlocks::blocks`] of the block containing `v`.
    #[inline]
    pub fn component_of(&self, v: usize) -> Option<usize> {
        match self.state[v] {
            VertexState::Component(c) => Some(c),
            _ => None,
        }
    }

    fn run(&mut self, separator: &[usize], fill: Option<&FillEdges>) {
        let graph = self.graph;
        let n = graph.order();
        self.blocks.clear();
        self.state.iter_mut().for_each(|s| *s = VertexState::Unsearched);

        self.separator_size = 0;
        for v in separator.iter().copied() {
            assert!(v < n, "separator vertex {} out of range", v);
            if self.state[v] != VertexState::InSeparator {
                self.state[v] = VertexState::InSeparator;
                self.separator_size += 1;
            }
        }

        for seed in 0..n {
            if self.state[seed] != VertexState::Unsearched {
                continue;
            }
            let id = self.blocks.len();
            let mut component = vec![seed];
            self.state[seed] = VertexState::Component(id);
            self.queue.push_back(seed);
            while let Some(v) = self.queue.pop_front() {
                let extra = fill.map_or(&[] as &[usize], |f| f.neighbors(v));
                for u in graph.neighborhood(v).iter().chain(extra.iter()).copied() {
                    if self.state[u] == VertexState::Unsearched {
                        self.state[u] = VertexState::Component(id);
                        component.push(u);
                        self.queue.push_back(u);
                    }
                }
            }
            component.sort_unstable();
            self.blocks.push(Block {
                component,
                neighborhood: Vec::new(),
            });
        }

        // Walk the separator once. A separator vertex is recorded at most once
        // per block through last_seen, and ascending v keeps every list sorted.
        self.last_seen.clear();
        self.last_seen.resize(self.blocks.len(), usize::MAX);
        for v in 0..n {
            if self.state[v] != VertexState::InSeparator {
                continue;
            }
            let extra = fill.map_or(&[] as &[usize], |f| f.neighbors(v));
            for u in graph.neighborhood(v).iter().chain(extra.iter()).copied() {
                if let VertexState::Component(c) = self.state[u] {
                    if self.last_seen[c] != v {
                        self.last_seen[c] = v;
                        self.blocks[c].neighborhood.push(v);
                    }
                }
            }
        }
    }
}
