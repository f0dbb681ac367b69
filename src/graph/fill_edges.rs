use crate::graph::adjacency::pair_key;
use crate::graph::base_graph::BaseGraph;
use fxhash::FxHashSet;

/// Extra edges laid over a base graph without mutating it.
///
/// Only pairs that are not edges of the base graph should be added.
#[derive(Clone, Debug, Default)]
pub struct FillEdges {
    neighbors: Vec<Vec<usize>>,
    pairs: FxHashSet<(usize, usize)>,
}

impl FillEdges {
    pub fn new(order: usize) -> Self {
        Self {
            neighbors: vec![Vec::new(); order],
            pairs: FxHashSet::default(),
        }
    }

    /// Returns whether the pair was newly added.
    pub fn add(&mut self, u: usize, v: usize) -> bool {
        assert_ne!(u, v);
        if self.pairs.insert(pair_key(u, v)) {
            self.neighbors[u].push(v);
            self.neighbors[v].push(u);
            true
        } else {
            false
        }
    }

    pub fn remove(&mut self, u: usize, v: usize) -> bool {
        if self.pairs.remove(&pair_key(u, v)) {
            self.neighbors[u].retain(|x| *x != v);
            self.neighbors[v].retain(|x| *x != u);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        if self.pairs.is_empty() {
            return;
        }
        for (u, v) in self.pairs.drain() {
            self.neighbors[u].clear();
            self.neighbors[v].clear();
        }
    }

    #[inline]
    pub fn contains(&self, u: usize, v: usize) -> bool {
        self.pairs.contains(&pair_key(u, v))
    }

    /// Fill neighbors of `v`, in insertion order.
    #[inline]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        self.neighbors[v].as_slice()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pairs.iter().copied()
    }

    /// All pairs `(u, v)` with `u < v`, sorted.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges: Vec<_> = self.iter().collect();
        edges.sort_unstable();
        edges
    }

    /// Adds every missing pair of `vertices` so that it becomes a clique of the
    /// base graph plus overlay.
    pub fn saturate<G: BaseGraph>(&mut self, graph: &G, vertices: &[usize]) {
        for (i, v) in vertices.iter().copied().enumerate() {
            for u in vertices.iter().copied().skip(i + 1) {
                if !graph.has_edge(u, v) {
                    self.add(u, v);
                }
            }
        }
    }

    /// Tests adjacency in the base graph extended by this overlay.
    #[inline]
    pub fn has_edge<G: BaseGraph>(&self, graph: &G, u: usize, v: usize) -> bool {
        graph.has_edge(u, v) || self.contains(u, v)
    }

    pub fn is_clique<G: BaseGraph>(&self, graph: &G, vertices: &[usize]) -> bool {
        for (i, v) in vertices.iter().copied().enumerate() {
            for u in vertices.iter().copied().skip(i + 1) {
                if !self.has_edge(graph, u, v) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::generators::cycle;
    use crate::graph::FillEdges;

    #[test]
    fn add_and_remove() {
        let mut fill = FillEdges::new(4);
        assert!(fill.add(0, 2));
        assert!(!fill.add(2, 0));
        assert!(fill.contains(2, 0));
        assert_eq!(fill.neighbors(2), &[0]);
        assert_eq!(fill.len(), 1);
        assert!(fill.remove(0, 2));
        assert!(fill.is_empty());
        assert!(fill.neighbors(0).is_empty());
    }

    #[test]
    fn saturate_cycle() {
        let graph = cycle(5);
        let mut fill = FillEdges::new(5);
        assert!(!fill.is_clique(&graph, &[0, 1, 2]));
        fill.saturate(&graph, &[0, 1, 2]);
        assert_eq!(fill.edges(), vec![(0, 2)]);
        assert!(fill.is_clique(&graph, &[0, 1, 2]));
    }
}
