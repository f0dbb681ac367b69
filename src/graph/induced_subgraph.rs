use crate::graph::adjacency::{pair_key, Graph};
use crate::graph::base_graph::BaseGraph;
use fxhash::FxHashMap;

/// Subgraph induced by a sorted vertex subset of a parent graph, with vertices
/// renumbered to `0..k` and a map back to the parent ids.
#[derive(Clone, Debug)]
pub struct InducedSubgraph {
    graph: Graph,
    to_parent: Vec<usize>,
}

impl InducedSubgraph {
    pub fn new<G: BaseGraph>(parent: &G, vertices: &[usize]) -> Self {
        debug_assert!(vertices.windows(2).all(|w| w[0] < w[1]));
        let mut from_parent: FxHashMap<usize, usize> =
            FxHashMap::with_capacity_and_hasher(vertices.len(), Default::default());
        for (idx, v) in vertices.iter().enumerate() {
            from_parent.insert(*v, idx);
        }

        let mut neighbors = Vec::with_capacity(vertices.len());
        let mut fill_costs = FxHashMap::default();
        for (idx, v) in vertices.iter().copied().enumerate() {
            let nb: Vec<usize> = parent
                .neighborhood(v)
                .iter()
                .filter_map(|u| from_parent.get(u).copied())
                .collect();
            neighbors.push(nb);
            for (jdx, u) in vertices.iter().copied().enumerate().skip(idx + 1) {
                let cost = parent.fill_cost(v, u);
                if cost != 1 && !parent.has_edge(v, u) {
                    fill_costs.insert(pair_key(idx, jdx), cost);
                }
            }
        }

        Self {
            graph: Graph::from_parts(neighbors, None, fill_costs),
            to_parent: Vec::from(vertices),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    #[inline]
    pub fn to_parent(&self, v: usize) -> usize {
        self.to_parent[v]
    }

    /// Sorted parent ids of the vertices of this subgraph.
    pub fn parent_vertices(&self) -> &[usize] {
        self.to_parent.as_slice()
    }

    pub fn map_to_parent(&self, vertices: &[usize]) -> Vec<usize> {
        vertices.iter().map(|v| self.to_parent[*v]).collect()
    }
}

impl BaseGraph for InducedSubgraph {
    fn order(&self) -> usize {
        self.graph.order()
    }

    fn size(&self) -> usize {
        self.graph.size()
    }

    fn neighborhood(&self, u: usize) -> &[usize] {
        self.graph.neighborhood(u)
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.graph.has_edge(u, v)
    }

    fn fill_cost(&self, u: usize, v: usize) -> u64 {
        self.graph.fill_cost(u, v)
    }
}
