use crate::datastructures::BitSet;
use crate::graph::base_graph::BaseGraph;
use crate::graph::error::GraphError;
use fxhash::FxHashMap;

/// Immutable simple undirected graph on `0..n`.
///
/// Neighborhoods are kept as sorted lists for iteration and as bit rows for
/// constant time edge tests.
#[derive(Clone, Debug)]
pub struct Graph {
    neighbors: Vec<Vec<usize>>,
    matrix: Vec<BitSet>,
    size: usize,
    names: Option<Vec<String>>,
    fill_costs: FxHashMap<(usize, usize), u64>,
}

#[inline]
pub(crate) fn pair_key(u: usize, v: usize) -> (usize, usize) {
    if u < v {
        (u, v)
    } else {
        (v, u)
    }
}

impl Graph {
    pub(crate) fn from_parts(
        mut neighbors: Vec<Vec<usize>>,
        names: Option<Vec<String>>,
        fill_costs: FxHashMap<(usize, usize), u64>,
    ) -> Self {
        let n = neighbors.len();
        let mut matrix = vec![BitSet::new(n); n];
        let mut size = 0;
        for (u, nb) in neighbors.iter_mut().enumerate() {
            nb.sort_unstable();
            nb.dedup();
            for v in nb.iter() {
                matrix[u].set_bit(*v);
            }
            size += nb.len();
        }
        Self {
            neighbors,
            matrix,
            size: size / 2,
            names,
            fill_costs,
        }
    }

    /// Edgeless graph on `n` vertices.
    pub fn empty(n: usize) -> Self {
        Self::from_parts(vec![Vec::new(); n], None, FxHashMap::default())
    }

    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut neighbors = vec![Vec::new(); n];
        for (u, v) in edges.iter().copied() {
            if u >= n {
                return Err(GraphError::VertexOutOfRange(u, n));
            }
            if v >= n {
                return Err(GraphError::VertexOutOfRange(v, n));
            }
            if u == v {
                return Err(GraphError::SelfLoop(u));
            }
            neighbors[u].push(v);
            neighbors[v].push(u);
        }
        Ok(Self::from_parts(neighbors, None, FxHashMap::default()))
    }

    /// Builds a graph from per-vertex adjacency lists, rejecting lists that are
    /// not symmetric.
    pub fn from_adjacency(lists: Vec<Vec<usize>>) -> Result<Self, GraphError> {
        let n = lists.len();
        let mut matrix = vec![BitSet::new(n); n];
        for (u, nb) in lists.iter().enumerate() {
            for v in nb.iter().copied() {
                if v >= n {
                    return Err(GraphError::VertexOutOfRange(v, n));
                }
                if v == u {
                    return Err(GraphError::SelfLoop(u));
                }
                matrix[u].set_bit(v);
            }
        }
        for (u, nb) in lists.iter().enumerate() {
            if let Some(v) = nb.iter().copied().find(|v| !matrix[*v][u]) {
                return Err(GraphError::Asymmetric(u, v));
            }
        }
        Ok(Self::from_parts(lists, None, FxHashMap::default()))
    }

    pub fn with_names(mut self, names: Vec<String>) -> Self {
        assert_eq!(names.len(), self.neighbors.len());
        self.names = Some(names);
        self
    }

    pub fn name(&self, v: usize) -> String {
        match &self.names {
            Some(names) => names[v].clone(),
            None => v.to_string(),
        }
    }

    pub fn names(&self) -> Option<&[String]> {
        self.names.as_deref()
    }

    pub fn has_fill_costs(&self) -> bool {
        !self.fill_costs.is_empty()
    }

    /// All edges `(u, v)` with `u < v`, in lexicographic order.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(self.size);
        for (u, nb) in self.neighbors.iter().enumerate() {
            edges.extend(nb.iter().copied().filter(|v| u < *v).map(|v| (u, v)));
        }
        edges
    }
}

impl BaseGraph for Graph {
    fn order(&self) -> usize {
        self.neighbors.len()
    }

    fn size(&self) -> usize {
        self.size
    }

    fn neighborhood(&self, u: usize) -> &[usize] {
        self.neighbors[u].as_slice()
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.matrix[u][v]
    }

    fn fill_cost(&self, u: usize, v: usize) -> u64 {
        self.fill_costs
            .get(&pair_key(u, v))
            .copied()
            .unwrap_or(1)
    }
}
