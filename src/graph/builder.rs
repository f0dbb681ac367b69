use crate::graph::adjacency::{pair_key, Graph};
use crate::graph::error::GraphError;
use fxhash::FxHashMap;

/// Mutable staging area for a [`Graph`]. Graphs are frozen once built; every
/// algorithm in the crate works on the immutable form.
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    neighbors: Vec<Vec<usize>>,
    names: Option<Vec<String>>,
    fill_costs: FxHashMap<(usize, usize), u64>,
}

impl GraphBuilder {
    pub fn new(n: usize) -> Self {
        Self {
            neighbors: vec![Vec::new(); n],
            names: None,
            fill_costs: FxHashMap::default(),
        }
    }

    pub fn order(&self) -> usize {
        self.neighbors.len()
    }

    fn check(&self, v: usize) -> Result<(), GraphError> {
        if v >= self.neighbors.len() {
            Err(GraphError::VertexOutOfRange(v, self.neighbors.len()))
        } else {
            Ok(())
        }
    }

    pub fn add_vertex(&mut self) -> usize {
        self.neighbors.push(Vec::new());
        if let Some(names) = self.names.as_mut() {
            names.push((names.len()).to_string());
        }
        self.neighbors.len() - 1
    }

    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<&mut Self, GraphError> {
        self.check(u)?;
        self.check(v)?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        self.neighbors[u].push(v);
        self.neighbors[v].push(u);
        Ok(self)
    }

    pub fn make_clique(&mut self, vertices: &[usize]) -> Result<&mut Self, GraphError> {
        for (i, v) in vertices.iter().enumerate() {
            for u in vertices.iter().skip(i + 1) {
                self.add_edge(*u, *v)?;
            }
        }
        Ok(self)
    }

    /// Weight charged when `{u, v}` is added as a fill edge.
    pub fn set_fill_cost(&mut self, u: usize, v: usize, cost: u64) -> Result<&mut Self, GraphError> {
        self.check(u)?;
        self.check(v)?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        self.fill_costs.insert(pair_key(u, v), cost);
        Ok(self)
    }

    pub fn set_name(&mut self, v: usize, name: &str) -> Result<&mut Self, GraphError> {
        self.check(v)?;
        let n = self.neighbors.len();
        let names = self
            .names
            .get_or_insert_with(|| (0..n).map(|i| i.to_string()).collect());
        names[v] = String::from(name);
        Ok(self)
    }

    pub fn build(self) -> Graph {
        Graph::from_parts(self.neighbors, self.names, self.fill_costs)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{BaseGraph, GraphBuilder, GraphError};

    #[test]
    fn builds_weighted_named_graph() {
        let mut builder = GraphBuilder::new(3);
        builder.add_edge(0, 1).unwrap();
        builder.set_fill_cost(2, 0, 7).unwrap();
        builder.set_name(2, "c").unwrap();
        let graph = builder.build();

        assert_eq!(graph.size(), 1);
        assert_eq!(graph.fill_cost(0, 2), 7);
        assert_eq!(graph.fill_cost(1, 2), 1);
        assert_eq!(graph.name(2), "c");
        assert_eq!(graph.name(0), "0");
        assert!(graph.has_fill_costs());
    }

    #[test]
    fn rejects_self_loops() {
        let mut builder = GraphBuilder::new(2);
        assert_eq!(builder.add_edge(1, 1).unwrap_err(), GraphError::SelfLoop(1));
        assert!(builder.make_clique(&[0, 1, 2]).is_err());
    }

    #[test]
    fn add_vertex_grows_order() {
        let mut builder = GraphBuilder::new(0);
        let a = builder.add_vertex();
        let b = builder.add_vertex();
        builder.add_edge(a, b).unwrap();
        assert_eq!(builder.order(), 2);
        assert_eq!(builder.build().size(), 1);
    }
}
