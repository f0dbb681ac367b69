//! Small graph families used by tests, benchmarks and the property suite.
use crate::graph::adjacency::Graph;
use crate::graph::base_graph::BaseGraph;
use crate::graph::builder::GraphBuilder;
use rand::Rng;

pub fn complete(n: usize) -> Graph {
    let mut neighbors = Vec::with_capacity(n);
    for u in 0..n {
        neighbors.push((0..n).filter(|v| *v != u).collect());
    }
    Graph::from_parts(neighbors, None, Default::default())
}

pub fn path(n: usize) -> Graph {
    let mut neighbors = vec![Vec::new(); n];
    for u in 1..n {
        neighbors[u - 1].push(u);
        neighbors[u].push(u - 1);
    }
    Graph::from_parts(neighbors, None, Default::default())
}

/// Cycle on `n >= 3` vertices.
pub fn cycle(n: usize) -> Graph {
    assert!(n >= 3, "a cycle needs at least three vertices");
    let mut neighbors = vec![Vec::new(); n];
    for u in 0..n {
        let v = (u + 1) % n;
        neighbors[u].push(v);
        neighbors[v].push(u);
    }
    Graph::from_parts(neighbors, None, Default::default())
}

/// `rows x cols` grid, vertex `r * cols + c`.
pub fn grid(rows: usize, cols: usize) -> Graph {
    let mut neighbors = vec![Vec::new(); rows * cols];
    for r in 0..rows {
        for c in 0..cols {
            let u = r * cols + c;
            if c + 1 < cols {
                neighbors[u].push(u + 1);
                neighbors[u + 1].push(u);
            }
            if r + 1 < rows {
                neighbors[u].push(u + cols);
                neighbors[u + cols].push(u);
            }
        }
    }
    Graph::from_parts(neighbors, None, Default::default())
}

/// `a` followed by `b`, with the vertices of `b` shifted by `a.order()`.
pub fn disjoint_union<G: BaseGraph, H: BaseGraph>(a: &G, b: &H) -> Graph {
    let offset = a.order();
    let mut neighbors: Vec<Vec<usize>> = a.vertices().map(|v| a.neighborhood(v).to_vec()).collect();
    neighbors.extend(
        b.vertices()
            .map(|v| b.neighborhood(v).iter().map(|u| u + offset).collect()),
    );
    Graph::from_parts(neighbors, None, Default::default())
}

/// Erdős–Rényi graph: every pair is an edge with probability `p`.
pub fn gnp<R: Rng>(n: usize, p: f64, rng: &mut R) -> Graph {
    let mut builder = GraphBuilder::new(n);
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.gen_bool(p) {
                // both ids are in range and distinct
                let _ = builder.add_edge(u, v);
            }
        }
    }
    builder.build()
}
