use crate::chordal::is_chordal;
use crate::graph::{BaseGraph, FillEdges, Graph};
#[cfg(feature = "log")]
use log::debug;

/// Minimal triangulation computed by MCS-M+.
///
/// `order[i]` is the vertex eliminated at position `i`, so position `0` is
/// eliminated first and the first vertex picked by the search sits at position
/// `n - 1`. `generators` holds, ascending, the positions at which the search
/// label did not increase; these are the candidates for clique minimal
/// separators.
#[derive(Clone, Debug)]
pub struct MinimalTriangulation {
    order: Vec<usize>,
    position: Vec<usize>,
    fill: FillEdges,
    generators: Vec<usize>,
}

impl MinimalTriangulation {
    pub fn new<G: BaseGraph>(graph: &G) -> Self {
        let n = graph.order();
        let mut order = vec![0; n];
        let mut position = vec![0; n];
        let mut fill = FillEdges::new(n);
        let mut generators = Vec::new();

        let mut labels = vec![0usize; n];
        let mut deleted = vec![false; n];
        let mut reached = vec![false; n];
        let mut touched: Vec<usize> = Vec::with_capacity(n);
        let mut reach: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut y: Vec<usize> = Vec::with_capacity(n);
        let mut previous: Option<usize> = None;

        for i in (0..n).rev() {
            let mut x = None;
            for v in (0..n).filter(|v| !deleted[*v]) {
                if x.map_or(true, |x: usize| labels[v] > labels[x]) {
                    x = Some(v);
                }
            }
            let x = match x {
                Some(x) => x,
                None => break,
            };
            if previous.map_or(false, |s| labels[x] <= s) {
                generators.push(i);
            }
            previous = Some(labels[x]);
            deleted[x] = true;

            for v in touched.drain(..) {
                reached[v] = false;
            }
            y.clear();
            reached[x] = true;
            touched.push(x);
            for u in graph.neighborhood(x).iter().copied().filter(|u| !deleted[*u]) {
                reached[u] = true;
                touched.push(u);
                y.push(u);
                reach[labels[u]].push(u);
            }

            for j in 0..n {
                while let Some(r) = reach[j].pop() {
                    for z in graph.neighborhood(r).iter().copied() {
                        if deleted[z] || reached[z] {
                            continue;
                        }
                        reached[z] = true;
                        touched.push(z);
                        if labels[z] > j {
                            y.push(z);
                            reach[labels[z]].push(z);
                        } else {
                            reach[j].push(z);
                        }
                    }
                }
            }

            for u in y.iter().copied() {
                labels[u] += 1;
                if !graph.has_edge(x, u) {
                    fill.add(x, u);
                }
            }
            order[i] = x;
            position[x] = i;
        }
        generators.reverse();

        #[cfg(feature = "log")]
        debug!(
            "mcs-m+ added {} fill edges and found {} generators",
            fill.len(),
            generators.len()
        );

        Self {
            order,
            position,
            fill,
            generators,
        }
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn position(&self, v: usize) -> usize {
        self.position[v]
    }

    pub fn fill(&self) -> &FillEdges {
        &self.fill
    }

    pub fn generators(&self) -> &[usize] {
        &self.generators
    }

    /// Neighbors of `v` in `G + F` eliminated after `v`, sorted.
    pub fn higher_neighbors<G: BaseGraph>(&self, graph: &G, v: usize) -> Vec<usize> {
        let mut madj: Vec<usize> = graph
            .neighborhood(v)
            .iter()
            .chain(self.fill.neighbors(v).iter())
            .copied()
            .filter(|u| self.position[*u] > self.position[v])
            .collect();
        madj.sort_unstable();
        madj
    }

    /// Largest clique of the triangulation minus one.
    pub fn width<G: BaseGraph>(&self, graph: &G) -> usize {
        graph
            .vertices()
            .map(|v| self.higher_neighbors(graph, v).len())
            .max()
            .unwrap_or(0)
    }

    /// Total cost of the fill edges.
    pub fn fill_in_cost<G: BaseGraph>(&self, graph: &G) -> u64 {
        self.fill.iter().map(|(u, v)| graph.fill_cost(u, v)).sum()
    }

    pub fn triangulated_graph<G: BaseGraph>(&self, graph: &G) -> Graph {
        let neighbors = graph
            .vertices()
            .map(|v| {
                let mut nb = graph.neighborhood(v).to_vec();
                nb.extend_from_slice(self.fill.neighbors(v));
                nb
            })
            .collect();
        Graph::from_parts(neighbors, None, Default::default())
    }

    /// `G + F` is chordal and no single fill edge can be dropped without
    /// losing chordality.
    pub fn is_minimal_triangulation<G: BaseGraph>(&self, graph: &G) -> bool {
        if !is_chordal(graph, Some(&self.fill)) {
            return false;
        }
        let mut fill = self.fill.clone();
        for (u, v) in self.fill.edges() {
            fill.remove(u, v);
            let chordal = is_chordal(graph, Some(&fill));
            fill.add(u, v);
            if chordal {
                return false;
            }
        }
        true
    }
}
