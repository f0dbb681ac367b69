use crate::separator::SeparatorBlocks;
use std::fmt::Debug;
use std::ops::Range;

/// Read-only accessor contract every algorithm in this crate works against.
///
/// Vertices are always `0..order()`, neighborhoods are sorted ascending and
/// contain neither duplicates nor the vertex itself.
pub trait BaseGraph: Clone + Debug {
    fn order(&self) -> usize;
    fn size(&self) -> usize;
    fn neighborhood(&self, u: usize) -> &[usize];
    fn has_edge(&self, u: usize, v: usize) -> bool;

    /// Cost of adding the non-edge `{u, v}` during triangulation. Unit unless the
    /// graph carries explicit weights.
    fn fill_cost(&self, u: usize, v: usize) -> u64;

    fn degree(&self, u: usize) -> usize {
        self.neighborhood(u).len()
    }

    fn vertices(&self) -> Range<usize> {
        0..self.order()
    }

    fn is_clique(&self, vertices: &[usize]) -> bool {
        for (i, v) in vertices.iter().enumerate() {
            for u in vertices.iter().skip(i + 1) {
                if u != v && !self.has_edge(*u, *v) {
                    return false;
                }
            }
        }
        true
    }

    fn is_complete(&self) -> bool {
        let n = self.order();
        self.size() == n * n.saturating_sub(1) / 2
    }

    fn is_neighborhood_clique(&self, u: usize) -> bool {
        self.is_clique(self.neighborhood(u))
    }

    /// Sum of fill costs over all non-adjacent pairs of `vertices`.
    fn fill_in_cost(&self, vertices: &[usize]) -> u64 {
        let mut cost = 0u64;
        for (i, v) in vertices.iter().enumerate() {
            for u in vertices.iter().skip(i + 1) {
                if u != v && !self.has_edge(*u, *v) {
                    cost += self.fill_cost(*u, *v);
                }
            }
        }
        cost
    }

    /// Vertex sets of the connected components, each sorted, ordered by their
    /// smallest vertex.
    fn connected_components(&self) -> Vec<Vec<usize>> {
        let mut engine = SeparatorBlocks::new(self);
        engine
            .separate(&[])
            .iter()
            .map(|block| block.component.clone())
            .collect()
    }

    fn is_connected(&self) -> bool {
        self.order() == 0 || self.connected_components().len() == 1
    }
}
