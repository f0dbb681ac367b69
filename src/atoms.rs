use crate::datastructures::BitSet;
use crate::graph::{BaseGraph, InducedSubgraph};
use crate::separator::SeparatorBlocks;
use crate::triangulation::MinimalTriangulation;
#[cfg(feature = "log")]
use log::info;

/// Decomposition of a graph by its clique minimal separators.
///
/// Atoms overlap exactly on the separators, and their union is the vertex set
/// of the graph.
#[derive(Clone, Debug)]
pub struct Atoms {
    atoms: Vec<InducedSubgraph>,
    clique_separators: Vec<Vec<usize>>,
}

impl Atoms {
    pub fn new<G: BaseGraph>(graph: &G) -> Self {
        let triangulation = MinimalTriangulation::new(graph);
        Self::with_triangulation(graph, &triangulation)
    }

    /// Splits off one atom per generator whose higher neighborhood is a clique
    /// of `graph` itself. Cliques of the filled graph do not count.
    pub fn with_triangulation<G: BaseGraph>(
        graph: &G,
        triangulation: &MinimalTriangulation,
    ) -> Self {
        let n = graph.order();
        let mut remaining = BitSet::new(n);
        for v in 0..n {
            remaining.set_bit(v);
        }
        let mut deleted_list: Vec<usize> = Vec::new();
        let mut engine = SeparatorBlocks::new(graph);
        let mut vertex_sets = Vec::new();
        let mut clique_separators = Vec::new();

        for i in triangulation.generators().iter().copied() {
            let v = triangulation.order()[i];
            if !remaining.at(v) {
                continue;
            }
            let separator: Vec<usize> = triangulation
                .higher_neighbors(graph, v)
                .into_iter()
                .filter(|u| remaining[*u])
                .collect();
            if !graph.is_clique(&separator) {
                continue;
            }

            let mut removed = separator.clone();
            removed.extend_from_slice(&deleted_list);
            engine.separate(&removed);
            let component = match engine.component_of(v) {
                Some(c) => engine.blocks()[c].component.clone(),
                None => unreachable!("generator {} lies outside its own separator", v),
            };

            let mut atom = component.clone();
            atom.extend_from_slice(&separator);
            atom.sort_unstable();
            for u in component {
                remaining.unset_bit(u);
                deleted_list.push(u);
            }
            vertex_sets.push(atom);
            clique_separators.push(separator);
        }

        if !remaining.empty() {
            vertex_sets.push(remaining.to_vec());
        }

        #[cfg(feature = "log")]
        info!(
            "decomposed graph with {} vertices into {} atoms",
            n,
            vertex_sets.len()
        );

        Self {
            atoms: vertex_sets
                .iter()
                .map(|vertices| InducedSubgraph::new(graph, vertices))
                .collect(),
            clique_separators,
        }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InducedSubgraph> {
        self.atoms.iter()
    }

    /// Sorted parent vertex sets of the atoms.
    pub fn vertex_sets(&self) -> Vec<Vec<usize>> {
        self.atoms
            .iter()
            .map(|atom| atom.parent_vertices().to_vec())
            .collect()
    }

    /// The clique minimal separators used for the splits, in discovery order.
    pub fn clique_separators(&self) -> &[Vec<usize>] {
        &self.clique_separators
    }

    pub fn into_atoms(self) -> Vec<InducedSubgraph> {
        self.atoms
    }
}

impl<'a> IntoIterator for &'a Atoms {
    type Item = &'a InducedSubgraph;
    type IntoIter = std::slice::Iter<'a, InducedSubgraph>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
