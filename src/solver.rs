use crate::atoms::Atoms;
use crate::bt_scheme::BTScheme;
use crate::graph::{BaseGraph, InducedSubgraph};
use crate::parameter::{MinimumFill, Parameter, Treewidth};
#[cfg(feature = "log")]
use log::info;
use std::marker::PhantomData;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverResult {
    pub value: u64,
    pub atoms: usize,
    pub clique_atoms: usize,
}

/// Splits a graph into independent pieces and runs the exact dynamic program on
/// every piece that is not a clique.
#[derive(Clone, Copy, Debug)]
pub struct Solver<P: Parameter> {
    use_atoms: bool,
    _parameter: PhantomData<P>,
}

impl<P: Parameter> Default for Solver<P> {
    fn default() -> Self {
        Self {
            use_atoms: true,
            _parameter: PhantomData,
        }
    }
}

impl<P: Parameter> Solver<P> {
    impl_setter!(
        /// With `false` the graph is only split into connected components.
        self,
        use_atoms,
        bool
    );

    pub fn solve<G: BaseGraph>(&self, graph: &G) -> SolverResult {
        #[cfg(feature = "log")]
        info!(
            "attempting to compute {} of graph with {} vertices",
            P::NAME,
            graph.order()
        );
        let pieces: Vec<InducedSubgraph> = if self.use_atoms {
            Atoms::new(graph).into_atoms()
        } else {
            graph
                .connected_components()
                .iter()
                .map(|c| InducedSubgraph::new(graph, c))
                .collect()
        };

        let mut result = SolverResult {
            value: 0,
            atoms: pieces.len(),
            clique_atoms: 0,
        };
        for piece in pieces.iter() {
            let score = if piece.is_complete() {
                result.clique_atoms += 1;
                P::clique_score(piece)
            } else {
                // atoms of a connected graph are connected, this only splits
                // further when the input was not
                let mut score = 0;
                for component in piece.connected_components() {
                    let sub = InducedSubgraph::new(piece, &component);
                    let part = if sub.is_complete() {
                        P::clique_score(&sub)
                    } else {
                        BTScheme::<_, P>::with_graph(&sub).compute()
                    };
                    score = P::account_for_block_score(score, part);
                }
                score
            };
            #[cfg(feature = "log")]
            info!("piece with {} vertices scored {}", piece.order(), score);
            result.value = P::account_for_block_score(result.value, score);
        }
        result
    }
}

pub fn treewidth<G: BaseGraph>(graph: &G) -> u64 {
    Solver::<Treewidth>::default().solve(graph).value
}

pub fn minimum_fill<G: BaseGraph>(graph: &G) -> u64 {
    Solver::<MinimumFill>::default().solve(graph).value
}
