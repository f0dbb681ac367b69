use crate::graph::BaseGraph;

/// Objective minimized over the minimal triangulations of a graph.
///
/// Clique-type parameters score a triangulation by its worst bag and aggregate
/// blocks with `max`. Fill-type parameters count fill edges and aggregate with
/// `+`.
pub trait Parameter {
    const NAME: &'static str;

    /// Score of a single vertex set.
    fn g<G: BaseGraph>(graph: &G, vertices: &[usize]) -> u64;

    /// Score of a graph that is already a clique.
    fn clique_score<G: BaseGraph>(graph: &G) -> u64 {
        let vertices: Vec<usize> = graph.vertices().collect();
        Self::g(graph, &vertices)
    }

    /// Starting value when `pmc` realizes a block whose separator is
    /// `separator`.
    fn initial_pmcr_score<G: BaseGraph>(graph: &G, pmc: &[usize], separator: &[usize]) -> u64;

    fn account_for_block_score(acc: u64, block_score: u64) -> u64;

    /// Score of the triangulations that saturate `separator`, given the scores
    /// of all blocks of `G - separator`.
    fn msr_score<G: BaseGraph>(graph: &G, separator: &[usize], block_scores: &[u64]) -> u64;
}

/// Clique-type: largest bag minus one.
#[derive(Clone, Copy, Debug, Default)]
pub struct Treewidth;

/// Fill-type: total cost of the added edges, unit unless the graph carries
/// fill costs.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinimumFill;

impl Parameter for Treewidth {
    const NAME: &'static str = "treewidth";

    fn g<G: BaseGraph>(_: &G, vertices: &[usize]) -> u64 {
        vertices.len().saturating_sub(1) as u64
    }

    fn initial_pmcr_score<G: BaseGraph>(graph: &G, pmc: &[usize], _: &[usize]) -> u64 {
        Self::g(graph, pmc)
    }

    fn account_for_block_score(acc: u64, block_score: u64) -> u64 {
        acc.max(block_score)
    }

    fn msr_score<G: BaseGraph>(_: &G, _: &[usize], block_scores: &[u64]) -> u64 {
        block_scores.iter().copied().max().unwrap_or(0)
    }
}

impl Parameter for MinimumFill {
    const NAME: &'static str = "minimum fill-in";

    fn g<G: BaseGraph>(graph: &G, vertices: &[usize]) -> u64 {
        graph.fill_in_cost(vertices)
    }

    fn initial_pmcr_score<G: BaseGraph>(graph: &G, pmc: &[usize], separator: &[usize]) -> u64 {
        Self::g(graph, pmc).saturating_sub(Self::g(graph, separator))
    }

    fn account_for_block_score(acc: u64, block_score: u64) -> u64 {
        acc + block_score
    }

    fn msr_score<G: BaseGraph>(graph: &G, separator: &[usize], block_scores: &[u64]) -> u64 {
        block_scores
            .iter()
            .fold(Self::g(graph, separator), |acc, score| acc + score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::generators::{complete, cycle};
    use crate::graph::GraphBuilder;

    #[test]
    fn treewidth_scores() {
        let graph = cycle(5);
        assert_eq!(Treewidth::g(&graph, &[0, 1, 2]), 2);
        assert_eq!(Treewidth::g(&graph, &[]), 0);
        assert_eq!(Treewidth::clique_score(&complete(4)), 3);
        assert_eq!(Treewidth::initial_pmcr_score(&graph, &[0, 1, 3], &[1, 3]), 2);
        assert_eq!(Treewidth::account_for_block_score(2, 5), 5);
        assert_eq!(Treewidth::msr_score(&graph, &[0, 2], &[2, 3]), 3);
    }

    #[test]
    fn fill_scores() {
        let graph = cycle(5);
        assert_eq!(MinimumFill::g(&graph, &[0, 1, 2]), 1);
        assert_eq!(MinimumFill::clique_score(&complete(4)), 0);
        assert_eq!(MinimumFill::initial_pmcr_score(&graph, &[0, 2, 3], &[0, 2]), 1);
        assert_eq!(MinimumFill::account_for_block_score(2, 5), 7);
        assert_eq!(MinimumFill::msr_score(&graph, &[0, 2], &[0, 1]), 2);
    }

    #[test]
    fn weighted_fill() {
        let mut builder = GraphBuilder::new(3);
        builder.add_edge(0, 1).unwrap().add_edge(1, 2).unwrap();
        builder.set_fill_cost(0, 2, 4).unwrap();
        let graph = builder.build();
        assert_eq!(MinimumFill::g(&graph, &[0, 1, 2]), 4);
    }
}
