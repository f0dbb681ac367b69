use crate::datastructures::BitSet;
use crate::graph::BaseGraph;
use crate::minimal_separators::{inclusion_minimal, MinimalSeparators};
use crate::parameter::Parameter;
use crate::pmc::potential_maximal_cliques;
use crate::separator::SeparatorBlocks;
use crate::subset_trie::SubsetTrie;
#[cfg(feature = "log")]
use log::{debug, info};
use std::marker::PhantomData;

/// Full block `(S, C)` of a minimal separator together with the potential
/// maximal cliques `K` with `S ⊂ K ⊆ S ∪ C`.
#[derive(Clone, Debug)]
struct GoodTriple {
    separator: Vec<usize>,
    component: Vec<usize>,
    pmcs: Vec<usize>,
}

/// Exact minimization of a [`Parameter`] over all minimal triangulations of a
/// connected graph, by dynamic programming over full blocks.
pub struct BTScheme<'a, G: BaseGraph, P: Parameter> {
    graph: &'a G,
    engine: SeparatorBlocks<'a, G>,
    separators: SubsetTrie,
    pmcs: Vec<Vec<usize>>,
    triples: Vec<GoodTriple>,
    triple_index: SubsetTrie,
    scores: SubsetTrie,
    _parameter: PhantomData<P>,
}

impl<'a, G: BaseGraph, P: Parameter> BTScheme<'a, G, P> {
    pub fn with_graph(graph: &'a G) -> Self {
        let n = graph.order();
        Self {
            graph,
            engine: SeparatorBlocks::new(graph),
            separators: SubsetTrie::new(n),
            pmcs: Vec::new(),
            triples: Vec::new(),
            triple_index: SubsetTrie::new(n),
            scores: SubsetTrie::new(n),
            _parameter: PhantomData,
        }
    }

    pub fn compute(mut self) -> u64 {
        let graph = self.graph;
        assert!(
            graph.is_connected(),
            "the dynamic program needs a connected graph"
        );
        if graph.is_complete() {
            return P::clique_score(graph);
        }
        self.score_blocks();
        self.minimum_over_separators()
    }

    fn score_blocks(&mut self) {
        let graph = self.graph;
        self.separators = MinimalSeparators::all(graph);
        self.pmcs = potential_maximal_cliques(graph).to_vec();
        self.register_full_blocks();
        self.attach_pmcs();

        #[cfg(feature = "log")]
        info!(
            "computing {} with {} separators, {} pmcs and {} good triples",
            P::NAME,
            self.separators.len(),
            self.pmcs.len(),
            self.triples.len()
        );

        self.score_triples();
    }

    fn register_full_blocks(&mut self) {
        let separators = self.separators.to_vec();
        for separator in separators {
            let full: Vec<Vec<usize>> = {
                self.engine.separate(&separator);
                self.engine
                    .full_blocks()
                    .map(|block| block.component.clone())
                    .collect()
            };
            for component in full {
                if self.triple_index.contains(&component) {
                    continue;
                }
                let index = self.triples.len() as u64;
                self.triple_index.insert_with_score(&component, index);
                self.triples.push(GoodTriple {
                    separator: separator.clone(),
                    component,
                    pmcs: Vec::new(),
                });
            }
        }
    }

    /// For every block `D` of `G - K` the clique `K` realizes the full block of
    /// `N(D)` on the opposite side of `D`. That component is everything except
    /// `N(D)` and the blocks of `K` whose neighborhood lies inside `N(D)`.
    fn attach_pmcs(&mut self) {
        let n = self.graph.order();
        let mut excluded = BitSet::new(n);
        for (k, pmc) in self.pmcs.iter().enumerate() {
            let blocks = self.engine.separate(pmc);
            for block in blocks.iter() {
                let boundary = BitSet::from_slice(n, &block.neighborhood);
                excluded.unset_all();
                for v in block.neighborhood.iter().copied() {
                    excluded.set_bit(v);
                }
                for other in blocks
                    .iter()
                    .filter(|other| boundary.contains_all(&other.neighborhood))
                {
                    for v in other.component.iter().copied() {
                        excluded.set_bit(v);
                    }
                }
                let opposite: Vec<usize> = (0..n).filter(|v| !excluded.at(*v)).collect();
                match self.triple_index.score(&opposite) {
                    Some(index) => self.triples[index as usize].pmcs.push(k),
                    None => panic!(
                        "potential maximal clique {:?} realizes unregistered block {:?}",
                        pmc, opposite
                    ),
                }
            }
        }
    }

    fn score_triples(&mut self) {
        let graph = self.graph;
        let mut order: Vec<usize> = (0..self.triples.len()).collect();
        order.sort_by_key(|i| self.triples[*i].component.len());

        for i in order {
            let triple = &self.triples[i];
            let mut vertices = triple.component.clone();
            vertices.extend_from_slice(&triple.separator);
            vertices.sort_unstable();

            let score = if graph.is_clique(&vertices) {
                P::g(graph, &vertices)
            } else {
                let in_component = BitSet::from_slice(graph.order(), &triple.component);
                let mut best: Option<u64> = None;
                for k in triple.pmcs.iter().copied() {
                    let pmc = &self.pmcs[k];
                    let mut score = P::initial_pmcr_score(graph, pmc, &triple.separator);
                    for block in self.engine.separate(pmc) {
                        if !in_component[block.component[0]] {
                            continue;
                        }
                        let block_score = match self.scores.score(&block.component) {
                            Some(score) => score,
                            None => panic!("block {:?} scored out of order", block.component),
                        };
                        score = P::account_for_block_score(score, block_score);
                    }
                    best = Some(best.map_or(score, |b| b.min(score)));
                }
                match best {
                    Some(score) => score,
                    None => panic!(
                        "no potential maximal clique realizes block {:?} of {:?}",
                        triple.component, triple.separator
                    ),
                }
            };

            #[cfg(feature = "log")]
            debug!(
                "block of size {} on separator {:?} scored {}",
                triple.component.len(),
                triple.separator,
                score
            );
            let component = triple.component.clone();
            self.scores.insert_with_score(&component, score);
        }
    }

    /// Inclusion-minimal separators cross no other minimal separator, so each
    /// of them is a clique of every minimal triangulation.
    fn minimum_over_separators(&mut self) -> u64 {
        let mut best: Option<u64> = None;
        for separator in inclusion_minimal(&self.separators).iter() {
            let score = self.separator_score(&separator);
            best = Some(best.map_or(score, |b| b.min(score)));
        }
        match best {
            Some(score) => score,
            None => panic!("connected non-complete graph without minimal separators"),
        }
    }

    fn separator_score(&mut self, separator: &[usize]) -> u64 {
        let mut block_scores = Vec::new();
        for block in self.engine.separate(separator) {
            match self.scores.score(&block.component) {
                Some(score) => block_scores.push(score),
                None => panic!("block {:?} was never scored", block.component),
            }
        }
        P::msr_score(self.graph, separator, &block_scores)
    }
}
