use crate::graph::{BaseGraph, FillEdges, InducedSubgraph};
use crate::minimal_separators::MinimalSeparators;
use crate::separator::SeparatorBlocks;
use crate::subset_trie::SubsetTrie;
#[cfg(feature = "log")]
use log::info;
use std::collections::VecDeque;

/// Reusable potential maximal clique test.
pub struct PmcChecker<'a, G: BaseGraph> {
    engine: SeparatorBlocks<'a, G>,
    fill: FillEdges,
}

impl<'a, G: BaseGraph> PmcChecker<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self {
            engine: SeparatorBlocks::new(graph),
            fill: FillEdges::new(graph.order()),
        }
    }

    /// `set` must be sorted. No block of `G - set` may be full, and saturating
    /// every block neighborhood has to turn `set` into a clique.
    pub fn is_pmc(&mut self, set: &[usize]) -> bool {
        let graph = self.engine.graph();
        self.engine.separate(set);
        if self.engine.full_blocks().next().is_some() {
            return false;
        }
        self.fill.clear();
        for block in self.engine.blocks() {
            self.fill.saturate(graph, &block.neighborhood);
        }
        self.fill.is_clique(graph, set)
    }
}

pub fn is_pmc<G: BaseGraph>(graph: &G, set: &[usize]) -> bool {
    PmcChecker::new(graph).is_pmc(set)
}

/// All potential maximal cliques of `graph`.
///
/// Each connected component is grown one vertex at a time in breadth-first
/// order, so every intermediate graph is connected. The family of `G + a` is
/// derived from the family of `G` and the minimal separators of both graphs.
pub fn potential_maximal_cliques<G: BaseGraph>(graph: &G) -> SubsetTrie {
    let mut result = SubsetTrie::new(graph.order());
    for component in graph.connected_components() {
        let order = breadth_first_order(graph, &component);
        for pmc in one_more_vertex(graph, &order) {
            result.insert(&pmc);
        }
    }

    #[cfg(feature = "log")]
    info!(
        "found {} potential maximal cliques in graph with {} vertices",
        result.len(),
        graph.order()
    );
    result
}

fn breadth_first_order<G: BaseGraph>(graph: &G, component: &[usize]) -> Vec<usize> {
    let mut order = Vec::with_capacity(component.len());
    let mut visited = vec![false; graph.order()];
    let mut queue = VecDeque::new();
    if let Some(start) = component.first().copied() {
        visited[start] = true;
        queue.push_back(start);
    }
    while let Some(v) = queue.pop_front() {
        order.push(v);
        for u in graph.neighborhood(v).iter().copied() {
            if !visited[u] {
                visited[u] = true;
                queue.push_back(u);
            }
        }
    }
    order
}

fn with_vertex(set: &[usize], v: usize) -> Vec<usize> {
    let mut result = Vec::with_capacity(set.len() + 1);
    result.extend_from_slice(set);
    if let Err(pos) = result.binary_search(&v) {
        result.insert(pos, v);
    }
    result
}

fn intersection(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut result = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] < b[j] {
            i += 1;
        } else if a[i] > b[j] {
            j += 1;
        } else {
            result.push(a[i]);
            i += 1;
            j += 1;
        }
    }
    result
}

/// Candidate sets of one step, each tested once. The trie payload records the
/// outcome of the test.
struct Candidates<'a> {
    checker: PmcChecker<'a, InducedSubgraph>,
    seen: SubsetTrie,
    accepted: Vec<Vec<usize>>,
}

impl<'a> Candidates<'a> {
    fn new(graph: &'a InducedSubgraph) -> Self {
        Self {
            checker: PmcChecker::new(graph),
            seen: SubsetTrie::new(graph.order()),
            accepted: Vec::new(),
        }
    }

    fn offer(&mut self, candidate: Vec<usize>) -> bool {
        if let Some(outcome) = self.seen.score(&candidate) {
            return outcome == 1;
        }
        let accepted = self.checker.is_pmc(&candidate);
        self.seen.insert_with_score(&candidate, accepted as u64);
        if accepted {
            self.accepted.push(candidate);
        }
        accepted
    }
}

/// Potential maximal cliques of the connected graph induced by `order`, in
/// parent ids. Every prefix of `order` has to induce a connected graph.
fn one_more_vertex<G: BaseGraph>(graph: &G, order: &[usize]) -> Vec<Vec<usize>> {
    let first = match order.first() {
        Some(v) => *v,
        None => return Vec::new(),
    };
    let mut pmcs = vec![vec![first]];
    let mut separators: Vec<Vec<usize>> = Vec::new();
    let mut prefix = vec![first];

    for a in order.iter().copied().skip(1) {
        let a_local = match prefix.binary_search(&a) {
            Ok(pos) => pos,
            Err(pos) => {
                prefix.insert(pos, a);
                pos
            }
        };
        let sub = InducedSubgraph::new(graph, &prefix);
        let to_local = |set: &[usize]| -> Vec<usize> {
            set.iter()
                .filter_map(|v| prefix.binary_search(v).ok())
                .collect()
        };

        let mut candidates = Candidates::new(&sub);
        for p in pmcs.iter().map(|p| to_local(&p[..])) {
            candidates.offer(with_vertex(&p, a_local));
            candidates.offer(p);
        }

        let previous: Vec<Vec<usize>> = separators.iter().map(|s| to_local(&s[..])).collect();
        let current = MinimalSeparators::all(&sub).to_vec();
        let mut engine = SeparatorBlocks::new(&sub);
        for s in current.iter() {
            candidates.offer(with_vertex(s, a_local));
            if s.binary_search(&a_local).is_ok() {
                continue;
            }
            let components: Vec<Vec<usize>> = engine
                .separate(s)
                .iter()
                .map(|block| block.component.clone())
                .collect();
            for t in previous.iter().chain(current.iter()) {
                for c in components.iter() {
                    let extra = intersection(t, c);
                    if extra.is_empty() {
                        continue;
                    }
                    let mut candidate = s.clone();
                    candidate.extend(extra);
                    candidate.sort_unstable();
                    candidates.offer(candidate);
                }
            }
        }

        pmcs = candidates
            .accepted
            .iter()
            .map(|p| sub.map_to_parent(p))
            .collect();
        separators = current.iter().map(|s| sub.map_to_parent(s)).collect();
    }
    pmcs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::generators::{complete, cycle, disjoint_union, grid, path};
    use crate::graph::Graph;

    fn exhaustive<G: BaseGraph>(graph: &G) -> Vec<Vec<usize>> {
        let n = graph.order();
        let mut checker = PmcChecker::new(graph);
        let mut sets: Vec<Vec<usize>> = (1u32..(1 << n))
            .map(|mask| (0..n).filter(|v| mask & (1 << v) != 0).collect::<Vec<_>>())
            .filter(|set| checker.is_pmc(set))
            .collect();
        sets.sort();
        sets
    }

    #[test]
    fn single_tests() {
        let graph = cycle(5);
        assert!(is_pmc(&graph, &[0, 1, 3]));
        assert!(is_pmc(&graph, &[0, 2, 4]));
        assert!(!is_pmc(&graph, &[0, 2]));
        assert!(!is_pmc(&graph, &[0, 1, 2, 3]));

        let graph = complete(4);
        assert!(is_pmc(&graph, &[0, 1, 2, 3]));
        assert!(!is_pmc(&graph, &[0, 1, 2]));
    }

    #[test]
    fn cycle_pmcs_are_all_triples() {
        assert_eq!(potential_maximal_cliques(&cycle(5)).len(), 10);
        assert_eq!(potential_maximal_cliques(&cycle(4)).len(), 4);
    }

    #[test]
    fn path_pmcs_are_edges() {
        let pmcs = potential_maximal_cliques(&path(4));
        assert_eq!(pmcs.to_vec(), vec![vec![0, 1], vec![1, 2], vec![2, 3]]);
    }

    #[test]
    fn disconnected_graph() {
        let graph = disjoint_union(&complete(3), &path(2));
        let pmcs = potential_maximal_cliques(&graph);
        assert_eq!(pmcs.to_vec(), vec![vec![0, 1, 2], vec![3, 4]]);
    }

    #[test]
    fn generator_matches_exhaustive_test() {
        let graphs = vec![
            grid(2, 3),
            grid(3, 3),
            cycle(6),
            Graph::from_edges(
                7,
                &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 4), (4, 5), (5, 6), (6, 2), (1, 5)],
            )
            .unwrap(),
        ];
        for graph in graphs.iter() {
            assert_eq!(potential_maximal_cliques(graph).to_vec(), exhaustive(graph));
        }
    }
}
