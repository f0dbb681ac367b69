use crate::graph::BaseGraph;
use crate::separator::SeparatorBlocks;
use crate::subset_trie::SubsetTrie;
#[cfg(feature = "log")]
use log::info;

/// Generate-and-refine enumeration of minimal separators.
///
/// Every candidate is the neighborhood of a component of `G - N[A]` for some
/// connected set `A`, so each inserted set is a minimal separator. New sets are
/// pushed on a work stack and refined by `S ∪ N(x)` for every `x` in `S`.
pub struct MinimalSeparators<'a, G: BaseGraph> {
    engine: SeparatorBlocks<'a, G>,
    separators: SubsetTrie,
    stack: Vec<Vec<usize>>,
    buffer: Vec<usize>,
}

impl<'a, G: BaseGraph> MinimalSeparators<'a, G> {
    fn new(graph: &'a G) -> Self {
        Self {
            engine: SeparatorBlocks::new(graph),
            separators: SubsetTrie::new(graph.order()),
            stack: Vec::new(),
            buffer: Vec::with_capacity(graph.order()),
        }
    }

    fn push(&mut self, separator: &[usize]) {
        if self.separators.insert(separator) {
            self.stack.push(separator.to_vec());
        }
    }

    fn extended(&mut self, separator: &[usize], x: usize) -> Vec<usize> {
        let mut buffer = std::mem::take(&mut self.buffer);
        buffer.clear();
        buffer.extend_from_slice(separator);
        buffer.extend_from_slice(self.engine.graph().neighborhood(x));
        buffer
    }

    /// All minimal separators of `graph`. A disconnected graph additionally
    /// has the empty separator.
    pub fn all(graph: &'a G) -> SubsetTrie {
        let mut this = Self::new(graph);
        for v in graph.vertices() {
            let candidates: Vec<Vec<usize>> = this
                .engine
                .separate_closed_neighborhood(v)
                .iter()
                .map(|block| block.neighborhood.clone())
                .collect();
            for separator in candidates {
                this.push(&separator);
            }
        }

        while let Some(separator) = this.stack.pop() {
            for x in separator.iter().copied() {
                let extended = this.extended(&separator, x);
                let candidates: Vec<Vec<usize>> = this
                    .engine
                    .separate(&extended)
                    .iter()
                    .map(|block| block.neighborhood.clone())
                    .collect();
                this.buffer = extended;
                for candidate in candidates {
                    this.push(&candidate);
                }
            }
        }

        #[cfg(feature = "log")]
        info!(
            "found {} minimal separators in graph with {} vertices",
            this.separators.len(),
            graph.order()
        );
        this.separators
    }

    /// All minimal separators that put `a` and `b` into different full
    /// components. Empty if `a` and `b` are equal or adjacent.
    pub fn between(graph: &'a G, a: usize, b: usize) -> SubsetTrie {
        let mut this = Self::new(graph);
        if a == b || graph.has_edge(a, b) {
            return this.separators;
        }
        let seed = {
            this.engine.separate_closed_neighborhood(a);
            this.engine
                .component_of(b)
                .map(|c| this.engine.blocks()[c].neighborhood.clone())
        };
        if let Some(separator) = seed {
            this.push(&separator);
        }

        while let Some(separator) = this.stack.pop() {
            for x in separator.iter().copied() {
                let extended = this.extended(&separator, x);
                this.engine.separate(&extended);
                this.buffer = extended;
                let candidate = match this.engine.component_of(b) {
                    Some(c) => this.engine.blocks()[c].neighborhood.clone(),
                    None => continue,
                };
                debug_assert!(candidate.binary_search(&a).is_err());
                this.push(&candidate);
            }
        }
        this.separators
    }
}

/// Whether `G - separator` has at least two full components.
pub fn is_minimal_separator<G: BaseGraph>(graph: &G, separator: &[usize]) -> bool {
    let mut engine = SeparatorBlocks::new(graph);
    engine.separate(separator);
    engine.full_blocks().take(2).count() == 2
}

/// Minimal separators that do not strictly contain another stored separator.
pub fn inclusion_minimal(separators: &SubsetTrie) -> SubsetTrie {
    let mut result = SubsetTrie::new(separators.universe());
    for separator in separators.iter() {
        if !separators.contains_proper_subset(&separator) {
            result.insert(&separator);
        }
    }
    result
}
