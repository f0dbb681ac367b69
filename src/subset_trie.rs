/// Deduplicating family of vertex subsets over a fixed universe `0..n`.
///
/// Sets are keyed by their ascending element sequence. Nodes live in an arena
/// and every node keeps its children as a small vector sorted by key. A node
/// may carry one `u64` payload, used for memoized scores and indices.
#[derive(Clone, Debug)]
pub struct SubsetTrie {
    universe: usize,
    nodes: Vec<Node>,
    len: usize,
}

#[derive(Clone, Debug, Default)]
struct Node {
    children: Vec<(usize, usize)>,
    terminal: bool,
    score: Option<u64>,
}

impl SubsetTrie {
    pub fn new(universe: usize) -> Self {
        Self {
            universe,
            nodes: vec![Node::default()],
            len: 0,
        }
    }

    pub fn universe(&self) -> usize {
        self.universe
    }

    /// Number of distinct stored sets.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn check(&self, set: &[usize]) {
        assert!(
            set.windows(2).all(|w| w[0] < w[1]),
            "subset keys must be strictly ascending"
        );
        if let Some(last) = set.last() {
            assert!(
                *last < self.universe,
                "element {} outside of universe {}",
                last,
                self.universe
            );
        }
    }

    fn find(&self, set: &[usize]) -> Option<usize> {
        let mut node = 0;
        for key in set {
            let children = &self.nodes[node].children;
            match children.binary_search_by_key(key, |(k, _)| *k) {
                Ok(idx) => node = children[idx].1,
                Err(_) => return None,
            }
        }
        Some(node)
    }

    fn find_or_create(&mut self, set: &[usize]) -> usize {
        let mut node = 0;
        for key in set.iter().copied() {
            let next = match self.nodes[node]
                .children
                .binary_search_by_key(&key, |(k, _)| *k)
            {
                Ok(idx) => self.nodes[node].children[idx].1,
                Err(idx) => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node].children.insert(idx, (key, child));
                    child
                }
            };
            node = next;
        }
        node
    }

    /// Inserts a sorted set, returning `true` if it was not stored before.
    pub fn insert(&mut self, set: &[usize]) -> bool {
        self.check(set);
        let node = self.find_or_create(set);
        if self.nodes[node].terminal {
            false
        } else {
            self.nodes[node].terminal = true;
            self.len += 1;
            true
        }
    }

    /// Inserts a sorted set and stores `score` on it, overwriting any previous
    /// payload. Returns `true` if the set is new.
    pub fn insert_with_score(&mut self, set: &[usize], score: u64) -> bool {
        let new = self.insert(set);
        let node = self.find_or_create(set);
        self.nodes[node].score = Some(score);
        new
    }

    /// Inserts an arbitrary vertex collection after sorting and deduplicating
    /// it.
    pub fn insert_vertices(&mut self, vertices: &[usize]) -> bool {
        let mut set = vertices.to_vec();
        set.sort_unstable();
        set.dedup();
        self.insert(&set)
    }

    pub fn contains(&self, set: &[usize]) -> bool {
        self.find(set).map_or(false, |node| self.nodes[node].terminal)
    }

    /// Payload of a stored set, if it has one.
    pub fn score(&self, set: &[usize]) -> Option<u64> {
        self.find(set)
            .filter(|node| self.nodes[*node].terminal)
            .and_then(|node| self.nodes[node].score)
    }

    /// Whether some stored set is a strict subset of `set`.
    pub fn contains_proper_subset(&self, set: &[usize]) -> bool {
        let mut stack = vec![(0usize, 0usize, 0usize)];
        while let Some((node, from, depth)) = stack.pop() {
            if self.nodes[node].terminal && depth < set.len() {
                return true;
            }
            for (key, child) in self.nodes[node].children.iter().copied() {
                if let Ok(pos) = set[from..].binary_search(&key) {
                    stack.push((child, from + pos + 1, depth + 1));
                }
            }
        }
        false
    }

    /// Lazy iteration over all stored sets in lexicographic order.
    pub fn iter(&self) -> SubsetTrieIter<'_> {
        SubsetTrieIter {
            trie: self,
            stack: Vec::new(),
            path: Vec::new(),
            started: false,
        }
    }

    pub fn to_vec(&self) -> Vec<Vec<usize>> {
        self.iter().collect()
    }
}

pub struct SubsetTrieIter<'a> {
    trie: &'a SubsetTrie,
    stack: Vec<(usize, usize)>,
    path: Vec<usize>,
    started: bool,
}

impl<'a> Iterator for SubsetTrieIter<'a> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            self.stack.push((0, 0));
            if self.trie.nodes[0].terminal {
                return Some(Vec::new());
            }
        }
        loop {
            let (node, next_child) = self.stack.last_mut()?;
            let children = &self.trie.nodes[*node].children;
            if *next_child < children.len() {
                let (key, child) = children[*next_child];
                *next_child += 1;
                self.path.push(key);
                self.stack.push((child, 0));
                if self.trie.nodes[child].terminal {
                    return Some(self.path.clone());
                }
            } else {
                self.stack.pop();
                self.path.pop();
            }
        }
    }
}

impl<'a> IntoIterator for &'a SubsetTrie {
    type Item = Vec<usize>;
    type IntoIter = SubsetTrieIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut trie = SubsetTrie::new(6);
        assert!(trie.insert(&[1, 3]));
        assert!(!trie.insert(&[1, 3]));
        assert!(trie.insert(&[1]));
        assert_eq!(trie.len(), 2);
        assert!(trie.contains(&[1]));
        assert!(!trie.contains(&[3]));
        assert!(!trie.contains(&[1, 3, 5]));
    }

    #[test]
    fn empty_set_is_a_member() {
        let mut trie = SubsetTrie::new(3);
        assert!(trie.is_empty());
        assert!(!trie.contains(&[]));
        assert!(trie.insert(&[]));
        assert!(!trie.is_empty());
        assert!(trie.contains(&[]));
        assert_eq!(trie.to_vec(), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn unsorted_input_permutations() {
        let mut trie = SubsetTrie::new(5);
        assert!(trie.insert_vertices(&[4, 0, 2]));
        assert!(!trie.insert_vertices(&[2, 4, 0]));
        assert!(!trie.insert_vertices(&[0, 2, 2, 4]));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn scores() {
        let mut trie = SubsetTrie::new(4);
        trie.insert(&[0, 1]);
        assert_eq!(trie.score(&[0, 1]), None);
        assert!(!trie.insert_with_score(&[0, 1], 5));
        assert_eq!(trie.score(&[0, 1]), Some(5));
        assert!(!trie.insert(&[0, 1]));
        assert_eq!(trie.score(&[0, 1]), Some(5));
        trie.insert_with_score(&[0, 1], 2);
        assert_eq!(trie.score(&[0, 1]), Some(2));
        assert_eq!(trie.score(&[0]), None);
    }

    #[test]
    fn lexicographic_iteration() {
        let mut trie = SubsetTrie::new(5);
        for set in [vec![2, 3], vec![0, 4], vec![0], vec![0, 1, 2], vec![3]].iter() {
            trie.insert(set);
        }
        let sets = trie.to_vec();
        assert_eq!(
            sets,
            vec![vec![0], vec![0, 1, 2], vec![0, 4], vec![2, 3], vec![3]]
        );
        // restartable
        assert_eq!(trie.iter().count(), 5);
        assert_eq!((&trie).into_iter().next(), Some(vec![0]));
    }

    #[test]
    fn proper_subsets() {
        let mut trie = SubsetTrie::new(6);
        trie.insert(&[1, 4]);
        trie.insert(&[0, 2, 5]);
        assert!(trie.contains_proper_subset(&[1, 3, 4]));
        assert!(!trie.contains_proper_subset(&[1, 4]));
        assert!(trie.contains_proper_subset(&[0, 1, 2, 5]));
        assert!(!trie.contains_proper_subset(&[0, 2]));
        trie.insert(&[]);
        assert!(trie.contains_proper_subset(&[3]));
        assert!(!trie.contains_proper_subset(&[]));
    }

    #[test]
    #[should_panic]
    fn rejects_out_of_universe() {
        let mut trie = SubsetTrie::new(3);
        trie.insert(&[1, 3]);
    }
}
