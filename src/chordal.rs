use crate::graph::{BaseGraph, FillEdges};

fn adjacent<G: BaseGraph>(graph: &G, fill: Option<&FillEdges>, u: usize, v: usize) -> bool {
    graph.has_edge(u, v) || fill.map_or(false, |f| f.contains(u, v))
}

fn neighbors<'a, G: BaseGraph>(
    graph: &'a G,
    fill: Option<&'a FillEdges>,
    v: usize,
) -> impl Iterator<Item = usize> + 'a {
    let extra = fill.map_or(&[] as &[usize], |f| f.neighbors(v));
    graph.neighborhood(v).iter().chain(extra.iter()).copied()
}

/// Maximum cardinality search on `G + fill`. Returns the vertices in visiting
/// order; among vertices with the most visited neighbors the smallest id wins.
pub fn maximum_cardinality_search<G: BaseGraph>(graph: &G, fill: Option<&FillEdges>) -> Vec<usize> {
    let n = graph.order();
    let mut weight = vec![0usize; n];
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    for _ in 0..n {
        let mut best: Option<usize> = None;
        for v in (0..n).filter(|v| !visited[*v]) {
            if best.map_or(true, |b| weight[v] > weight[b]) {
                best = Some(v);
            }
        }
        let v = match best {
            Some(v) => v,
            None => break,
        };
        visited[v] = true;
        order.push(v);
        for u in neighbors(graph, fill, v) {
            if !visited[u] {
                weight[u] += 1;
            }
        }
    }
    order
}

/// Checks that eliminating `order[0], order[1], ...` in turn never requires a
/// fill edge in `G + fill`.
///
/// For every vertex only its earliest later neighbor (its parent) is checked
/// against the remaining later neighbors.
pub fn is_perfect_elimination_order<G: BaseGraph>(
    graph: &G,
    fill: Option<&FillEdges>,
    order: &[usize],
) -> bool {
    let n = graph.order();
    assert_eq!(order.len(), n, "elimination order must cover every vertex");
    let mut position = vec![0; n];
    for (i, v) in order.iter().enumerate() {
        position[*v] = i;
    }

    let mut later = Vec::new();
    for v in order.iter().copied() {
        later.clear();
        later.extend(neighbors(graph, fill, v).filter(|u| position[*u] > position[v]));
        let parent = match later.iter().copied().min_by_key(|u| position[*u]) {
            Some(parent) => parent,
            None => continue,
        };
        if later
            .iter()
            .copied()
            .any(|u| u != parent && !adjacent(graph, fill, parent, u))
        {
            return false;
        }
    }
    true
}

pub fn is_chordal<G: BaseGraph>(graph: &G, fill: Option<&FillEdges>) -> bool {
    let mut order = maximum_cardinality_search(graph, fill);
    order.reverse();
    is_perfect_elimination_order(graph, fill, &order)
}
