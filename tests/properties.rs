use arboretum_chordal::atoms::Atoms;
use arboretum_chordal::chordal::is_chordal;
use arboretum_chordal::graph::generators::gnp;
use arboretum_chordal::graph::{BaseGraph, Graph, GraphBuilder};
use arboretum_chordal::io::{AdjacencyRead, DimacsRead};
use arboretum_chordal::minimal_separators::MinimalSeparators;
use arboretum_chordal::parameter::{MinimumFill, Treewidth};
use arboretum_chordal::pmc::potential_maximal_cliques;
use arboretum_chordal::solver::Solver;
use arboretum_chordal::triangulation::MinimalTriangulation;
use arboretum_chordal::{minimum_fill, treewidth};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::convert::TryFrom;
use std::fs::File;
use std::io::BufReader;

fn random_graphs(max_order: usize) -> Vec<Graph> {
    let mut rng = StdRng::seed_from_u64(2021);
    let mut graphs = Vec::new();
    for n in 3..=max_order {
        for p in [0.25, 0.4, 0.6].iter().copied() {
            for _ in 0..4 {
                graphs.push(gnp(n, p, &mut rng));
            }
        }
    }
    graphs
}

fn subset(mask: usize, n: usize) -> Vec<usize> {
    (0..n).filter(|v| mask & (1 << v) != 0).collect()
}

/// Components of `G - removed` paired with their neighborhoods.
fn blocks_of(graph: &Graph, removed: &[usize]) -> Vec<(Vec<usize>, Vec<usize>)> {
    let n = graph.order();
    let mut blocked = vec![false; n];
    for v in removed {
        blocked[*v] = true;
    }
    let mut seen = blocked.clone();
    let mut result = Vec::new();
    for s in 0..n {
        if seen[s] {
            continue;
        }
        seen[s] = true;
        let mut component = vec![s];
        let mut i = 0;
        while i < component.len() {
            let u = component[i];
            i += 1;
            for v in graph.neighborhood(u).iter().copied() {
                if !seen[v] {
                    seen[v] = true;
                    component.push(v);
                }
            }
        }
        component.sort_unstable();
        let neighborhood: Vec<usize> = removed
            .iter()
            .copied()
            .filter(|x| component.iter().any(|c| graph.has_edge(*c, *x)))
            .collect();
        result.push((component, neighborhood));
    }
    result
}

fn brute_force_separators(graph: &Graph) -> Vec<Vec<usize>> {
    let n = graph.order();
    let mut result: Vec<Vec<usize>> = (0..(1usize << n))
        .map(|mask| subset(mask, n))
        .filter(|s| {
            blocks_of(graph, s)
                .iter()
                .filter(|(_, neighborhood)| neighborhood.len() == s.len())
                .count()
                >= 2
        })
        .collect();
    result.sort();
    result
}

fn brute_force_pmcs(graph: &Graph) -> Vec<Vec<usize>> {
    let n = graph.order();
    let mut result: Vec<Vec<usize>> = (1..(1usize << n))
        .map(|mask| subset(mask, n))
        .filter(|k| {
            let blocks = blocks_of(graph, k);
            if blocks.iter().any(|(_, nb)| nb.len() == k.len()) {
                return false;
            }
            k.iter().enumerate().all(|(i, u)| {
                k[i + 1..].iter().all(|v| {
                    graph.has_edge(*u, *v)
                        || blocks
                            .iter()
                            .any(|(_, nb)| nb.contains(u) && nb.contains(v))
                })
            })
        })
        .collect();
    result.sort();
    result
}

/// Width and unit fill of eliminating the vertices in `order`.
fn eliminate(graph: &Graph, order: &[usize]) -> (usize, usize) {
    let n = graph.order();
    let mut adjacent: Vec<Vec<bool>> = (0..n)
        .map(|u| (0..n).map(|v| graph.has_edge(u, v)).collect())
        .collect();
    let mut eliminated = vec![false; n];
    let mut width = 0;
    let mut fill = 0;
    for v in order.iter().copied() {
        let higher: Vec<usize> = (0..n).filter(|u| !eliminated[*u] && adjacent[v][*u]).collect();
        width = width.max(higher.len());
        for (i, a) in higher.iter().enumerate() {
            for b in higher[i + 1..].iter() {
                if !adjacent[*a][*b] {
                    adjacent[*a][*b] = true;
                    adjacent[*b][*a] = true;
                    fill += 1;
                }
            }
        }
        eliminated[v] = true;
    }
    (width, fill)
}

fn next_permutation(order: &mut [usize]) -> bool {
    let n = order.len();
    if n < 2 {
        return false;
    }
    let mut i = n - 1;
    while i > 0 && order[i - 1] >= order[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = n - 1;
    while order[j] <= order[i - 1] {
        j -= 1;
    }
    order.swap(i - 1, j);
    order[i..].reverse();
    true
}

/// Total `fill_cost` of the edges added when eliminating in `order`.
fn weighted_fill(graph: &Graph, order: &[usize]) -> u64 {
    let n = graph.order();
    let mut adjacent: Vec<Vec<bool>> = (0..n)
        .map(|u| (0..n).map(|v| graph.has_edge(u, v)).collect())
        .collect();
    let mut eliminated = vec![false; n];
    let mut cost = 0;
    for v in order.iter().copied() {
        let higher: Vec<usize> = (0..n).filter(|u| !eliminated[*u] && adjacent[v][*u]).collect();
        for (i, a) in higher.iter().enumerate() {
            for b in higher[i + 1..].iter() {
                if !adjacent[*a][*b] {
                    adjacent[*a][*b] = true;
                    adjacent[*b][*a] = true;
                    cost += graph.fill_cost(*a, *b);
                }
            }
        }
        eliminated[v] = true;
    }
    cost
}

fn brute_force_weighted_fill(graph: &Graph) -> u64 {
    let mut order: Vec<usize> = (0..graph.order()).collect();
    let mut best = weighted_fill(graph, &order);
    while next_permutation(&mut order) {
        best = best.min(weighted_fill(graph, &order));
    }
    best
}

/// Copies `graph` and gives every non-edge a fill cost in `1..=9`.
fn with_random_costs<R: Rng>(graph: &Graph, rng: &mut R) -> Graph {
    let n = graph.order();
    let mut builder = GraphBuilder::new(n);
    for (u, v) in graph.edges() {
        builder.add_edge(u, v).unwrap();
    }
    for u in 0..n {
        for v in (u + 1)..n {
            if !graph.has_edge(u, v) {
                builder.set_fill_cost(u, v, rng.gen_range(1..10)).unwrap();
            }
        }
    }
    builder.build()
}

fn brute_force_width_and_fill(graph: &Graph) -> (u64, u64) {
    let mut order: Vec<usize> = (0..graph.order()).collect();
    let (mut width, mut fill) = eliminate(graph, &order);
    while next_permutation(&mut order) {
        let (w, f) = eliminate(graph, &order);
        width = width.min(w);
        fill = fill.min(f);
    }
    (width as u64, fill as u64)
}

fn read_fixture(name: &str) -> Graph {
    let path = format!("{}/data/{}", env!("CARGO_MANIFEST_DIR"), name);
    let reader = BufReader::new(File::open(path).unwrap());
    if name.ends_with(".adj") {
        Graph::try_from(AdjacencyRead(reader)).unwrap()
    } else {
        Graph::try_from(DimacsRead(reader)).unwrap()
    }
}

#[test]
fn minimal_separators_match_exhaustive_search() {
    for graph in random_graphs(9) {
        let mut found = MinimalSeparators::all(&graph).to_vec();
        found.sort();
        assert_eq!(found, brute_force_separators(&graph), "{:?}", graph.edges());
    }
}

#[test]
fn pairwise_separators_cover_all() {
    for graph in random_graphs(8) {
        let all = MinimalSeparators::all(&graph);
        let mut union: Vec<Vec<usize>> = Vec::new();
        for a in 0..graph.order() {
            for b in (a + 1)..graph.order() {
                for separator in MinimalSeparators::between(&graph, a, b).iter() {
                    let blocks = blocks_of(&graph, &separator);
                    let full_with = |x: usize| {
                        blocks
                            .iter()
                            .any(|(c, nb)| c.contains(&x) && nb.len() == separator.len())
                    };
                    assert!(full_with(a) && full_with(b));
                    assert!(all.contains(&separator));
                    union.push(separator);
                }
            }
        }
        union.sort();
        union.dedup();
        let mut expected = all.to_vec();
        expected.sort();
        assert_eq!(union, expected, "{:?}", graph.edges());
    }
}

#[test]
fn pmcs_match_exhaustive_search() {
    for graph in random_graphs(8) {
        let mut found = potential_maximal_cliques(&graph).to_vec();
        found.sort();
        assert_eq!(found, brute_force_pmcs(&graph), "{:?}", graph.edges());
    }
}

#[test]
fn mcs_m_is_a_minimal_triangulation() {
    for graph in random_graphs(10) {
        let triangulation = MinimalTriangulation::new(&graph);
        assert!(is_chordal(&graph, Some(triangulation.fill())));
        assert!(triangulation.is_minimal_triangulation(&graph));
    }
}

#[test]
fn exact_values_match_elimination_orders() {
    for graph in random_graphs(7) {
        let (width, fill) = brute_force_width_and_fill(&graph);
        assert_eq!(treewidth(&graph), width, "{:?}", graph.edges());
        assert_eq!(minimum_fill(&graph), fill, "{:?}", graph.edges());

        let triangulation = MinimalTriangulation::new(&graph);
        assert!(triangulation.width(&graph) as u64 >= width);
        assert!(triangulation.fill_in_cost(&graph) >= fill);
    }
}

#[test]
fn weighted_fill_matches_elimination_orders() {
    let mut rng = StdRng::seed_from_u64(99);
    for graph in random_graphs(7) {
        let weighted = with_random_costs(&graph, &mut rng);
        let expected = brute_force_weighted_fill(&weighted);
        assert_eq!(minimum_fill(&weighted), expected, "{:?}", weighted.edges());
        let by_components = Solver::<MinimumFill>::default().use_atoms(false);
        assert_eq!(by_components.solve(&weighted).value, expected);
    }
}

#[test]
fn atoms_agree_with_components() {
    for graph in random_graphs(8) {
        for use_atoms in [true, false].iter().copied() {
            let tw = Solver::<Treewidth>::default().use_atoms(use_atoms);
            let fill = Solver::<MinimumFill>::default().use_atoms(use_atoms);
            assert_eq!(tw.solve(&graph).value, treewidth(&graph));
            assert_eq!(fill.solve(&graph).value, minimum_fill(&graph));
        }
    }
}

#[test]
fn atoms_have_no_clique_separator() {
    for graph in random_graphs(9) {
        let atoms = Atoms::new(&graph);
        let mut covered = vec![false; graph.order()];
        for atom in &atoms {
            for v in atom.parent_vertices() {
                covered[*v] = true;
            }
            for separator in MinimalSeparators::all(atom).iter() {
                assert!(!atom.is_clique(&separator));
            }
        }
        assert!(covered.iter().all(|c| *c));
        for separator in atoms.clique_separators() {
            assert!(graph.is_clique(separator));
        }
    }
}

#[test]
fn squares_triangle_fixture() {
    let graph = read_fixture("squares_triangle.gr");
    assert_eq!(graph.order(), 9);
    assert_eq!(graph.size(), 10);

    let mut atoms = Atoms::new(&graph).vertex_sets();
    atoms.sort();
    assert_eq!(
        atoms,
        vec![
            vec![0, 1, 2, 3],
            vec![0, 7],
            vec![2, 3, 4, 5],
            vec![4, 5, 6],
            vec![8],
        ]
    );

    let result = Solver::<MinimumFill>::default().solve(&graph);
    assert_eq!(result.value, 2);
    assert_eq!(result.atoms, 5);
    assert_eq!(result.clique_atoms, 3);
    assert_eq!(treewidth(&graph), 2);
}

#[test]
fn two_cliques_fixture() {
    let graph = read_fixture("two_cliques.gr");
    let result = Solver::<Treewidth>::default().solve(&graph);
    assert_eq!(result.value, 4);
    assert_eq!(result.atoms, 2);
    assert_eq!(minimum_fill(&graph), 0);
    assert_eq!(MinimalSeparators::all(&graph).to_vec(), vec![Vec::<usize>::new()]);
}

#[test]
fn named_cycle_fixture() {
    let graph = read_fixture("cycle_names.adj");
    assert_eq!(graph.order(), 5);
    assert_eq!(graph.name(2), "c");
    assert_eq!(MinimalSeparators::all(&graph).len(), 5);
    assert_eq!(potential_maximal_cliques(&graph).len(), 10);
    assert_eq!(treewidth(&graph), 2);
    assert_eq!(minimum_fill(&graph), 2);
}
