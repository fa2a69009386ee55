use satclique::solver::sat::EmbeddedSolver;
use satclique::solver::search::{max_clique, MaxCliqueSearch, SearchState};
use satclique::solver::Graph;

use crate::common::{clique_number, random_graph};

#[test]
fn test_empty_graph_has_no_clique() {
    let g = Graph::default();
    let mut search = MaxCliqueSearch::new(&g, EmbeddedSolver);
    assert_eq!(search.step().unwrap(), SearchState::Done);
    assert_eq!(search.probes(), 0);
    assert_eq!(max_clique(&g, EmbeddedSolver, true).unwrap(), None);
}

#[test]
fn test_triangle() {
    let g = Graph::new(3, [(1, 2), (2, 3), (1, 3)]).unwrap();
    let clique = max_clique(&g, EmbeddedSolver, true).unwrap().unwrap();
    assert_eq!(clique.vertices(), &[1, 2, 3]);
}

#[test]
fn test_edgeless_graph_gives_single_vertex() {
    let g = Graph::empty(5);
    let mut search = MaxCliqueSearch::new(&g, EmbeddedSolver).with_model_check(true);
    assert_eq!(search.step().unwrap(), SearchState::Probing(2));
    assert_eq!(search.step().unwrap(), SearchState::Done);
    assert_eq!(search.best().unwrap().len(), 1);
}

#[test]
fn test_complete_k4() {
    let g = Graph::complete(4);
    let mut search = MaxCliqueSearch::new(&g, EmbeddedSolver).with_model_check(true);
    while search.step().unwrap() != SearchState::Done {}
    // Sizes 1..=4 are probed; 5 exceeds the vertex count and stops without a solver call.
    assert_eq!(search.probes(), 4);
    assert_eq!(search.best().unwrap().vertices(), &[1, 2, 3, 4]);
}

#[test]
fn test_two_triangles_joined_by_a_path() {
    // 1-2-3 triangle, 3-4 bridge, 4-5-6-7 four-clique.
    let g = Graph::new(
        7,
        [
            (1, 2),
            (2, 3),
            (1, 3),
            (3, 4),
            (4, 5),
            (4, 6),
            (4, 7),
            (5, 6),
            (5, 7),
            (6, 7),
        ],
    )
    .unwrap();
    let clique = max_clique(&g, EmbeddedSolver, true).unwrap().unwrap();
    assert_eq!(clique.vertices(), &[4, 5, 6, 7]);
}

#[test]
fn test_matches_exhaustive_clique_number() {
    for seed in 0..20 {
        let n = 6 + (seed as usize % 5);
        let g = random_graph(n, 25 + (seed * 3) % 60, seed);
        let clique = max_clique(&g, EmbeddedSolver, true).unwrap().unwrap();
        assert_eq!(clique.len(), clique_number(&g), "seed={seed}");
        assert!(g.is_clique(clique.vertices()));
    }
}
