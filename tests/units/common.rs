use satclique::solver::cnf::Cnf;
use satclique::solver::Graph;

/// Deterministic pseudo-random graph: each pair is an edge with probability `percent`/100.
pub fn random_graph(n: usize, percent: u64, seed: u64) -> Graph {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut edges = Vec::new();
    for u in 1..=n {
        for v in u + 1..=n {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            if (state >> 33) % 100 < percent {
                edges.push((u, v));
            }
        }
    }
    Graph::new(n, edges).unwrap()
}

/// Every graph on `n` vertices, one per subset of the possible edges.
pub fn all_graphs(n: usize) -> Vec<Graph> {
    let pairs: Vec<(usize, usize)> = (1..=n)
        .flat_map(|u| (u + 1..=n).map(move |v| (u, v)))
        .collect();
    (0..1u32 << pairs.len())
        .map(|mask| {
            let edges = pairs
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, &e)| e);
            Graph::new(n, edges).unwrap()
        })
        .collect()
}

/// Clique number by exhaustive subset enumeration.
pub fn clique_number(g: &Graph) -> usize {
    let n = g.vertex_count();
    (0..1u32 << n)
        .map(|mask| subset(n, mask))
        .filter(|vs| g.is_clique(vs))
        .map(|vs| vs.len())
        .max()
        .unwrap_or(0)
}

pub fn subset(n: usize, mask: u32) -> Vec<usize> {
    (1..=n).filter(|v| mask & (1 << (v - 1)) != 0).collect()
}

/// Selector projections (as bit masks over vertices) of every model of `cnf`.
pub fn projected_models(cnf: &Cnf, n: usize) -> Vec<u32> {
    let mut assignment = vec![false; cnf.num_vars];
    let mut found = Vec::new();
    for bits in 0..1u64 << cnf.num_vars {
        for (idx, slot) in assignment.iter_mut().enumerate() {
            *slot = bits & (1 << idx) != 0;
        }
        if cnf.eval(&assignment) {
            found.push((bits & ((1 << n) - 1)) as u32);
        }
    }
    found.sort_unstable();
    found.dedup();
    found
}
