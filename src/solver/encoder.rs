//! Reduction of "does the graph contain a clique of size k?" to CNF.
//!
//! Variables `1..=n` select vertices. Two families of clauses are emitted:
//!
//! * exclusion clauses `(¬u ∨ ¬v)` for every non-adjacent pair, so that any model selects a
//!   clique;
//! * a sequential counter over the selectors, where cell `(i, j)` holds iff at least `j` of
//!   the first `i` vertices are selected, plus a unit clause on `(n, k)`.
//!
//! Constant cells (`j ≤ 0` is true, `j > i` is false) never become variables; clauses that
//! mention them are simplified away instead.

use tracing::{debug, trace};

use super::cnf::{BoolLit, Cnf};
use super::counter::{CounterAllocator, CounterCell};
use super::graph::Graph;

/// Encodes the clique-of-size-at-least-`k` decision problem.
///
/// For `k > vertex_count` the result is unsatisfiable by construction.
pub fn encode_clique(graph: &Graph, k: usize) -> Cnf {
    let n = graph.vertex_count();
    let mut cnf = Cnf::new();
    let mut counter = CounterAllocator::new(n);

    encode_exclusions(graph, &mut cnf);
    let exclusions = cnf.num_clauses();
    trace!(exclusions, "exclusion clauses emitted");

    for i in 1..=n {
        for j in 1..=i.min(k) {
            encode_cell(&mut cnf, &mut counter, i, j as isize);
        }
    }

    match counter.resolve(n, k as isize) {
        CounterCell::Var(v) => cnf.add_clause([BoolLit::pos(v)]),
        CounterCell::False => {
            // k exceeds the vertex count: no assignment may satisfy the formula.
            cnf.add_clause([BoolLit::pos(1)]);
            cnf.add_clause([BoolLit::neg(1)]);
        }
        CounterCell::True => {}
    }

    // The contradictory pair above mentions variable 1 even when the graph is empty.
    cnf.num_vars = counter.total_vars().max(unsat_anchor(&cnf));
    debug!(
        k,
        vertices = n,
        counter_vars = counter.allocated(),
        num_vars = cnf.num_vars,
        num_clauses = cnf.num_clauses(),
        "encoded clique problem"
    );
    cnf
}

fn unsat_anchor(cnf: &Cnf) -> usize {
    cnf.clauses
        .iter()
        .flatten()
        .map(|lit| lit.var())
        .max()
        .unwrap_or(0)
}

fn encode_exclusions(graph: &Graph, cnf: &mut Cnf) {
    let n = graph.vertex_count();
    for u in 1..=n {
        for v in u + 1..=n {
            if !graph.has_edge(u, v) {
                cnf.add_clause([BoolLit::neg(u), BoolLit::neg(v)]);
            }
        }
    }
}

/// Defines `cur(i, j) <-> cur(i-1, j) ∨ (x_i ∧ cur(i-1, j-1))`.
fn encode_cell(cnf: &mut Cnf, counter: &mut CounterAllocator, i: usize, j: isize) {
    let cur = counter.resolve(i, j);
    let same = counter.resolve(i - 1, j);
    let less = counter.resolve(i - 1, j - 1);
    let x = BoolLit::pos(i);

    let cur = match cur {
        CounterCell::Var(v) => BoolLit::pos(v),
        CounterCell::True | CounterCell::False => return,
    };

    // same -> cur
    match same {
        CounterCell::Var(s) => cnf.add_clause([BoolLit::neg(s), cur]),
        CounterCell::True => cnf.add_clause([cur]),
        CounterCell::False => {}
    }

    // x_i ∧ less -> cur
    match less {
        CounterCell::Var(l) => cnf.add_clause([cur, !x, BoolLit::neg(l)]),
        CounterCell::True => cnf.add_clause([cur, !x]),
        CounterCell::False => {}
    }

    // cur -> same ∨ less
    if same != CounterCell::True && less != CounterCell::True {
        let mut clause = vec![!cur];
        clause.extend(same.lit());
        clause.extend(less.lit());
        cnf.add_clause(clause);
    }

    // cur -> x_i ∨ same
    if same != CounterCell::True {
        let mut clause = vec![!cur, x];
        clause.extend(same.lit());
        cnf.add_clause(clause);
    }
}
