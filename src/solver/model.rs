//! Reading solver answers back as cliques.

use std::fmt;

use tracing::{debug, trace};

use super::error::{CliqueError, Result};

const UNSAT_MARKER: &str = "UNSATISFIABLE";

/// Raw verdict of a SAT call, with the model as signed DIMACS literals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SatOutcome {
    Unsatisfiable,
    Satisfiable(Vec<i64>),
}

/// Vertex set selected by a model, sorted ascending without repetition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clique {
    vertices: Vec<usize>,
}

impl Clique {
    pub fn new(mut vertices: Vec<usize>) -> Self {
        vertices.sort_unstable();
        vertices.dedup();
        Self { vertices }
    }

    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl fmt::Display for Clique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for v in &self.vertices {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", v)?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CliqueResult {
    Unsatisfiable,
    Satisfiable(Clique),
}

/// Classifies the stdout of a competition-style solver.
///
/// Empty output counts as unsatisfiable, as does any output carrying the `UNSATISFIABLE`
/// marker. Otherwise every `v` line contributes its literals; the terminating `0` is skipped.
pub fn parse_solver_output(raw: &str) -> Result<SatOutcome> {
    if raw.trim().is_empty() {
        debug!("solver produced no output");
        return Ok(SatOutcome::Unsatisfiable);
    }
    if raw.contains(UNSAT_MARKER) {
        return Ok(SatOutcome::Unsatisfiable);
    }

    let mut model = Vec::new();
    for line in raw.lines() {
        let mut tokens = line.split_whitespace();
        if tokens.next() != Some("v") {
            continue;
        }
        for tok in tokens {
            let lit: i64 = tok.parse().map_err(|_| {
                CliqueError::MalformedSolverOutput(format!("bad literal '{tok}' in line '{line}'"))
            })?;
            if lit != 0 {
                model.push(lit);
            }
        }
    }
    trace!(literals = model.len(), "parsed model");
    Ok(SatOutcome::Satisfiable(model))
}

/// Keeps the positive selector literals of a model.
///
/// A satisfiable outcome that selects no vertex cannot come from a well-formed encoding with
/// `k ≥ 1` and is reported as [`CliqueError::InconsistentModel`].
pub fn clique_from_outcome(outcome: SatOutcome, vertex_count: usize, k: usize) -> Result<CliqueResult> {
    let model = match outcome {
        SatOutcome::Unsatisfiable => return Ok(CliqueResult::Unsatisfiable),
        SatOutcome::Satisfiable(model) => model,
    };
    let selected: Vec<usize> = model
        .into_iter()
        .filter_map(|lit| usize::try_from(lit).ok())
        .filter(|v| (1..=vertex_count).contains(v))
        .collect();
    if selected.is_empty() {
        return Err(CliqueError::InconsistentModel { k });
    }
    Ok(CliqueResult::Satisfiable(Clique::new(selected)))
}

pub fn interpret(raw: &str, vertex_count: usize, k: usize) -> Result<CliqueResult> {
    clique_from_outcome(parse_solver_output(raw)?, vertex_count, k)
}
