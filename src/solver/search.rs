use std::time::Instant;

use tracing::{debug, info};

use super::encoder::encode_clique;
use super::error::{CliqueError, Result};
use super::graph::Graph;
use super::model::{clique_from_outcome, Clique, CliqueResult};
use super::sat::SatBackend;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Probing(usize),
    Done,
}

/// Linear upward probe for the maximum clique.
///
/// Clique size is monotone (removing a vertex from a clique leaves a clique), so the first
/// unsatisfiable size ends the search and the last satisfiable one is the maximum.
pub struct MaxCliqueSearch<'g, B: SatBackend> {
    graph: &'g Graph,
    backend: B,
    check_model: bool,
    state: SearchState,
    best: Option<Clique>,
    probes: usize,
}

impl<'g, B: SatBackend> MaxCliqueSearch<'g, B> {
    pub fn new(graph: &'g Graph, backend: B) -> Self {
        Self {
            graph,
            backend,
            check_model: false,
            state: SearchState::Probing(1),
            best: None,
            probes: 0,
        }
    }

    pub fn with_model_check(mut self, check_model: bool) -> Self {
        self.check_model = check_model;
        self
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn best(&self) -> Option<&Clique> {
        self.best.as_ref()
    }

    /// Number of solver calls made so far.
    pub fn probes(&self) -> usize {
        self.probes
    }

    /// Advances the state machine by one probe.
    pub fn step(&mut self) -> Result<SearchState> {
        let k = match self.state {
            SearchState::Done => return Ok(SearchState::Done),
            SearchState::Probing(k) => k,
        };
        if k > self.graph.vertex_count() {
            self.state = SearchState::Done;
            return Ok(self.state);
        }

        let started = Instant::now();
        let cnf = encode_clique(self.graph, k);
        let outcome = self.backend.solve(&cnf, k)?;
        self.probes += 1;
        let result = clique_from_outcome(outcome, self.graph.vertex_count(), k)?;
        debug!(
            k,
            num_vars = cnf.num_vars,
            num_clauses = cnf.num_clauses(),
            sat = matches!(result, CliqueResult::Satisfiable(_)),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "probe finished"
        );

        self.state = match result {
            CliqueResult::Satisfiable(clique) => {
                if self.check_model {
                    self.verify(&clique, k)?;
                }
                self.best = Some(clique);
                SearchState::Probing(k + 1)
            }
            CliqueResult::Unsatisfiable => SearchState::Done,
        };
        Ok(self.state)
    }

    pub fn run(mut self) -> Result<Option<Clique>> {
        while self.step()? != SearchState::Done {}
        match &self.best {
            Some(c) => info!(size = c.len(), probes = self.probes, "maximum clique found"),
            None => info!(probes = self.probes, "no clique found"),
        }
        Ok(self.best)
    }

    fn verify(&self, clique: &Clique, k: usize) -> Result<()> {
        if clique.len() < k {
            return Err(CliqueError::InvalidClique {
                k,
                reason: format!("only {} vertices selected", clique.len()),
            });
        }
        if !self.graph.is_clique(clique.vertices()) {
            return Err(CliqueError::InvalidClique {
                k,
                reason: format!("vertices {clique} are not pairwise adjacent"),
            });
        }
        Ok(())
    }
}

/// Runs the full search with the given backend.
pub fn max_clique<B: SatBackend>(graph: &Graph, backend: B, check_model: bool) -> Result<Option<Clique>> {
    MaxCliqueSearch::new(graph, backend)
        .with_model_check(check_model)
        .run()
}
