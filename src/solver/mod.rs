use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, trace};

pub mod cnf;
pub mod config;
pub mod counter;
pub mod dimacs;
pub mod encoder;
pub mod error;
pub mod graph;
pub mod model;
pub mod sat;
pub mod search;

pub use config::{Backend, SolverConfig};
pub use error::CliqueError;
pub use graph::Graph;
pub use model::{Clique, CliqueResult};

/// Outcome of one maximum-clique run over an instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub vertex_count: usize,
    pub clique: Option<Clique>,
}

impl SearchReport {
    /// Text printed by the command line tool, `None` when nothing should be printed.
    pub fn render(&self) -> Option<String> {
        match &self.clique {
            Some(c) => Some(format!(
                "Maximum Clique Size: {}\nVertices: {}\n",
                c.len(),
                c
            )),
            None if self.vertex_count > 0 => Some("No clique found.\n".to_string()),
            None => None,
        }
    }
}

pub struct MaxCliqueSolver {
    config: SolverConfig,
}

impl MaxCliqueSolver {
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    pub fn new_with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn solve_graph(&self, graph: &Graph) -> Result<Option<Clique>> {
        let backend = sat::backend_for(&self.config);
        debug!(
            backend = ?self.config.backend,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "starting maximum clique search"
        );
        let clique = search::max_clique(graph, backend, self.config.check_model)
            .context("maximum clique search failed")?;
        Ok(clique)
    }

    pub fn run_instance(&self, input: &str) -> Result<SearchReport> {
        trace!(len = input.len(), "parsing instance");
        let graph = graph::parse_instance(input).context("parse graph instance failed")?;
        let clique = self.solve_graph(&graph)?;
        Ok(SearchReport {
            vertex_count: graph.vertex_count(),
            clique,
        })
    }

    pub fn run_file(&self, path: &Path) -> Result<SearchReport> {
        let input = fs::read_to_string(path)
            .with_context(|| format!("failed to read instance '{}'", path.display()))?;
        self.run_instance(&input)
    }
}

impl Default for MaxCliqueSolver {
    fn default() -> Self {
        Self::new()
    }
}
