//! Error taxonomy for instance loading and solver exchange.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliqueError {
    /// Edge endpoint outside `1..=vertex_count` when building a graph directly.
    #[error("edge ({u}, {v}) outside vertex range 1..={vertex_count}")]
    EdgeOutOfRange {
        u: usize,
        v: usize,
        vertex_count: usize,
    },

    /// Malformed `p`/`e` line in a graph instance.
    #[error("instance line {line}: {message}")]
    InstanceFormat { line: usize, message: String },

    /// Solver binary missing, failed to run, or terminated abnormally.
    #[error("solver invocation failed: {0}")]
    SolverInvocation(String),

    /// The solver did not answer within the configured limit.
    #[error("solver timed out after {limit:?} while probing clique size {k}")]
    SolverTimeout { k: usize, limit: Duration },

    /// Assignment lines that cannot be read back as literals.
    #[error("malformed solver output: {0}")]
    MalformedSolverOutput(String),

    /// A satisfiable answer that selects no vertex at all.
    #[error("solver reported a model for clique size {k} that selects no vertex")]
    InconsistentModel { k: usize },

    /// Model check rejected the clique read back from the solver.
    #[error("invalid clique for size {k}: {reason}")]
    InvalidClique { k: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CliqueError>;

impl CliqueError {
    pub(crate) fn instance(line: usize, message: impl Into<String>) -> Self {
        CliqueError::InstanceFormat {
            line,
            message: message.into(),
        }
    }
}
