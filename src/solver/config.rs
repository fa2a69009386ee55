use std::path::PathBuf;
use std::time::Duration;

/// Which SAT engine answers the probes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    /// Shell out to a competition-style solver binary.
    External,
    /// Solve in-process with varisat.
    Embedded,
}

/// Configuration options for the clique search
#[derive(Clone, Debug)]
pub struct SolverConfig {
    /// Solver binary, invoked as `<solver_path> -model <cnf_path>`
    pub solver_path: PathBuf,

    /// Where each probe's formula is written for the external solver
    pub cnf_path: PathBuf,

    pub backend: Backend,

    /// Echo solver `c` lines to stdout when greater than zero
    pub verbosity: u8,

    /// Per-probe limit for the external solver; expiry aborts the search
    pub timeout: Option<Duration>,

    /// Verify every clique read back from the solver against the graph
    pub check_model: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            solver_path: PathBuf::from("glucose"),
            cnf_path: PathBuf::from("formula.cnf"),
            backend: Backend::External,
            verbosity: 1,
            timeout: None,
            check_model: false,
        }
    }
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// In-process solving with model checking and no solver chatter.
    pub fn embedded() -> Self {
        Self {
            backend: Backend::Embedded,
            verbosity: 0,
            check_model: true,
            ..Self::default()
        }
    }
}
