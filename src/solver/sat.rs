use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};
use varisat::cnf::CnfFormula;
use varisat::lit::Lit;
use varisat::solver::Solver;
use varisat::ExtendFormula;
use wait_timeout::ChildExt;

use super::cnf::Cnf;
use super::config::{Backend, SolverConfig};
use super::dimacs::write_dimacs_file;
use super::error::{CliqueError, Result};
use super::model::{parse_solver_output, SatOutcome};

/// One request/response exchange with a SAT engine. `k` is the clique size being probed and
/// only serves diagnostics.
pub trait SatBackend {
    fn solve(&mut self, cnf: &Cnf, k: usize) -> Result<SatOutcome>;
}

impl<B: SatBackend + ?Sized> SatBackend for Box<B> {
    fn solve(&mut self, cnf: &Cnf, k: usize) -> Result<SatOutcome> {
        (**self).solve(cnf, k)
    }
}

pub fn backend_for(config: &SolverConfig) -> Box<dyn SatBackend> {
    match config.backend {
        Backend::External => Box::new(ExternalSolver::from_config(config)),
        Backend::Embedded => Box::new(EmbeddedSolver),
    }
}

/// In-process varisat solver.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedSolver;

impl SatBackend for EmbeddedSolver {
    fn solve(&mut self, cnf: &Cnf, k: usize) -> Result<SatOutcome> {
        solve_cnf(cnf, k)
    }
}

pub fn solve_cnf(c: &Cnf, k: usize) -> Result<SatOutcome> {
    let mut solver = Solver::new();
    let mut f = CnfFormula::new();
    debug!(
        k,
        num_clauses = c.clauses.len(),
        num_vars = c.num_vars,
        "solve_cnf start"
    );
    for cl in &c.clauses {
        let lits: Vec<Lit> = cl
            .iter()
            .map(|lit| Lit::from_dimacs(lit.to_dimacs() as isize))
            .collect();
        f.add_clause(&lits);
    }
    solver.add_formula(&f);
    let sat = solver
        .solve()
        .map_err(|e| CliqueError::SolverInvocation(format!("varisat: {e}")))?;
    if !sat {
        debug!("solve_cnf: UNSAT");
        return Ok(SatOutcome::Unsatisfiable);
    }
    let model = solver
        .model()
        .ok_or_else(|| CliqueError::SolverInvocation("varisat reported SAT without a model".into()))?;
    debug!("solve_cnf: SAT");
    Ok(SatOutcome::Satisfiable(
        model.into_iter().map(|lit| lit.to_dimacs() as i64).collect(),
    ))
}

/// Competition-style solver run as a child process.
///
/// Each call writes the formula to `cnf_path`, runs `<program> -model <cnf_path>` and parses
/// its stdout. Exit codes 10 (SAT) and 20 (UNSAT) are normal, as is 0.
#[derive(Debug, Clone)]
pub struct ExternalSolver {
    program: PathBuf,
    cnf_path: PathBuf,
    timeout: Option<Duration>,
    verbosity: u8,
}

impl ExternalSolver {
    pub fn new(program: impl Into<PathBuf>, cnf_path: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            cnf_path: cnf_path.into(),
            timeout: None,
            verbosity: 0,
        }
    }

    pub fn from_config(config: &SolverConfig) -> Self {
        Self {
            program: config.solver_path.clone(),
            cnf_path: config.cnf_path.clone(),
            timeout: config.timeout,
            verbosity: config.verbosity,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Runs the solver on the formula file and returns its stdout.
    pub fn invoke(&self, k: usize) -> Result<String> {
        let started = Instant::now();
        let mut child = Command::new(&self.program)
            .arg("-model")
            .arg(&self.cnf_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                CliqueError::SolverInvocation(format!(
                    "cannot start '{}': {e}",
                    self.program.display()
                ))
            })?;

        // Drain stdout on a helper thread so a chatty solver never blocks on a full pipe.
        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| CliqueError::SolverInvocation("solver stdout not captured".into()))?;
        let reader = thread::spawn(move || {
            let mut buf = String::new();
            stdout.read_to_string(&mut buf).map(|_| buf)
        });

        let status = match self.timeout {
            Some(limit) => match child.wait_timeout(limit)? {
                Some(status) => status,
                None => {
                    warn!(k, program = %self.program.display(), "solver timed out, killing it");
                    let _ = child.kill();
                    let _ = child.wait();
                    // The pipe is closed once the child is reaped.
                    let _ = reader.join();
                    return Err(CliqueError::SolverTimeout { k, limit });
                }
            },
            None => child.wait()?,
        };

        let output = reader
            .join()
            .map_err(|_| CliqueError::SolverInvocation("stdout reader panicked".into()))??;
        check_status(status)?;
        debug!(
            k,
            code = ?status.code(),
            bytes = output.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "solver finished"
        );
        Ok(output)
    }
}

fn check_status(status: ExitStatus) -> Result<()> {
    match status.code() {
        Some(0) | Some(10) | Some(20) => Ok(()),
        Some(code) => Err(CliqueError::SolverInvocation(format!(
            "solver exited with status {code}"
        ))),
        None => Err(CliqueError::SolverInvocation(
            "solver terminated by a signal".into(),
        )),
    }
}

impl SatBackend for ExternalSolver {
    fn solve(&mut self, cnf: &Cnf, k: usize) -> Result<SatOutcome> {
        write_dimacs_file(cnf, &self.cnf_path)?;
        let raw = self.invoke(k)?;
        if self.verbosity > 0 {
            for line in raw.lines().filter(|l| l.starts_with('c')) {
                println!("{}", line);
            }
        }
        trace!(k, "parsing solver output");
        parse_solver_output(&raw)
    }
}
