use anyhow::{bail, Context, Result};
use satclique::solver::{Backend, MaxCliqueSolver, SolverConfig};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn print_help() {
    println!("satclique - Maximum clique search via SAT");
    println!();
    println!("USAGE:");
    println!("    satclique -i <FILE> [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -i, --input <FILE>          The instance file (DIMACS graph format)");
    println!("    -o, --output <FILE>         Output file for the CNF formula [default: formula.cnf]");
    println!("    -s, --solver <BIN>          The SAT solver to be used [default: glucose]");
    println!("    -v, --verb <0|1>            Verbosity of the SAT solver used [default: 1]");
    println!("    -t, --timeout <SECS>        Abort the search if one solver call exceeds SECS");
    println!("    --embedded                  Solve in-process instead of running a solver binary");
    println!("    --check-model               Verify every clique returned by the solver");
    println!("    -h, --help                  Print this help message");
    println!();
    println!("EXAMPLES:");
    println!("    satclique -i graph.col                         # Run glucose on each probe");
    println!("    satclique -i graph.col -s cadical -v 0         # Use another solver, quietly");
    println!("    satclique -i graph.col --embedded              # No external solver needed");
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    match args.get(i + 1) {
        Some(v) => Ok(v.as_str()),
        None => bail!("missing value for {}", flag),
    }
}

fn main() -> Result<ExitCode> {
    // Logs go to stderr; stdout carries only the result. Respect RUST_LOG if set.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .try_init();

    debug!("starting satclique");
    let args: Vec<String> = env::args().collect();

    let mut config = SolverConfig::default();
    let mut input: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                return Ok(ExitCode::SUCCESS);
            }
            "-i" | "--input" => {
                input = Some(PathBuf::from(value(&args, i, arg)?));
                i += 1;
            }
            "-o" | "--output" => {
                config.cnf_path = PathBuf::from(value(&args, i, arg)?);
                i += 1;
            }
            "-s" | "--solver" => {
                config.solver_path = PathBuf::from(value(&args, i, arg)?);
                i += 1;
            }
            "-v" | "--verb" => {
                let v = value(&args, i, arg)?;
                config.verbosity = match v {
                    "0" => 0,
                    "1" => 1,
                    _ => bail!("invalid verbosity '{}', expected 0 or 1", v),
                };
                i += 1;
            }
            "-t" | "--timeout" => {
                let v = value(&args, i, arg)?;
                let secs: f64 = v
                    .parse()
                    .with_context(|| format!("invalid timeout '{}'", v))?;
                if !secs.is_finite() || secs <= 0.0 {
                    bail!("timeout must be a positive number of seconds");
                }
                let limit = Duration::try_from_secs_f64(secs)
                    .with_context(|| format!("invalid timeout '{}'", v))?;
                config.timeout = Some(limit);
                i += 1;
            }
            "--embedded" => {
                config.backend = Backend::Embedded;
            }
            "--check-model" => {
                config.check_model = true;
            }
            _ => {
                eprintln!("Unknown option: {}", arg);
                print_help();
                return Ok(ExitCode::FAILURE);
            }
        }
        i += 1;
    }

    let Some(path) = input else {
        eprintln!("missing required option --input");
        print_help();
        return Ok(ExitCode::FAILURE);
    };

    let solver = MaxCliqueSolver::new_with_config(config);
    let report = solver.run_file(&path)?;
    if let Some(text) = report.render() {
        print!("{}", text);
    }
    Ok(ExitCode::SUCCESS)
}
