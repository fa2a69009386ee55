use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::trace;

use super::cnf::Cnf;
use super::error::Result;

/// Writes `cnf` in DIMACS CNF format: a `p cnf <vars> <clauses>` header followed by one
/// zero-terminated clause per line.
pub fn write_dimacs<W: Write>(cnf: &Cnf, out: &mut W) -> Result<()> {
    writeln!(out, "p cnf {} {}", cnf.num_vars, cnf.num_clauses())?;
    for clause in &cnf.clauses {
        for lit in clause {
            write!(out, "{} ", lit)?;
        }
        writeln!(out, "0")?;
    }
    Ok(())
}

pub fn write_dimacs_file(cnf: &Cnf, path: &Path) -> Result<()> {
    trace!(path = %path.display(), num_clauses = cnf.num_clauses(), "writing formula");
    let mut out = BufWriter::new(File::create(path)?);
    write_dimacs(cnf, &mut out)?;
    out.flush()?;
    Ok(())
}

pub fn to_dimacs_string(cnf: &Cnf) -> String {
    let mut buf = Vec::new();
    write_dimacs(cnf, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}
