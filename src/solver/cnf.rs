use std::fmt;
use std::ops::Not;

/// Boolean literal used in CNF clauses.
/// The first field is the one-based DIMACS variable id, the second is the polarity (true = positive).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoolLit(pub usize, pub bool);

impl BoolLit {
    pub fn pos(var: usize) -> Self {
        debug_assert!(var > 0, "DIMACS variables are one-based");
        BoolLit(var, true)
    }

    pub fn neg(var: usize) -> Self {
        debug_assert!(var > 0, "DIMACS variables are one-based");
        BoolLit(var, false)
    }

    pub fn var(self) -> usize {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.1
    }

    /// Signed integer form, as written in DIMACS files.
    pub fn to_dimacs(self) -> i64 {
        if self.1 {
            self.0 as i64
        } else {
            -(self.0 as i64)
        }
    }
}

impl Not for BoolLit {
    type Output = BoolLit;

    fn not(self) -> Self::Output {
        BoolLit(self.0, !self.1)
    }
}

impl fmt::Display for BoolLit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dimacs())
    }
}

/// A simple CNF container holding clauses and the number of allocated variables.
#[derive(Clone, Debug, Default)]
pub struct Cnf {
    pub clauses: Vec<Vec<BoolLit>>,
    pub num_vars: usize,
}

impl Cnf {
    pub fn new() -> Self {
        Self {
            clauses: Vec::new(),
            num_vars: 0,
        }
    }

    pub fn with_vars(num_vars: usize) -> Self {
        Self {
            clauses: Vec::new(),
            num_vars,
        }
    }

    pub fn add_clause<I>(&mut self, clause: I)
    where
        I: IntoIterator<Item = BoolLit>,
    {
        self.clauses.push(clause.into_iter().collect());
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Evaluates the formula under a total assignment. `assignment[v - 1]` holds variable `v`.
    pub fn eval(&self, assignment: &[bool]) -> bool {
        self.clauses.iter().all(|clause| {
            clause.iter().any(|lit| {
                assignment
                    .get(lit.var() - 1)
                    .map_or(false, |&value| value == lit.is_positive())
            })
        })
    }
}
