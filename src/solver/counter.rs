use std::collections::HashMap;

use super::cnf::BoolLit;

/// Value of the sequential-counter cell "at least `j` of the first `i` vertices are selected".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CounterCell {
    True,
    False,
    Var(usize),
}

impl CounterCell {
    pub fn lit(self) -> Option<BoolLit> {
        match self {
            CounterCell::Var(v) => Some(BoolLit::pos(v)),
            CounterCell::True | CounterCell::False => None,
        }
    }
}

/// Hands out counter variables for one encoding pass.
///
/// Ids start right after the vertex selectors and grow by one per distinct `(i, j)`.
/// An allocator must not outlive the encode call that created it: cell meaning depends on the
/// target clique size.
#[derive(Debug)]
pub struct CounterAllocator {
    vertex_count: usize,
    cells: HashMap<(usize, usize), usize>,
}

impl CounterAllocator {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            cells: HashMap::new(),
        }
    }

    pub fn resolve(&mut self, i: usize, j: isize) -> CounterCell {
        if j <= 0 {
            return CounterCell::True;
        }
        let j = j as usize;
        if j > i {
            return CounterCell::False;
        }
        let next = self.vertex_count + self.cells.len() + 1;
        CounterCell::Var(*self.cells.entry((i, j)).or_insert(next))
    }

    pub fn allocated(&self) -> usize {
        self.cells.len()
    }

    /// Selector variables plus every counter variable handed out so far.
    pub fn total_vars(&self) -> usize {
        self.vertex_count + self.cells.len()
    }
}
