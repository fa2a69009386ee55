use std::collections::BTreeSet;

use tracing::{debug, trace};

use super::error::{CliqueError, Result};

/// Undirected simple graph on vertices `1..=vertex_count`.
///
/// Edges are stored normalized as `(u, v)` with `u < v`; self-loops are dropped and
/// duplicates (in either orientation) collapse to one entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    edges: BTreeSet<(usize, usize)>,
}

impl Graph {
    /// Builds a graph from an edge list, rejecting endpoints outside `1..=vertex_count`.
    pub fn new<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut g = Graph::empty(vertex_count);
        for (u, v) in edges {
            if !g.contains_vertex(u) || !g.contains_vertex(v) {
                return Err(CliqueError::EdgeOutOfRange { u, v, vertex_count });
            }
            g.insert_edge(u, v);
        }
        Ok(g)
    }

    /// Graph on `n` vertices without edges.
    pub fn empty(vertex_count: usize) -> Self {
        Graph {
            vertex_count,
            edges: BTreeSet::new(),
        }
    }

    /// Complete graph on `n` vertices.
    pub fn complete(n: usize) -> Self {
        let mut g = Graph::empty(n);
        for u in 1..=n {
            for v in u + 1..=n {
                g.insert_edge(u, v);
            }
        }
        g
    }

    fn contains_vertex(&self, v: usize) -> bool {
        (1..=self.vertex_count).contains(&v)
    }

    fn insert_edge(&mut self, u: usize, v: usize) -> bool {
        if u == v {
            return false;
        }
        self.edges.insert((u.min(v), u.max(v)))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        u != v && self.edges.contains(&(u.min(v), u.max(v)))
    }

    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }

    /// True when every pair of the given vertices is joined by an edge.
    pub fn is_clique(&self, vertices: &[usize]) -> bool {
        vertices.iter().enumerate().all(|(idx, &u)| {
            self.contains_vertex(u)
                && vertices[idx + 1..].iter().all(|&v| self.has_edge(u, v))
        })
    }
}

/// Parses a DIMACS-style graph instance.
///
/// `c` lines are comments, `p <name> <vertices> <edges>` declares the vertex count (the
/// edge count is only a hint and is not read), `e <u> <v>` adds an edge. Other lines are ignored.
pub fn parse_instance(input: &str) -> Result<Graph> {
    let mut graph: Option<Graph> = None;
    let mut self_loops = 0usize;
    let mut duplicates = 0usize;

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("p") => {
                if graph.is_some() {
                    return Err(CliqueError::instance(line_no, "duplicate problem line"));
                }
                let _name = parts
                    .next()
                    .ok_or_else(|| CliqueError::instance(line_no, "problem line lacks a format name"))?;
                let n = parse_count(parts.next(), line_no, "vertex count")?;
                trace!(line = line_no, vertices = n, "problem line");
                graph = Some(Graph::empty(n));
            }
            Some("e") => {
                let g = graph
                    .as_mut()
                    .ok_or_else(|| CliqueError::instance(line_no, "edge before problem line"))?;
                let u = parse_count(parts.next(), line_no, "edge endpoint")?;
                let v = parse_count(parts.next(), line_no, "edge endpoint")?;
                for w in [u, v] {
                    if !g.contains_vertex(w) {
                        return Err(CliqueError::instance(
                            line_no,
                            format!("vertex {w} outside 1..={}", g.vertex_count),
                        ));
                    }
                }
                if u == v {
                    self_loops += 1;
                } else if !g.insert_edge(u, v) {
                    duplicates += 1;
                }
            }
            Some(other) => trace!(line = line_no, tag = other, "skipping unrecognized line"),
            None => {}
        }
    }

    let graph = graph.unwrap_or_default();
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        self_loops,
        duplicates,
        "loaded instance"
    );
    Ok(graph)
}

fn parse_count(token: Option<&str>, line: usize, what: &str) -> Result<usize> {
    let token = token.ok_or_else(|| CliqueError::instance(line, format!("missing {what}")))?;
    token
        .parse()
        .map_err(|_| CliqueError::instance(line, format!("invalid {what} '{token}'")))
}
