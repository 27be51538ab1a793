use super::Graph;
use crate::error::{Error, Result};

/// A graph over the vertices `0..n` stored as an `n x n` matrix of edge flags. Edge queries are
/// `O(1)`; degree queries are `O(n)`.
///
/// # Examples
///
/// ```
/// use classic_ds::{AdjacencyMatrixGraph, Graph};
///
/// let mut graph = AdjacencyMatrixGraph::new(3, false).unwrap();
/// assert!(graph.add_edge(0, 2));
/// assert!(graph.contains_edge(&2, &0));
///
/// // Vertex 3 doesn't exist until the graph grows.
/// assert!(!graph.add_edge(2, 3));
/// assert!(graph.expand(4));
/// assert!(graph.add_edge(2, 3));
/// assert_eq!(graph.degree(&2), Some(2));
/// ```
#[derive(Clone, Debug)]
pub struct AdjacencyMatrixGraph {
    matrix: Vec<Vec<bool>>,
    edges: usize,
    directed: bool,
}

impl AdjacencyMatrixGraph {
    /// Creates a graph with vertices `0..vertices` and no edges.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `vertices` is 0.
    pub fn new(vertices: usize, directed: bool) -> Result<Self> {
        if vertices < 1 {
            log::debug!("rejected adjacency matrix with {} vertices", vertices);
            return Err(Error::InvalidArgument("vertices must be positive"));
        }
        Ok(Self {
            matrix: vec![vec![false; vertices]; vertices],
            edges: 0,
            directed,
        })
    }

    /// Grows the graph to `vertices` vertices, keeping existing edges. Returns `false` and does
    /// nothing if the graph already has at least that many.
    pub fn expand(&mut self, vertices: usize) -> bool {
        if vertices <= self.matrix.len() {
            return false;
        }
        log::debug!(
            "expanding adjacency matrix from {} to {} vertices",
            self.matrix.len(),
            vertices
        );
        for row in &mut self.matrix {
            row.resize(vertices, false);
        }
        self.matrix.resize(vertices, vec![false; vertices]);
        true
    }
}

impl Graph<usize> for AdjacencyMatrixGraph {
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertices(&self) -> usize {
        self.matrix.len()
    }

    fn edges(&self) -> usize {
        self.edges
    }

    fn contains_vertex(&self, vertex: &usize) -> bool {
        *vertex < self.matrix.len()
    }

    fn contains_edge(&self, from: &usize, to: &usize) -> bool {
        self.contains_vertex(from) && self.contains_vertex(to) && self.matrix[*from][*to]
    }

    fn add_edge(&mut self, from: usize, to: usize) -> bool {
        if !self.contains_vertex(&from) || !self.contains_vertex(&to) || self.matrix[from][to] {
            return false;
        }
        self.matrix[from][to] = true;
        if !self.directed {
            self.matrix[to][from] = true;
        }
        self.edges += 1;
        true
    }

    fn remove_edge(&mut self, from: &usize, to: &usize) -> bool {
        if !self.contains_edge(from, to) {
            return false;
        }
        self.matrix[*from][*to] = false;
        if !self.directed {
            self.matrix[*to][*from] = false;
        }
        self.edges -= 1;
        true
    }

    fn indegree(&self, vertex: &usize) -> Option<usize> {
        if !self.contains_vertex(vertex) {
            return None;
        }
        Some(self.matrix.iter().filter(|row| row[*vertex]).count())
    }

    fn outdegree(&self, vertex: &usize) -> Option<usize> {
        self.matrix
            .get(*vertex)
            .map(|row| row.iter().filter(|edge| **edge).count())
    }
}
