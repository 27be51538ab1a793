use std::collections::{BTreeMap, BTreeSet};

use super::Graph;

/// A graph stored as a map from each vertex to the set of vertices it has edges to. Vertices can
/// be any ordered, clonable type and are created on demand by [`add_edge`](Graph::add_edge).
///
/// # Examples
///
/// ```
/// use classic_ds::{AdjacencyListGraph, Graph};
///
/// let mut graph = AdjacencyListGraph::new(true);
/// assert!(graph.add_edge("a", "b"));
/// assert!(graph.add_edge("c", "b"));
///
/// assert_eq!(graph.vertices(), 3);
/// assert_eq!(graph.indegree(&"b"), Some(2));
/// assert_eq!(graph.degree(&"a"), Some(1));
///
/// assert!(graph.remove_vertex(&"b"));
/// assert_eq!(graph.edges(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct AdjacencyListGraph<V> {
    adjacency: BTreeMap<V, BTreeSet<V>>,
    edges: usize,
    directed: bool,
}

impl<V: Ord> Default for AdjacencyListGraph<V> {
    /// A directed graph with no vertices.
    fn default() -> Self {
        Self::new(true)
    }
}

impl<V: Ord> AdjacencyListGraph<V> {
    /// Creates a graph with no vertices.
    pub fn new(directed: bool) -> Self {
        Self {
            adjacency: BTreeMap::new(),
            edges: 0,
            directed,
        }
    }

    /// Adds `vertex` without any edges. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, BTreeSet::new());
        true
    }

    /// Removes `vertex` along with every edge touching it. Returns `false` if it wasn't present.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(outgoing) = self.adjacency.remove(vertex) else {
            return false;
        };
        self.edges -= outgoing.len();
        for neighbours in self.adjacency.values_mut() {
            // Undirected edges were already counted through `outgoing`.
            if neighbours.remove(vertex) && self.directed {
                self.edges -= 1;
            }
        }
        true
    }
}

impl<V: Ord + Clone> Graph<V> for AdjacencyListGraph<V> {
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertices(&self) -> usize {
        self.adjacency.len()
    }

    fn edges(&self) -> usize {
        self.edges
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn contains_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .map_or(false, |neighbours| neighbours.contains(to))
    }

    fn add_edge(&mut self, from: V, to: V) -> bool {
        if !self
            .adjacency
            .entry(from.clone())
            .or_default()
            .insert(to.clone())
        {
            return false;
        }
        let back = self.adjacency.entry(to).or_default();
        if !self.directed {
            back.insert(from);
        }
        self.edges += 1;
        true
    }

    fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        let removed = self
            .adjacency
            .get_mut(from)
            .map_or(false, |neighbours| neighbours.remove(to));
        if removed && !self.directed {
            if let Some(neighbours) = self.adjacency.get_mut(to) {
                neighbours.remove(from);
            }
        }
        if removed {
            self.edges -= 1;
        }
        removed
    }

    fn indegree(&self, vertex: &V) -> Option<usize> {
        if !self.directed {
            return self.outdegree(vertex);
        }
        if !self.contains_vertex(vertex) {
            return None;
        }
        Some(
            self.adjacency
                .values()
                .filter(|neighbours| neighbours.contains(vertex))
                .count(),
        )
    }

    fn outdegree(&self, vertex: &V) -> Option<usize> {
        self.adjacency.get(vertex).map(BTreeSet::len)
    }
}
