//! Graph representations. Both store edges only; there are no traversal algorithms here.
//!
//! An undirected edge `a - b` counts as one edge and shows up in the neighbourhood of both
//! endpoints.

mod list;
mod matrix;

pub use list::AdjacencyListGraph;
pub use matrix::AdjacencyMatrixGraph;

/// The operations shared by every graph representation, over vertices of type `V`.
pub trait Graph<V> {
    /// Whether edges have a direction.
    fn is_directed(&self) -> bool;

    /// How many vertices the graph has.
    fn vertices(&self) -> usize;

    /// How many edges the graph has.
    fn edges(&self) -> usize;

    /// Whether `vertex` is part of the graph.
    fn contains_vertex(&self, vertex: &V) -> bool;

    /// Whether there is an edge from `from` to `to`.
    fn contains_edge(&self, from: &V, to: &V) -> bool;

    /// Adds an edge from `from` to `to`. Returns `false` if the edge already existed or can't be
    /// added.
    fn add_edge(&mut self, from: V, to: V) -> bool;

    /// Removes the edge from `from` to `to`. Returns `false` if there was no such edge.
    fn remove_edge(&mut self, from: &V, to: &V) -> bool;

    /// How many edges end at `vertex`, or `None` if it is not in the graph.
    fn indegree(&self, vertex: &V) -> Option<usize>;

    /// How many edges start at `vertex`, or `None` if it is not in the graph.
    fn outdegree(&self, vertex: &V) -> Option<usize>;

    /// How many edges touch `vertex`, or `None` if it is not in the graph. For a directed graph
    /// this is the indegree plus the outdegree.
    fn degree(&self, vertex: &V) -> Option<usize> {
        let out = self.outdegree(vertex)?;
        if self.is_directed() {
            Some(out + self.indegree(vertex)?)
        } else {
            Some(out)
        }
    }
}
