pub mod input;
pub mod kruskal;
pub mod prim;
pub mod prim_heap;
pub mod tree;

use num_traits::PrimInt;
use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{GraphError, Result};

pub use input::{parse_json_edges, Adjacency, EdgeList};
pub use prim::{build_mst, build_mst_with, DisconnectPolicy, PrimConfig};
pub use tree::{classify_edges, is_spanning_tree, total_weight, EdgeClassification, TreeEdge};

/// A weighted graph stored as per-vertex adjacency lists.
///
/// Vertex tokens are mapped to dense indices in first-occurrence order, and
/// adjacency entries keep the order in which they were added. Algorithms in
/// this module scan vertices and entries in that order, so it determines
/// tie-breaking.
///
/// Entries are directed: `add_edge(a, b, w)` only records `a -> (b, w)`.
/// Use [`WeightedGraph::add_undirected_edge`] or [`Adjacency::Symmetric`]
/// to record both directions.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V, W> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<V, W> Default for WeightedGraph<V, W> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }
}

impl<V, W> WeightedGraph<V, W>
where
    V: Clone + Eq + Hash,
    W: Copy,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `v` if it is new and returns its dense index.
    pub fn add_vertex(&mut self, v: V) -> usize {
        if let Some(&idx) = self.index.get(&v) {
            return idx;
        }
        let idx = self.vertices.len();
        self.index.insert(v.clone(), idx);
        self.vertices.push(v);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Records the adjacency entry `from -> (to, weight)`, registering
    /// `from` before `to` when either is new.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) {
        let u = self.add_vertex(from);
        let v = self.add_vertex(to);
        self.adjacency[u].push((v, weight));
    }

    /// Records `from -> (to, weight)` and `to -> (from, weight)`.
    pub fn add_undirected_edge(&mut self, from: V, to: V, weight: W) {
        let u = self.add_vertex(from);
        let v = self.add_vertex(to);
        self.adjacency[u].push((v, weight));
        self.adjacency[v].push((u, weight));
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of adjacency entries (an undirected edge counts twice).
    pub fn entry_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn has_vertex(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    pub fn index_of(&self, v: &V) -> Option<usize> {
        self.index.get(v).copied()
    }

    /// Vertex tokens in insertion order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// The first vertex ever registered, which is the default start vertex.
    pub fn first_vertex(&self) -> Option<&V> {
        self.vertices.first()
    }

    /// Adjacency entries of `v` in insertion order.
    pub fn neighbors<'a>(&'a self, v: &V) -> Option<impl Iterator<Item = (&'a V, W)> + 'a> {
        let u = self.index_of(v)?;
        Some(
            self.adjacency[u]
                .iter()
                .map(move |&(w_idx, weight)| (&self.vertices[w_idx], weight)),
        )
    }

    pub(crate) fn vertex(&self, idx: usize) -> &V {
        &self.vertices[idx]
    }

    pub(crate) fn adjacency_of(&self, idx: usize) -> &[(usize, W)] {
        &self.adjacency[idx]
    }

    /// Every adjacency entry as `(u, v, weight)` indices, vertex-major in
    /// insertion order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, list)| list.iter().map(move |&(v, w)| (u, v, w)))
    }
}

impl<V, W> WeightedGraph<V, W>
where
    V: Clone + Eq + Hash,
    W: PrimInt,
{
    /// Largest weight over all adjacency entries, `None` when there are none.
    pub fn max_weight(&self) -> Option<W> {
        self.entries().map(|(_, _, w)| w).max()
    }

    /// Checks the preconditions shared by the spanning tree builders and
    /// returns the index of `start`.
    pub(crate) fn validate_start(&self, start: &V) -> Result<usize> {
        if self.is_empty() {
            return Err(GraphError::invalid_input("graph has no vertices"));
        }
        let start_idx = self
            .index_of(start)
            .ok_or_else(|| GraphError::invalid_input("start vertex is not in the graph"))?;
        if self.entries().any(|(_, _, w)| w < W::zero()) {
            return Err(GraphError::invalid_input(
                "spanning tree construction requires non-negative weights",
            ));
        }
        Ok(start_idx)
    }
}
