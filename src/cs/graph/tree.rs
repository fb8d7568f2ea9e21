use num_traits::PrimInt;
use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{GraphError, Result};
use crate::graph::{Adjacency, WeightedGraph};

/// An edge of a spanning tree: `to` was attached to the tree through `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TreeEdge<V, W> {
    pub from: V,
    pub to: V,
    pub weight: W,
}

impl<V, W> TreeEdge<V, W> {
    pub fn new(from: V, to: V, weight: W) -> Self {
        Self { from, to, weight }
    }

    pub fn pair(&self) -> (&V, &V) {
        (&self.from, &self.to)
    }
}

/// Sum of the weights of `edges`.
///
/// # Errors
/// * `InvalidInput` if the sum does not fit in `W`
pub fn total_weight<V, W: PrimInt>(edges: &[TreeEdge<V, W>]) -> Result<W> {
    edges.iter().try_fold(W::zero(), |acc, e| {
        acc.checked_add(&e.weight)
            .ok_or_else(|| GraphError::invalid_input("total tree weight overflows"))
    })
}

/// Checks that `edges`, applied in order, grow a tree from `start` that
/// covers every vertex of `graph`.
///
/// Each edge must match an adjacency entry of the graph, its `from` vertex
/// must already be attached and its `to` vertex must not be. Under those
/// rules the edges can never close a cycle.
pub fn is_spanning_tree<V, W>(graph: &WeightedGraph<V, W>, start: &V, edges: &[TreeEdge<V, W>]) -> bool
where
    V: Clone + Eq + Hash,
    W: PrimInt,
{
    let Some(start_idx) = graph.index_of(start) else {
        return false;
    };
    let mut attached = vec![false; graph.vertex_count()];
    attached[start_idx] = true;

    for edge in edges {
        let (Some(u), Some(v)) = (graph.index_of(&edge.from), graph.index_of(&edge.to)) else {
            return false;
        };
        if !attached[u] || attached[v] {
            return false;
        }
        if !graph
            .adjacency_of(u)
            .iter()
            .any(|&(n, w)| n == v && w == edge.weight)
        {
            return false;
        }
        attached[v] = true;
    }

    attached.iter().all(|&a| a)
}

/// Input edges split by membership in a spanning tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeClassification<V, W> {
    pub tree: Vec<(V, V, W)>,
    pub non_tree: Vec<(V, V, W)>,
}

/// Splits input triples into tree and non-tree edges.
///
/// A triple is a tree edge when its `(source, target, weight)` matches a
/// tree edge's `(from, to, weight)`. With [`Adjacency::Symmetric`] the
/// reversed `(target, source)` also matches. Each tree edge claims at most
/// one triple, the earliest matching one, so parallel duplicates land in
/// the non-tree half. Input order is kept in both halves.
///
/// # Examples
/// ```
/// use prim_mst::graph::{build_mst, classify_edges, Adjacency, WeightedGraph};
///
/// let edges = vec![("A", "B", 1), ("B", "C", 2), ("A", "C", 5)];
/// let graph = WeightedGraph::from_edges(edges.clone(), Adjacency::AsGiven);
/// let tree = build_mst(&graph, &"A").unwrap();
///
/// let split = classify_edges(&edges, &tree, Adjacency::AsGiven);
/// assert_eq!(split.tree, vec![("A", "B", 1), ("B", "C", 2)]);
/// assert_eq!(split.non_tree, vec![("A", "C", 5)]);
/// ```
pub fn classify_edges<V, W>(
    edges: &[(V, V, W)],
    tree: &[TreeEdge<V, W>],
    adjacency: Adjacency,
) -> EdgeClassification<V, W>
where
    V: Clone + Eq + Hash,
    W: Copy + PartialEq,
{
    let mut unclaimed: HashMap<(&V, &V), Vec<usize>> = HashMap::new();
    for (i, edge) in tree.iter().enumerate() {
        unclaimed.entry(edge.pair()).or_default().push(i);
    }

    let mut split = EdgeClassification {
        tree: Vec::new(),
        non_tree: Vec::new(),
    };
    for triple in edges {
        let (source, target, weight) = triple;
        let claimed = claim(&mut unclaimed, tree, (source, target), *weight)
            || (adjacency == Adjacency::Symmetric
                && claim(&mut unclaimed, tree, (target, source), *weight));
        if claimed {
            split.tree.push(triple.clone());
        } else {
            split.non_tree.push(triple.clone());
        }
    }
    split
}

// Removes and reports the first unclaimed tree edge with this pair and weight.
fn claim<'a, V, W>(
    unclaimed: &mut HashMap<(&'a V, &'a V), Vec<usize>>,
    tree: &[TreeEdge<V, W>],
    pair: (&'a V, &'a V),
    weight: W,
) -> bool
where
    V: Eq + Hash,
    W: PartialEq,
{
    let Some(candidates) = unclaimed.get_mut(&pair) else {
        return false;
    };
    match candidates.iter().position(|&i| tree[i].weight == weight) {
        Some(pos) => {
            candidates.remove(pos);
            true
        }
        None => false,
    }
}
