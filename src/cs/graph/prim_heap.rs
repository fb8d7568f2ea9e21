use log::{debug, trace};
use num_traits::PrimInt;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use crate::error::{GraphError, Result};
use crate::graph::prim::{DisconnectPolicy, PrimConfig};
use crate::graph::{TreeEdge, WeightedGraph};

/// Entry in the priority queue for Prim's algorithm
#[derive(Copy, Clone, Debug)]
struct Candidate<W> {
    cost: W,
    seq: usize,
    parent: usize,
    vertex: usize,
}

impl<W: Ord> Eq for Candidate<W> {}

impl<W: Ord> PartialEq for Candidate<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Ord> PartialOrd for Candidate<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Ord> Ord for Candidate<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap; earlier pushes win ties
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Computes a minimum spanning tree with a binary-heap Prim.
///
/// Accepts the same inputs and applies the same checks and disconnection
/// policy as [`crate::graph::prim::build_mst_with`]. The selected tree has
/// the same total weight and covers the same vertices on undirected
/// graphs, but equal-weight ties may resolve to different edges.
///
/// # Examples
/// ```
/// use prim_mst::graph::{prim_heap, total_weight, Adjacency, PrimConfig, WeightedGraph};
///
/// let graph = WeightedGraph::from_edges(
///     vec![(0, 1, 4), (0, 2, 2), (1, 2, 1), (1, 3, 3), (2, 3, 5)],
///     Adjacency::Symmetric,
/// );
/// let tree = prim_heap::minimum_spanning_tree(&graph, &0, &PrimConfig::default()).unwrap();
/// assert_eq!(total_weight(&tree).unwrap(), 6);
/// ```
///
/// # Complexity
/// * Time: O(E log E) where E is the number of adjacency entries
/// * Space: O(V + E)
pub fn minimum_spanning_tree<V, W>(
    graph: &WeightedGraph<V, W>,
    start: &V,
    config: &PrimConfig,
) -> Result<Vec<TreeEdge<V, W>>>
where
    V: Clone + Eq + Hash,
    W: PrimInt,
{
    let start_idx = graph.validate_start(start)?;
    let n = graph.vertex_count();

    let mut visited = vec![false; n];
    let mut tree = Vec::with_capacity(n.saturating_sub(1));
    let mut heap = BinaryHeap::new();
    let mut seq = 0usize;

    visited[start_idx] = true;
    push_entries(graph, start_idx, &visited, &mut heap, &mut seq);

    while let Some(Candidate {
        cost,
        parent,
        vertex,
        ..
    }) = heap.pop()
    {
        if visited[vertex] {
            continue;
        }
        visited[vertex] = true;
        trace!("attached vertex #{vertex} via #{parent}");
        tree.push(TreeEdge::new(
            graph.vertex(parent).clone(),
            graph.vertex(vertex).clone(),
            cost,
        ));
        if tree.len() + 1 == n {
            break;
        }
        push_entries(graph, vertex, &visited, &mut heap, &mut seq);
    }

    let reached = tree.len() + 1;
    if reached < n {
        debug!("heap prim reached {reached} of {n} vertices");
        if config.on_disconnect == DisconnectPolicy::Fail {
            return Err(GraphError::DisconnectedGraph { reached, total: n });
        }
    }
    Ok(tree)
}

fn push_entries<V, W>(
    graph: &WeightedGraph<V, W>,
    from: usize,
    visited: &[bool],
    heap: &mut BinaryHeap<Candidate<W>>,
    seq: &mut usize,
) where
    V: Clone + Eq + Hash,
    W: PrimInt,
{
    for &(to, cost) in graph.adjacency_of(from) {
        if !visited[to] {
            heap.push(Candidate {
                cost,
                seq: *seq,
                parent: from,
                vertex: to,
            });
            *seq += 1;
        }
    }
}
