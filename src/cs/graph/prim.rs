use log::{debug, trace};
use num_traits::PrimInt;
use std::hash::Hash;

use crate::error::{GraphError, Result};
use crate::graph::{TreeEdge, WeightedGraph};

/// What to do when some vertices cannot be reached from the start vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisconnectPolicy {
    /// Stop and return the edges attached so far.
    #[default]
    Partial,
    /// Return [`GraphError::DisconnectedGraph`].
    Fail,
}

/// Configuration options for the spanning tree builders.
#[derive(Debug, Clone, Default)]
pub struct PrimConfig {
    pub on_disconnect: DisconnectPolicy,
}

/// Computes a minimum spanning tree rooted at `start` with Prim's algorithm,
/// using the default [`PrimConfig`].
///
/// See [`build_mst_with`].
///
/// # Examples
/// ```
/// use prim_mst::graph::{build_mst, Adjacency, TreeEdge, WeightedGraph};
///
/// let graph = WeightedGraph::from_edges(
///     vec![("A", "B", 1), ("B", "C", 2), ("A", "C", 5)],
///     Adjacency::AsGiven,
/// );
///
/// let tree = build_mst(&graph, &"A").unwrap();
/// assert_eq!(tree, vec![TreeEdge::new("A", "B", 1), TreeEdge::new("B", "C", 2)]);
/// ```
pub fn build_mst<V, W>(graph: &WeightedGraph<V, W>, start: &V) -> Result<Vec<TreeEdge<V, W>>>
where
    V: Clone + Eq + Hash,
    W: PrimInt,
{
    build_mst_with(graph, start, &PrimConfig::default())
}

/// Computes a minimum spanning tree rooted at `start` with Prim's algorithm.
///
/// Each round rescans every adjacency entry `u -> (v, d)`, vertices in
/// insertion order and entries in insertion order, and attaches the first
/// entry of minimum weight with `u` in the tree and `v` outside it. Only the
/// direction recorded in the graph is followed.
///
/// Edges are returned in the order their target vertices were attached.
///
/// # Arguments
/// * `graph` - The graph to span
/// * `start` - The root of the tree
/// * `config` - Disconnection policy
///
/// # Complexity
/// * Time: O(V * E) where E is the number of adjacency entries
/// * Space: O(V)
///
/// # Errors
/// * `InvalidInput` if the graph is empty, `start` is not a vertex, a weight
///   is negative, or the largest weight leaves no room for a sentinel
/// * `DisconnectedGraph` if a vertex is unreachable and the policy is
///   [`DisconnectPolicy::Fail`]
pub fn build_mst_with<V, W>(
    graph: &WeightedGraph<V, W>,
    start: &V,
    config: &PrimConfig,
) -> Result<Vec<TreeEdge<V, W>>>
where
    V: Clone + Eq + Hash,
    W: PrimInt,
{
    let start_idx = graph.validate_start(start)?;
    let infinity = sentinel(graph)?;
    let n = graph.vertex_count();
    debug!(
        "prim scan over {} vertices and {} entries",
        n,
        graph.entry_count()
    );

    let mut visited = vec![false; n];
    let mut tree = Vec::with_capacity(n.saturating_sub(1));
    visited[start_idx] = true;

    for _ in 1..n {
        let mut min_dist = infinity;
        let mut next = None;
        for (u, v, d) in graph.entries() {
            if visited[u] && !visited[v] && d < min_dist {
                min_dist = d;
                next = Some((u, v));
            }
        }

        let Some((u, v)) = next else {
            let reached = tree.len() + 1;
            debug!("no edge leaves the tree after {reached} of {n} vertices");
            match config.on_disconnect {
                DisconnectPolicy::Partial => break,
                DisconnectPolicy::Fail => {
                    return Err(GraphError::DisconnectedGraph { reached, total: n })
                }
            }
        };

        visited[v] = true;
        trace!("attached vertex #{v} via #{u}");
        tree.push(TreeEdge::new(
            graph.vertex(u).clone(),
            graph.vertex(v).clone(),
            min_dist,
        ));
    }

    Ok(tree)
}

/// One more than the largest weight, or one for a graph without entries.
fn sentinel<V, W>(graph: &WeightedGraph<V, W>) -> Result<W>
where
    V: Clone + Eq + Hash,
    W: PrimInt,
{
    match graph.max_weight() {
        None => Ok(W::one()),
        Some(max) => max
            .checked_add(&W::one())
            .ok_or_else(|| GraphError::invalid_input("edge weight too large for sentinel")),
    }
}
