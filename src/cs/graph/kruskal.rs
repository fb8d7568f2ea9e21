use log::{debug, trace};
use num_traits::PrimInt;
use std::hash::Hash;

use crate::error::{GraphError, Result};
use crate::graph::{TreeEdge, WeightedGraph};

/// Disjoint-set (union-find) for cycle detection in Kruskal's algorithm.
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    /// Initializes a union-find for `n` elements (0..n-1).
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Finds the representative (root) of the set containing `x`.
    /// Uses path compression.
    pub fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    /// Unites the sets containing `x` and `y` by rank.
    /// Returns `true` if a union actually occurred (i.e., they were disjoint).
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }

        if self.rank[rx] < self.rank[ry] {
            self.parent[rx] = ry;
        } else {
            self.parent[ry] = rx;
            if self.rank[rx] == self.rank[ry] {
                self.rank[rx] += 1;
            }
        }
        true
    }
}

/// Kruskal's algorithm over every adjacency entry of `graph`, each treated
/// as an undirected edge.
///
/// Returns a minimum spanning forest: one tree per connected component,
/// with edges in the order they were accepted. Equal weights keep the
/// graph's entry order.
///
/// # Errors
/// * `InvalidInput` if any weight is negative
pub fn minimum_spanning_forest<V, W>(graph: &WeightedGraph<V, W>) -> Result<Vec<TreeEdge<V, W>>>
where
    V: Clone + Eq + Hash,
    W: PrimInt,
{
    let mut entries: Vec<(usize, usize, W)> = graph.entries().collect();
    if entries.iter().any(|&(_, _, w)| w < W::zero()) {
        return Err(GraphError::invalid_input(
            "Kruskal's algorithm requires non-negative weights",
        ));
    }
    entries.sort_by_key(|&(_, _, w)| w);

    let n = graph.vertex_count();
    let mut uf = UnionFind::new(n);
    let mut forest = Vec::with_capacity(n.saturating_sub(1));

    for (u, v, w) in entries {
        if uf.union(u, v) {
            trace!("accepted #{u} - #{v}");
            forest.push(TreeEdge::new(
                graph.vertex(u).clone(),
                graph.vertex(v).clone(),
                w,
            ));
            if forest.len() + 1 == n {
                break;
            }
        }
    }

    debug!("kruskal kept {} edges over {} vertices", forest.len(), n);
    Ok(forest)
}
