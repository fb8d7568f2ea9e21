use log::debug;
use serde::Deserialize;
use std::hash::Hash;

use crate::error::{GraphError, Result};
use crate::graph::WeightedGraph;

/// Ordered `(source, target, weight)` triples.
pub type EdgeList<V, W> = Vec<(V, V, W)>;

/// How an input triple is turned into adjacency entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Adjacency {
    /// Only `source -> target` is recorded for each triple.
    #[default]
    AsGiven,
    /// Both `source -> target` and `target -> source` are recorded.
    Symmetric,
}

impl<V, W> WeightedGraph<V, W>
where
    V: Clone + Eq + Hash,
    W: Copy,
{
    /// Builds a graph from weighted triples.
    ///
    /// For each triple the source is registered before the target, so the
    /// first triple's source becomes [`WeightedGraph::first_vertex`].
    ///
    /// # Examples
    /// ```
    /// use prim_mst::graph::{Adjacency, WeightedGraph};
    ///
    /// let edges = vec![("A", "B", 1), ("B", "C", 2), ("A", "C", 5)];
    /// let graph = WeightedGraph::from_edges(edges, Adjacency::AsGiven);
    ///
    /// assert_eq!(graph.vertices(), &["A", "B", "C"]);
    /// assert_eq!(graph.first_vertex(), Some(&"A"));
    /// ```
    pub fn from_edges<I>(edges: I, adjacency: Adjacency) -> Self
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = Self::new();
        for (source, target, weight) in edges {
            match adjacency {
                Adjacency::AsGiven => graph.add_edge(source, target, weight),
                Adjacency::Symmetric => graph.add_undirected_edge(source, target, weight),
            }
        }
        graph
    }
}

/// A single JSON cell of an edge row.
#[derive(Deserialize)]
#[serde(untagged)]
enum Cell {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    fn into_vertex(self, index: usize) -> Result<String> {
        match self {
            Cell::Int(n) => Ok(n.to_string()),
            Cell::Float(f) => Err(GraphError::malformed(
                index,
                format!("vertex {f} is not a string or an integer"),
            )),
            Cell::Text(s) => Ok(s),
        }
    }

    // Floats truncate toward zero; strings must hold an integer.
    fn into_weight(self, index: usize) -> Result<i64> {
        match self {
            Cell::Int(n) => Ok(n),
            Cell::Float(f) if f.is_finite() && f.trunc().abs() < i64::MAX as f64 => {
                Ok(f.trunc() as i64)
            }
            Cell::Float(f) => Err(GraphError::malformed(
                index,
                format!("weight {f} is not representable as an integer"),
            )),
            Cell::Text(s) => s.trim().parse::<i64>().map_err(|_| {
                GraphError::malformed(index, format!("weight {s:?} is not an integer"))
            }),
        }
    }
}

/// Parses a JSON array of `[source, target, weight]` rows.
///
/// Vertex cells may be strings or integers. Integers become their decimal
/// text, so the vertices `1` and `"1"` are the same vertex. Fractional
/// vertex numbers are rejected. Weight cells may be numbers or strings
/// holding an integer. Cells past the third are ignored.
///
/// # Examples
/// ```
/// use prim_mst::graph::parse_json_edges;
///
/// let edges = parse_json_edges(r#"[["A", "B", 1], ["B", "C", "2"]]"#).unwrap();
/// assert_eq!(edges[1], ("B".to_string(), "C".to_string(), 2));
/// ```
///
/// # Errors
/// * `Json` if the text is not an array of arrays of strings and numbers
/// * `MalformedEdge` if a row is too short, a vertex is a fractional number,
///   or a weight is not an integer
pub fn parse_json_edges(json: &str) -> Result<EdgeList<String, i64>> {
    let rows: Vec<Vec<Cell>> = serde_json::from_str(json)?;

    let mut edges = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        let mut cells = row.into_iter();
        let (Some(source), Some(target), Some(weight)) = (cells.next(), cells.next(), cells.next())
        else {
            return Err(GraphError::malformed(
                index,
                "expected [source, target, weight]",
            ));
        };
        edges.push((
            source.into_vertex(index)?,
            target.into_vertex(index)?,
            weight.into_weight(index)?,
        ));
    }

    debug!("parsed {} edges from JSON input", edges.len());
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_edges_as_given() {
        let graph = WeightedGraph::from_edges(vec![("A", "B", 1), ("C", "A", 4)], Adjacency::AsGiven);

        assert_eq!(graph.vertices(), &["A", "B", "C"]);
        assert_eq!(graph.entry_count(), 2);
        assert_eq!(graph.neighbors(&"A").unwrap().count(), 1);
        assert_eq!(graph.neighbors(&"B").unwrap().count(), 0);
    }

    #[test]
    fn test_from_edges_symmetric() {
        let graph = WeightedGraph::from_edges(vec![("A", "B", 1), ("C", "A", 4)], Adjacency::Symmetric);

        assert_eq!(graph.entry_count(), 4);
        let from_a: Vec<_> = graph.neighbors(&"A").unwrap().collect();
        assert_eq!(from_a, vec![(&"B", 1), (&"C", 4)]);
    }

    #[test]
    fn test_parse_json_edges() {
        let edges = parse_json_edges(r#"[["A", "B", 3], ["B", "C", " 7 "], [1, "2", 4.9]]"#).unwrap();

        assert_eq!(
            edges,
            vec![
                ("A".to_string(), "B".to_string(), 3),
                ("B".to_string(), "C".to_string(), 7),
                ("1".to_string(), "2".to_string(), 4),
            ]
        );
    }

    #[test]
    fn test_parse_json_ignores_extra_cells() {
        let edges = parse_json_edges(r#"[["A", "B", 3, "extra"]]"#).unwrap();
        assert_eq!(edges, vec![("A".to_string(), "B".to_string(), 3)]);
    }

    #[test]
    fn test_parse_json_empty_list() {
        assert!(parse_json_edges("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_json_short_row() {
        let err = parse_json_edges(r#"[["A", "B", 1], ["A", "C"]]"#).unwrap_err();
        assert!(matches!(err, GraphError::MalformedEdge { index: 1, .. }));
    }

    #[test]
    fn test_parse_json_rejects_fractional_vertex() {
        let err = parse_json_edges(r#"[[1, 2, 1], [1.0, 2, 1]]"#).unwrap_err();
        assert!(matches!(err, GraphError::MalformedEdge { index: 1, .. }));

        let err = parse_json_edges(r#"[["A", 2.5, 1]]"#).unwrap_err();
        assert!(matches!(err, GraphError::MalformedEdge { index: 0, .. }));
    }

    #[test]
    fn test_parse_json_bad_weight() {
        let err = parse_json_edges(r#"[["A", "B", "heavy"]]"#).unwrap_err();
        assert!(matches!(err, GraphError::MalformedEdge { index: 0, .. }));
    }

    #[test]
    fn test_parse_json_not_an_edge_list() {
        assert!(matches!(
            parse_json_edges(r#"{"A": "B"}"#),
            Err(GraphError::Json(_))
        ));
        assert!(matches!(
            parse_json_edges(r#"[["A", null, 1]]"#),
            Err(GraphError::Json(_))
        ));
    }
}
