use anyhow::Context;
use clap::Parser;
use log::info;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;

use prim_mst::graph::{
    build_mst_with, classify_edges, parse_json_edges, prim_heap, total_weight, Adjacency,
    DisconnectPolicy, PrimConfig, TreeEdge, WeightedGraph,
};

/// Computes a minimum spanning tree from a JSON edge list
#[derive(Parser, Debug)]
#[command(name = "prim-mst")]
#[command(about = "Minimum spanning tree of a weighted edge list", long_about = None)]
struct Args {
    /// JSON file of [source, target, weight] rows; reads stdin when omitted or "-"
    input: Option<PathBuf>,

    /// Start vertex (defaults to the source of the first edge)
    #[arg(long)]
    start: Option<String>,

    /// Record every edge in both directions
    #[arg(long)]
    symmetric: bool,

    /// Fail instead of returning a partial tree when vertices are unreachable
    #[arg(long)]
    strict: bool,

    /// Use the binary-heap builder
    #[arg(long)]
    heap: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    tree: Vec<(String, String, i64)>,
    total_weight: i64,
    non_tree: Vec<(String, String, i64)>,
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

/// Builds the report for a JSON edge list under the options in `args`.
fn build_report(text: &str, args: &Args) -> anyhow::Result<Report> {
    let edges = parse_json_edges(text)?;
    let adjacency = if args.symmetric {
        Adjacency::Symmetric
    } else {
        Adjacency::AsGiven
    };
    let graph = WeightedGraph::from_edges(edges.iter().cloned(), adjacency);

    let start = match &args.start {
        Some(s) => s.clone(),
        None => graph
            .first_vertex()
            .cloned()
            .context("edge list is empty")?,
    };
    let config = PrimConfig {
        on_disconnect: if args.strict {
            DisconnectPolicy::Fail
        } else {
            DisconnectPolicy::Partial
        },
    };
    info!(
        "{} vertices, {} edges, start {start:?}",
        graph.vertex_count(),
        edges.len()
    );

    let tree: Vec<TreeEdge<String, i64>> = if args.heap {
        prim_heap::minimum_spanning_tree(&graph, &start, &config)?
    } else {
        build_mst_with(&graph, &start, &config)?
    };

    let split = classify_edges(&edges, &tree, adjacency);
    Ok(Report {
        total_weight: total_weight(&tree)?,
        tree: tree.into_iter().map(|e| (e.from, e.to, e.weight)).collect(),
        non_tree: split.non_tree,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = read_input(args.input.as_ref())?;
    let report = build_report(&text, &args)?;
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use prim_mst::GraphError;

    fn args(flags: &[&str]) -> Args {
        Args::parse_from(std::iter::once("prim-mst").chain(flags.iter().copied()))
    }

    fn triple(u: &str, v: &str, w: i64) -> (String, String, i64) {
        (u.to_string(), v.to_string(), w)
    }

    const TRIANGLE: &str = r#"[["A", "B", 1], ["B", "C", 2], ["A", "C", 5]]"#;

    #[test]
    fn test_report_defaults_to_first_vertex() {
        let report = build_report(TRIANGLE, &args(&[])).unwrap();

        assert_eq!(report.tree, vec![triple("A", "B", 1), triple("B", "C", 2)]);
        assert_eq!(report.total_weight, 3);
        assert_eq!(report.non_tree, vec![triple("A", "C", 5)]);
    }

    #[test]
    fn test_report_json_shape() {
        let report = build_report(TRIANGLE, &args(&[])).unwrap();

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({
                "tree": [["A", "B", 1], ["B", "C", 2]],
                "total_weight": 3,
                "non_tree": [["A", "C", 5]]
            })
        );
    }

    #[test]
    fn test_report_explicit_start() {
        let report = build_report(TRIANGLE, &args(&["--start", "B"])).unwrap();

        assert_eq!(report.tree, vec![triple("B", "C", 2)]);
        assert_eq!(report.total_weight, 2);
    }

    #[test]
    fn test_report_symmetric_keeps_reversed_tree_edges() {
        let text = r#"[["A", "B", 1], ["C", "A", 1]]"#;
        let report = build_report(text, &args(&["--symmetric"])).unwrap();

        assert_eq!(report.tree, vec![triple("A", "B", 1), triple("A", "C", 1)]);
        assert!(report.non_tree.is_empty());
    }

    #[test]
    fn test_report_heap_builder() {
        let report = build_report(TRIANGLE, &args(&["--heap", "--symmetric"])).unwrap();
        assert_eq!(report.total_weight, 3);
        assert_eq!(report.non_tree, vec![triple("A", "C", 5)]);
    }

    #[test]
    fn test_report_disconnected_policy() {
        let text = r#"[["A", "B", 1], ["C", "D", 1]]"#;

        let report = build_report(text, &args(&[])).unwrap();
        assert_eq!(report.tree, vec![triple("A", "B", 1)]);
        assert_eq!(report.non_tree, vec![triple("C", "D", 1)]);

        let err = build_report(text, &args(&["--strict"])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GraphError>(),
            Some(GraphError::DisconnectedGraph { .. })
        ));
    }

    #[test]
    fn test_report_empty_edge_list() {
        assert!(build_report("[]", &args(&[])).is_err());
    }
}
