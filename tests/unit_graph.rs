// tests/unit_graph.rs
//! Behavior of the labeled graph and of co-membership collapsing.

use std::collections::{BTreeMap, BTreeSet};

use costar_core::error::GraphError;
use costar_core::graph::{build_graph, LabeledGraph};

fn s(v: &str) -> String {
    v.to_string()
}

#[test]
fn test_undirected_edges_balance_degrees() {
    let mut g: LabeledGraph<String, u32> = LabeledGraph::new();
    g.insert_undirected(s("a"), s("b"), 1).unwrap();
    g.insert_undirected(s("a"), s("c"), 2).unwrap();
    g.insert_undirected(s("c"), s("d"), 3).unwrap();
    g.insert_vertex(s("e"));

    for v in g.vertices() {
        assert_eq!(g.out_degree(v.as_str()).unwrap(), g.in_degree(v.as_str()).unwrap(), "{v}");
    }
    assert_eq!(g.num_edges(), 6);
    assert_eq!(g.num_vertices(), 5);
}

#[test]
fn test_undirected_pair_shares_one_label() {
    let mut g: LabeledGraph<String, Vec<&str>> = LabeledGraph::new();
    g.insert_undirected(s("x"), s("y"), vec!["first"]).unwrap();
    g.label_mut("y", "x").unwrap().push("second");

    assert_eq!(g.label("x", "y").unwrap(), &vec!["first", "second"]);
    assert_eq!(g.edge_slot("x", "y").unwrap(), g.edge_slot("y", "x").unwrap());
}

#[test]
fn test_duplicate_undirected_insert_is_rejected() {
    let mut g: LabeledGraph<String, u32> = LabeledGraph::new();
    g.insert_undirected(s("x"), s("y"), 1).unwrap();
    assert_eq!(g.insert_undirected(s("y"), s("x"), 9), Err(GraphError::EdgeExists));
    assert_eq!(g.label("y", "x"), Ok(&1));
    assert_eq!(g.num_edges(), 2);
}

#[test]
fn test_directed_overwrite_detaches_reverse_label() {
    let mut g: LabeledGraph<String, u32> = LabeledGraph::new();
    g.insert_undirected(s("x"), s("y"), 1).unwrap();
    g.insert_directed(s("x"), s("y"), 7);

    assert_eq!(g.label("x", "y"), Ok(&7));
    assert_eq!(g.label("y", "x"), Ok(&1));
    assert_eq!(g.num_edges(), 2);
}

#[test]
fn test_lookup_errors() {
    let mut g: LabeledGraph<String, u32> = LabeledGraph::new();
    g.insert_directed(s("x"), s("y"), 1);

    assert_eq!(g.label("x", "nobody"), Err(GraphError::VertexNotFound));
    assert_eq!(g.label("y", "x"), Err(GraphError::EdgeNotFound));
    assert!(g.out_neighbors("nobody").is_err());
    assert_eq!(g.in_neighbors("y").unwrap().collect::<Vec<_>>(), vec!["x"]);
}

#[test]
fn test_collapse_records_every_shared_group() {
    let groups = BTreeMap::from([
        (s("Apollo 13"), vec![s("Kevin Bacon"), s("Tom Hanks"), s("Bill Paxton")]),
        (s("Sleepless in Seattle"), vec![s("Tom Hanks"), s("Meg Ryan")]),
        (s("Big"), vec![s("Tom Hanks"), s("Meg Ryan"), s("Tom Hanks")]),
    ]);
    let actors = ["Kevin Bacon", "Tom Hanks", "Bill Paxton", "Meg Ryan", "Nobody"].map(s);
    let g = build_graph(actors, groups).unwrap();

    assert_eq!(g.num_vertices(), 5);
    // 4 undirected pairs
    assert_eq!(g.num_edges(), 8);
    assert_eq!(
        g.label("Meg Ryan", "Tom Hanks").unwrap(),
        &BTreeSet::from([s("Big"), s("Sleepless in Seattle")])
    );
    assert_eq!(g.out_degree("Nobody").unwrap(), 0);
    assert!(!g.has_edge("Tom Hanks", "Tom Hanks"));
}

#[test]
fn test_collapse_ignores_group_order() {
    let a = BTreeMap::from([(1, vec!["p", "q", "r"]), (2, vec!["q", "s"])]);
    let b = vec![(2, vec!["s", "q"]), (1, vec!["r", "q", "p"])];
    let ga = build_graph(["p", "q", "r", "s"], a).unwrap();
    let gb = build_graph(["p", "q", "r", "s"], b).unwrap();

    assert_eq!(ga.num_edges(), gb.num_edges());
    for x in ["p", "q", "r", "s"] {
        for y in ["p", "q", "r", "s"] {
            assert_eq!(ga.label(&x, &y).ok(), gb.label(&x, &y).ok(), "{x} -> {y}");
        }
    }
}
