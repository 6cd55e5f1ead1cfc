use fixed_graph::{EdgePolicy, FixedGraph, GraphError, GraphOptions};
use std::collections::BTreeSet;

fn graph_of(capacity: usize, vertices: &[&'static str]) -> FixedGraph<&'static str> {
    let mut g = FixedGraph::new(capacity);
    for &v in vertices {
        g.add_vertex(v).unwrap();
    }
    g
}

#[test]
fn vertex_count_tracks_successful_inserts() {
    for capacity in 1..8 {
        let mut g = FixedGraph::new(capacity);
        for n in 0..capacity {
            g.add_vertex(n).unwrap();
            assert_eq!(g.vertex_count(), n + 1);
        }
        assert!(g.is_full());
        assert_eq!(g.add_vertex(capacity), Err(GraphError::GraphFull { capacity }));
        assert_eq!(g.vertex_count(), capacity);
    }
}

#[test]
fn two_components_from_single_edge() {
    let mut g = graph_of(3, &["A", "B", "C"]);
    g.add_edge("A", "B").unwrap();

    let components = g.connected_components();
    assert_eq!(components.len(), 2);
    assert_eq!(components[0], BTreeSet::from(["A", "B"]));
    assert_eq!(components[1], BTreeSet::from(["C"]));
}

#[test]
fn chain_is_fully_reachable() {
    let mut g = graph_of(4, &["A", "B", "C", "D"]);
    g.add_edge("A", "B").unwrap();
    g.add_edge("B", "C").unwrap();
    g.add_edge("C", "D").unwrap();

    assert_eq!(g.dfs_visit(&"A").unwrap(), BTreeSet::from(["A", "B", "C", "D"]));
    assert_eq!(g.dfs_visit(&"D").unwrap(), BTreeSet::from(["A", "B", "C", "D"]));
}

#[test]
fn duplicate_vertex_is_rejected() {
    let mut g = FixedGraph::new(2);
    g.add_vertex("A").unwrap();
    assert_eq!(g.add_vertex("A"), Err(GraphError::VertexExists));
    assert_eq!(g.vertices().copied().collect::<Vec<_>>(), vec!["A"]);
}

#[test]
fn full_graph_rejects_vertex() {
    let mut g = FixedGraph::new(1);
    g.add_vertex("A").unwrap();
    assert_eq!(g.add_vertex("B"), Err(GraphError::GraphFull { capacity: 1 }));
}

#[test]
fn self_loop_never_changes_edges() {
    let mut g = graph_of(2, &["A", "B"]);
    g.add_edge("A", "B").unwrap();
    for v in ["A", "B", "Z"] {
        assert_eq!(g.add_edge(v, v), Ok(false));
        assert_eq!(g.edge_count(), 1);
    }
}

#[test]
fn reversed_edge_is_the_same_edge() {
    let mut g = graph_of(2, &["A", "B"]);
    g.add_edge("A", "B").unwrap();
    g.add_edge("B", "A").unwrap();
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.neighbors(&"A").count(), 1);
    assert_eq!(g.neighbors(&"B").count(), 1);
}

#[test]
fn neighbors_of_middle_vertex() {
    let mut g = graph_of(3, &["a", "b", "c"]);
    g.add_edge("a", "b").unwrap();
    g.add_edge("b", "c").unwrap();

    let nbrs: BTreeSet<_> = g.neighbors(&"b").copied().collect();
    assert_eq!(nbrs, BTreeSet::from(["a", "c"]));
}

#[test]
fn strict_graph_reports_every_rejection() {
    let mut g = FixedGraph::with_options(2, GraphOptions::strict());
    g.add_vertex(1).unwrap();
    g.add_vertex(2).unwrap();

    assert_eq!(g.add_edge(1, 3), Err(GraphError::UnknownVertex));
    assert_eq!(g.add_edge(1, 1), Err(GraphError::SelfLoop));
    assert_eq!(g.add_edge(1, 2), Ok(true));
    assert_eq!(g.add_edge(2, 1), Err(GraphError::DuplicateEdge));
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn reject_policy_still_accepts_dangling_endpoints() {
    let opts = GraphOptions::new().with_edge_policy(EdgePolicy::Reject);
    let mut g = FixedGraph::with_options(2, opts);
    g.add_vertex(1).unwrap();
    assert_eq!(g.add_edge(1, 9), Ok(true));
    assert_eq!(g.dfs_visit(&1).unwrap(), BTreeSet::from([1]));
}

#[test]
fn marks_reflect_last_traversal() {
    let mut g = graph_of(4, &["A", "B", "C", "D"]);
    g.add_edge("A", "B").unwrap();
    g.add_edge("C", "D").unwrap();

    let _ = g.connected_components();
    // The last search started at C.
    assert_eq!(g.is_marked(&"C"), Ok(true));
    assert_eq!(g.is_marked(&"D"), Ok(true));
    assert_eq!(g.is_marked(&"A"), Ok(false));

    g.clear_marks();
    assert!(g.vertices().all(|v| g.is_marked(v) == Ok(false)));
}
