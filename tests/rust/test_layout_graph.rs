use super::*;

fn nodes(ids: &[&str]) -> Vec<Node> {
    ids.iter().map(|id| Node::bare(*id)).collect()
}

fn edges(pairs: &[(&str, &str)]) -> Vec<Edge> {
    pairs.iter().map(|(a, b)| Edge::new(*a, *b)).collect()
}

// ── Construction ────────────────────────────────────────────────────────

#[test]
fn test_empty_graph() {
    let g = RelationGraph::build(&[], &[]);
    assert_eq!(g.node_count(), 0);
    assert_eq!(g.edge_count(), 0);
    assert!(g.roots().is_empty());
    assert!(g.is_dag());
}

#[test]
fn test_ids_keep_input_order() {
    let g = RelationGraph::build(&nodes(&["c", "a", "b"]), &[]);
    assert_eq!(g.ids(), vec!["c", "a", "b"]);
}

#[test]
fn test_duplicate_id_first_wins() {
    let g = RelationGraph::build(&nodes(&["a", "b", "a"]), &[]);
    assert_eq!(g.node_count(), 2);
    assert_eq!(g.duplicate_ids, 1);
    assert_eq!(g.ids(), vec!["a", "b"]);
}

#[test]
fn test_dangling_edges_dropped() {
    let g = RelationGraph::build(
        &nodes(&["a", "b"]),
        &edges(&[("a", "b"), ("a", "ghost"), ("ghost", "b")]),
    );
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.dropped_edges, 2);
    assert!(!g.contains("ghost"));
}

#[test]
fn test_self_loop_dropped() {
    let g = RelationGraph::build(&nodes(&["a"]), &edges(&[("a", "a")]));
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.dropped_edges, 1);
    assert_eq!(g.roots().len(), 1);
}

// ── Topology ────────────────────────────────────────────────────────────

#[test]
fn test_children_and_parents() {
    let g = RelationGraph::build(
        &nodes(&["a", "b", "c"]),
        &edges(&[("a", "b"), ("a", "c"), ("b", "c")]),
    );
    assert_eq!(g.children("a"), vec!["b", "c"]);
    assert_eq!(g.parents("c"), vec!["a", "b"]);
    assert!(g.parents("a").is_empty());
    assert!(g.children("missing").is_empty());
}

#[test]
fn test_roots() {
    let g = RelationGraph::build(
        &nodes(&["a", "b", "c", "d"]),
        &edges(&[("a", "b"), ("c", "b")]),
    );
    let roots: Vec<&str> = g.roots().into_iter().map(|i| g.digraph[i].as_str()).collect();
    assert_eq!(roots, vec!["a", "c", "d"]);
}

#[test]
fn test_cycle_detection() {
    let g = RelationGraph::build(&nodes(&["a", "b"]), &edges(&[("a", "b"), ("b", "a")]));
    assert!(!g.is_dag());
    assert!(g.roots().is_empty());
}

#[test]
fn test_components_group_cycles() {
    let g = RelationGraph::build(
        &nodes(&["r", "a", "b", "c"]),
        &edges(&[("r", "a"), ("a", "b"), ("b", "a"), ("b", "c")]),
    );
    let comp = g.components();
    let of = |id: &str| comp[g.node_index[id].index()];
    assert_eq!(of("a"), of("b"));
    assert_ne!(of("r"), of("a"));
    assert_ne!(of("c"), of("a"));
    assert_ne!(of("r"), of("c"));
}
