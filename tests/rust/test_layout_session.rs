use super::*;
use serde_json::json;

fn nodes(ids: &[&str]) -> Vec<Node> {
    ids.iter().map(|id| Node::bare(*id)).collect()
}

fn edges(pairs: &[(&str, &str)]) -> Vec<Edge> {
    pairs.iter().map(|(a, b)| Edge::new(*a, *b)).collect()
}

#[test]
fn test_first_update_lays_out() {
    let mut s = LayoutSession::default();
    let out = s.update(&nodes(&["a", "b"]), &edges(&[("a", "b")]));
    assert_eq!(s.relayouts(), 1);
    assert_eq!(out[1].position, Point::new(-90.0, 140.0));
    assert!(s.fingerprint().is_some());
}

#[test]
fn test_drag_survives_same_structure() {
    let mut s = LayoutSession::default();
    let n = nodes(&["a", "b"]);
    let e = edges(&[("a", "b")]);
    s.update(&n, &e);
    s.move_node("b", Point::new(500.0, 10.0)).unwrap();

    // payload-only change, same structure
    let renamed = vec![Node::bare("a"), Node::with_data("b", json!({"name": "Bo"}))];
    let out = s.update(&renamed, &e);
    assert_eq!(s.relayouts(), 1);
    assert_eq!(out[1].position, Point::new(500.0, 10.0));
    assert_eq!(out[1].data["name"], "Bo");
    assert!(s.is_overridden("b"));
    assert_eq!(s.proposed("b"), Some(Point::new(-90.0, 140.0)));
}

#[test]
fn test_structure_change_relayouts_and_drops_drags() {
    let mut s = LayoutSession::default();
    s.update(&nodes(&["a", "b"]), &edges(&[("a", "b")]));
    s.move_node("a", Point::new(1.0, 1.0)).unwrap();

    let out = s.update(&nodes(&["a", "b", "c"]), &edges(&[("a", "b")]));
    assert_eq!(s.relayouts(), 2);
    assert!(!s.is_overridden("a"));
    assert_eq!(out[0].position, Point::new(-210.0, 0.0));
}

#[test]
fn test_keep_overrides_for_surviving_ids() {
    let mut s = LayoutSession::new(LayoutConfig::new().with_keep_overrides(true));
    s.update(&nodes(&["a", "b"]), &[]);
    s.move_node("a", Point::new(7.0, 7.0)).unwrap();
    s.move_node("b", Point::new(8.0, 8.0)).unwrap();

    let out = s.update(&nodes(&["a", "c"]), &[]);
    assert_eq!(out[0].position, Point::new(7.0, 7.0));
    assert!(!s.is_overridden("b"));
    assert_eq!(out[1].position, Point::new(30.0, 0.0));
}

#[test]
fn test_move_unknown_node_rejected() {
    let mut s = LayoutSession::default();
    s.update(&nodes(&["a"]), &[]);
    let err = s.move_node("ghost", Point::ORIGIN).unwrap_err();
    assert!(matches!(err, LayoutError::UnknownNode(ref id) if id == "ghost"));
}

#[test]
fn test_reset_overrides() {
    let mut s = LayoutSession::default();
    s.update(&nodes(&["a"]), &[]);
    s.move_node("a", Point::new(3.0, 4.0)).unwrap();
    assert_eq!(s.position_of("a"), Some(Point::new(3.0, 4.0)));
    s.reset_overrides();
    assert_eq!(s.position_of("a"), Some(Point::new(-90.0, 0.0)));
}

#[test]
fn test_edge_order_change_is_not_structural() {
    let mut s = LayoutSession::default();
    s.update(&nodes(&["a", "b", "c"]), &edges(&[("a", "b"), ("a", "c")]));
    s.update(&nodes(&["c", "b", "a"]), &edges(&[("a", "c"), ("a", "b")]));
    assert_eq!(s.relayouts(), 1);
}
