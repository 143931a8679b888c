use super::*;

fn layers(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect()
}

#[test]
fn test_layer_width() {
    let c = LayoutConfig::default();
    assert_eq!(layer_width(0, &c), 0.0);
    assert_eq!(layer_width(1, &c), 180.0);
    assert_eq!(layer_width(3, &c), 660.0);
}

#[test]
fn test_single_node_centred() {
    let pos = assign_coordinates(&layers(&[&["a"]]), &LayoutConfig::default());
    assert_eq!(pos["a"], Point::new(-90.0, 0.0));
}

#[test]
fn test_three_nodes_centred_around_zero() {
    let pos = assign_coordinates(&layers(&[&["a", "b", "c"]]), &LayoutConfig::default());
    assert_eq!(pos["a"], Point::new(-330.0, 0.0));
    assert_eq!(pos["b"], Point::new(-90.0, 0.0));
    assert_eq!(pos["c"], Point::new(150.0, 0.0));
    // symmetric: left edge of first and right edge of last
    assert_eq!(pos["a"].x, -(pos["c"].x + 180.0));
}

#[test]
fn test_rank_drives_y() {
    let pos = assign_coordinates(&layers(&[&["a"], &["b"], &["c"]]), &LayoutConfig::default());
    assert_eq!(pos["a"].y, 0.0);
    assert_eq!(pos["b"].y, 140.0);
    assert_eq!(pos["c"].y, 280.0);
}

#[test]
fn test_custom_geometry() {
    let c = LayoutConfig::new()
        .with_node_size(100.0, 50.0)
        .with_spacing(20.0, 30.0);
    let pos = assign_coordinates(&layers(&[&["a"], &["b", "c"]]), &c);
    assert_eq!(pos["a"], Point::new(-50.0, 0.0));
    assert_eq!(pos["b"], Point::new(-110.0, 80.0));
    assert_eq!(pos["c"], Point::new(10.0, 80.0));
}
