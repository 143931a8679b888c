use super::*;

#[test]
fn test_default_geometry() {
    let c = LayoutConfig::default();
    assert_eq!(c.node_width, 180.0);
    assert_eq!(c.node_height, 60.0);
    assert_eq!(c.node_spacing, 60.0);
    assert_eq!(c.rank_spacing, 80.0);
    assert!(!c.keep_overrides);
}

#[test]
fn test_steps() {
    let c = LayoutConfig::new();
    assert_eq!(c.column_step(), 240.0);
    assert_eq!(c.rank_step(), 140.0);
}

#[test]
fn test_builders() {
    let c = LayoutConfig::new()
        .with_node_size(100.0, 40.0)
        .with_spacing(10.0, 20.0)
        .with_keep_overrides(true);
    assert_eq!(c.column_step(), 110.0);
    assert_eq!(c.rank_step(), 60.0);
    assert!(c.keep_overrides);
}

#[test]
fn test_deserialize_partial_config() {
    let c: LayoutConfig = serde_json::from_str(r#"{"node_width": 120}"#).unwrap();
    assert_eq!(c.node_width, 120.0);
    assert_eq!(c.node_height, NODE_HEIGHT);
    assert_eq!(c.rank_spacing, RANK_SPACING);
}
