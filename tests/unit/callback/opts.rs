use super::*;

#[test]
fn defaults_are_unbounded_with_glyph_fill_constants() {
    let opts = CallbackSurfaceOpts::default();
    assert_eq!(opts.max_path_nodes, None);
    assert_eq!(opts.max_dashes, None);
    assert_eq!(opts.glyph_tolerance, 0.1);
    assert_eq!(opts.glyph_fill_rule, FillRule::Winding);
    assert_eq!(opts.glyph_antialias, Antialias::Default);
    opts.validate().unwrap();
}

#[test]
fn from_json_fills_missing_fields() {
    let opts = CallbackSurfaceOpts::from_json(r#"{"max_path_nodes": 64}"#).unwrap();
    assert_eq!(opts.max_path_nodes, Some(64));
    assert_eq!(opts.glyph_tolerance, 0.1);
}

#[test]
fn from_json_rejects_bad_tolerance_and_bad_json() {
    let err = CallbackSurfaceOpts::from_json(r#"{"glyph_tolerance": 0.0}"#).unwrap_err();
    assert!(err.to_string().contains("glyph_tolerance"));
    assert!(CallbackSurfaceOpts::from_json("{").is_err());
}

#[test]
fn builders_set_fields() {
    let opts = CallbackSurfaceOpts::default()
        .with_max_path_nodes(Some(3))
        .with_max_dashes(Some(1))
        .with_glyph_tolerance(0.25);
    assert_eq!(opts.max_path_nodes, Some(3));
    assert_eq!(opts.max_dashes, Some(1));
    assert_eq!(opts.glyph_tolerance, 0.25);
}
