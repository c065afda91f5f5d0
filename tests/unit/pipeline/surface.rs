use super::*;

static PAINT_ONLY: BackendInfo = BackendInfo {
    kind: SurfaceKind::Recording,
    name: "paint-only",
    is_vector: false,
    verbs: &[Verb::Paint],
};

#[test]
fn supports_checks_the_verb_table() {
    assert!(PAINT_ONLY.supports(Verb::Paint));
    assert!(!PAINT_ONLY.supports(Verb::Fill));
    assert!(!PAINT_ONLY.supports(Verb::ShowPage));
}

#[test]
fn fill_params_default_to_winding() {
    let p = FillParams::default();
    assert_eq!(p.fill_rule, FillRule::Winding);
    assert_eq!(p.antialias, Antialias::Default);
}
