use super::*;
use crate::pipeline::paint::Rgba;
use crate::pipeline::path::FixedPath;

fn triangle() -> FixedPath {
    let mut p = FixedPath::new();
    p.move_to(0.0, 0.0)
        .line_to(8.0, 0.0)
        .line_to(4.0, 6.0)
        .close_path();
    p
}

fn red() -> Pattern {
    Pattern::solid(Rgba::new(1.0, 0.0, 0.0, 1.0))
}

#[test]
fn paint_and_mask_borrow_patterns_and_report_no_clip() {
    let source = red();
    let mask = Pattern::solid(Rgba::new(0.0, 0.0, 0.0, 0.5));

    let paint = build_paint(Operator::Source, &source);
    assert_eq!(paint.op, Operator::Source);
    assert!(std::ptr::eq(paint.source, &source));
    assert!(paint.clip.is_none());

    let m = build_mask(Operator::Over, &source, &mask);
    assert!(std::ptr::eq(m.source, &source));
    assert!(std::ptr::eq(m.mask, &mask));
    assert!(m.clip.is_none());
}

#[test]
fn stroke_style_copies_scalars_and_dashes() {
    let stroke = Stroke::new(2.5)
        .with_caps(kurbo::Cap::Round)
        .with_join(kurbo::Join::Bevel)
        .with_miter_limit(7.0)
        .with_dashes(0.5, [2.0, 1.0]);
    let style = StrokeStyle::copy_from(&stroke, None).unwrap();
    assert_eq!(style.line_width, 2.5);
    assert_eq!(style.line_cap, LineCap::Round);
    assert_eq!(style.line_join, LineJoin::Bevel);
    assert_eq!(style.miter_limit, 7.0);
    assert_eq!(style.dash_offset, 0.5);
    assert_eq!(style.dash_count(), 2);
    assert_eq!(style.dash.as_deref(), Some(&[2.0, 1.0][..]));
    assert_ne!(
        style.dash.as_ref().unwrap().as_ptr(),
        stroke.dash_pattern.as_ptr()
    );
}

#[test]
fn solid_stroke_has_no_dash_allocation() {
    let style = StrokeStyle::copy_from(&Stroke::new(1.0), Some(0)).unwrap();
    assert!(style.dash.is_none());
    assert_eq!(style.dash_count(), 0);
}

#[test]
fn dash_budget_exhaustion_is_no_memory() {
    let stroke = Stroke::new(1.0).with_dashes(0.0, [1.0, 2.0, 3.0]);
    let err = StrokeStyle::copy_from(&stroke, Some(2)).unwrap_err();
    assert!(err.is_no_memory());
}

#[test]
fn build_stroke_materializes_path_and_borrows_matrices() {
    let source = red();
    let path = triangle();
    let stroke = Stroke::new(3.0);
    let ctm = Affine::scale(2.0);
    let inv = ctm.inverse();
    let params = StrokeParams {
        style: &stroke,
        ctm: &ctm,
        ctm_inverse: &inv,
        tolerance: 0.25,
        antialias: Antialias::Gray,
    };
    let cmd = build_stroke(
        Operator::Over,
        &source,
        &path,
        params,
        &CallbackSurfaceOpts::default(),
    )
    .unwrap();
    assert_eq!(cmd.path.len(), 4);
    assert_eq!(cmd.tolerance, 0.25);
    assert_eq!(cmd.antialias, Antialias::Gray);
    assert!(std::ptr::eq(cmd.matrix, &ctm));
    assert!(std::ptr::eq(cmd.inv_matrix, &inv));
    assert!(std::ptr::eq(cmd.pattern, &source));
    assert!(cmd.clip.is_none());
}

#[test]
fn build_fill_copies_parameters_and_optional_glyph() {
    let source = red();
    let path = triangle();
    let glyph = Glyph::new(42, 1.0, 2.0);
    let params = FillParams {
        fill_rule: FillRule::EvenOdd,
        tolerance: 0.5,
        antialias: Antialias::None,
    };
    let opts = CallbackSurfaceOpts::default();

    let plain = build_fill(Operator::Xor, &source, &path, params, None, &opts).unwrap();
    assert_eq!(plain.fill_rule, FillRule::EvenOdd);
    assert_eq!(plain.op, Operator::Xor);
    assert!(plain.glyph.is_none());

    let tagged = build_fill(Operator::Xor, &source, &path, params, Some(&glyph), &opts).unwrap();
    assert_eq!(tagged.glyph.map(|g| g.index), Some(42));
    assert_eq!(tagged.path, plain.path);
}

#[test]
fn build_fill_respects_node_budget() {
    let source = red();
    let opts = CallbackSurfaceOpts::default().with_max_path_nodes(Some(2));
    let err = build_fill(
        Operator::Over,
        &source,
        &triangle(),
        FillParams::default(),
        None,
        &opts,
    )
    .unwrap_err();
    assert!(err.is_no_memory());
}
