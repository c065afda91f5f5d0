use super::*;

#[test]
fn empty_interface_has_no_slots() {
    let iface = CallbackInterface::new();
    assert!(iface.mask.is_none());
    assert!(iface.paint.is_none());
    assert!(iface.fill.is_none());
    assert!(iface.stroke.is_none());
}

#[test]
fn debug_reports_registered_slots() {
    let iface = CallbackInterface::new()
        .on_paint(|_s, _cmd| {})
        .on_stroke(|_s, _cmd| {});
    assert_eq!(
        format!("{iface:?}"),
        "CallbackInterface { mask: false, paint: true, fill: false, stroke: true }"
    );
}

#[test]
fn clones_share_callbacks() {
    let iface = CallbackInterface::new().on_fill(|_s, _cmd| {});
    let copy = iface.clone();
    assert!(Arc::ptr_eq(
        iface.fill.as_ref().unwrap(),
        copy.fill.as_ref().unwrap()
    ));
}
