use super::*;
use crate::foundation::core::Fixed;
use crate::foundation::error::DrawError;

#[derive(Default)]
struct Trace {
    ops: Vec<PathOp>,
}

impl PathSink for Trace {
    fn move_to(&mut self, p: FixedPoint) -> DrawResult<()> {
        self.ops.push(PathOp::MoveTo(p));
        Ok(())
    }

    fn line_to(&mut self, p: FixedPoint) -> DrawResult<()> {
        self.ops.push(PathOp::LineTo(p));
        Ok(())
    }

    fn curve_to(&mut self, p1: FixedPoint, p2: FixedPoint, p3: FixedPoint) -> DrawResult<()> {
        self.ops.push(PathOp::CurveTo(p1, p2, p3));
        Ok(())
    }

    fn close_path(&mut self) -> DrawResult<()> {
        self.ops.push(PathOp::ClosePath);
        Ok(())
    }
}

struct StopAfter(usize);

impl PathSink for StopAfter {
    fn move_to(&mut self, _p: FixedPoint) -> DrawResult<()> {
        self.step()
    }

    fn line_to(&mut self, _p: FixedPoint) -> DrawResult<()> {
        self.step()
    }

    fn curve_to(&mut self, _: FixedPoint, _: FixedPoint, _: FixedPoint) -> DrawResult<()> {
        self.step()
    }

    fn close_path(&mut self) -> DrawResult<()> {
        self.step()
    }
}

impl StopAfter {
    fn step(&mut self) -> DrawResult<()> {
        if self.0 == 0 {
            return Err(DrawError::interpret("stop"));
        }
        self.0 -= 1;
        Ok(())
    }
}

#[test]
fn fixed_path_walk_preserves_order() {
    let mut path = FixedPath::new();
    path.move_to(0.0, 0.0)
        .line_to(10.0, 0.0)
        .curve_to(10.0, 5.0, 5.0, 10.0, 0.0, 10.0)
        .close_path();

    let mut trace = Trace::default();
    path.interpret(&mut trace).unwrap();
    assert_eq!(trace.ops, path.ops());
}

#[test]
fn sink_error_aborts_walk_verbatim() {
    let mut path = FixedPath::new();
    path.move_to(0.0, 0.0).line_to(1.0, 1.0).line_to(2.0, 2.0);

    let mut sink = StopAfter(1);
    let err = path.interpret(&mut sink).unwrap_err();
    assert!(matches!(err, DrawError::Interpret(ref m) if m == "stop"));
}

#[test]
fn bez_path_quad_is_elevated_to_cubic() {
    let mut bez = BezPath::new();
    bez.move_to((0.0, 0.0));
    bez.quad_to((3.0, 3.0), (6.0, 0.0));

    let mut trace = Trace::default();
    bez.interpret(&mut trace).unwrap();
    assert_eq!(trace.ops.len(), 2);
    match trace.ops[1] {
        PathOp::CurveTo(c1, c2, p) => {
            assert_eq!(c1, FixedPoint::from_f64(2.0, 2.0));
            assert_eq!(c2, FixedPoint::from_f64(4.0, 2.0));
            assert_eq!(p, FixedPoint::from_f64(6.0, 0.0));
        }
        other => panic!("expected curve, got {other:?}"),
    }
}

#[test]
fn bez_path_close_resets_current_point_for_quads() {
    let bez = BezPath::from_vec(vec![
        PathEl::MoveTo(Point::new(0.0, 0.0)),
        PathEl::LineTo(Point::new(6.0, 6.0)),
        PathEl::ClosePath,
        PathEl::QuadTo(Point::new(3.0, 3.0), Point::new(6.0, 0.0)),
    ]);

    let mut trace = Trace::default();
    bez.interpret(&mut trace).unwrap();
    let PathOp::CurveTo(c1, _, _) = trace.ops[3] else {
        panic!("expected curve");
    };
    // Elevation starts from the subpath start (0,0), not the last line end.
    assert_eq!(c1, FixedPoint::from_f64(2.0, 2.0));
}

#[test]
fn bez_path_sink_rebuilds_elements() {
    let mut path = FixedPath::new();
    path.move_to(1.0, 2.0).line_to(3.0, 4.0).close_path();

    let mut bez = BezPath::new();
    path.interpret(&mut bez).unwrap();
    assert_eq!(
        bez.elements(),
        &[
            PathEl::MoveTo(Point::new(1.0, 2.0)),
            PathEl::LineTo(Point::new(3.0, 4.0)),
            PathEl::ClosePath,
        ]
    );
}

#[test]
fn from_bez_path_rounds_to_fixed_grid() {
    let mut bez = BezPath::new();
    bez.move_to((0.001, 0.0));
    let path = FixedPath::from(&bez);
    assert_eq!(
        path.ops(),
        &[PathOp::MoveTo(FixedPoint::new(Fixed::ZERO, Fixed::ZERO))]
    );
}

#[test]
fn from_bez_path_elevates_quads_like_the_walk() {
    let mut bez = BezPath::new();
    bez.move_to((0.0, 0.0));
    bez.quad_to((3.0, 3.0), (6.0, 0.0));
    bez.close_path();

    let mut trace = Trace::default();
    bez.interpret(&mut trace).unwrap();
    assert_eq!(FixedPath::from(&bez).ops(), trace.ops);
}

#[test]
fn push_and_collect_build_the_same_path() {
    let ops = [
        PathOp::MoveTo(FixedPoint::from_f64(1.0, 1.0)),
        PathOp::LineTo(FixedPoint::from_f64(2.0, 1.0)),
        PathOp::ClosePath,
    ];

    let mut pushed = FixedPath::new();
    for op in ops {
        pushed.push(op);
    }
    let collected: FixedPath = ops.into_iter().collect();

    assert_eq!(pushed, collected);
    assert_eq!(collected.len(), 3);
    assert!(!collected.is_empty());
}
