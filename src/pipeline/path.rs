use crate::foundation::core::{BezPath, FixedPoint, PathEl, Point};
use crate::foundation::error::DrawResult;

/// Receiver of the segment-by-segment walk over a pipeline path.
///
/// Every method may fail; a failure aborts the walk and is returned verbatim by
/// [`PathSource::interpret`].
pub trait PathSink {
    /// Start a new subpath at `p`.
    fn move_to(&mut self, p: FixedPoint) -> DrawResult<()>;
    /// Straight segment to `p`.
    fn line_to(&mut self, p: FixedPoint) -> DrawResult<()>;
    /// Cubic Bézier segment with control points `p1`, `p2` ending at `p3`.
    fn curve_to(&mut self, p1: FixedPoint, p2: FixedPoint, p3: FixedPoint) -> DrawResult<()>;
    /// Close the current subpath.
    fn close_path(&mut self) -> DrawResult<()>;
}

/// An opaque path description that can be walked as move/line/curve/close segments.
pub trait PathSource {
    /// Feed every segment, in order, to `sink`.
    fn interpret(&self, sink: &mut dyn PathSink) -> DrawResult<()>;
}

/// One segment of a [`FixedPath`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PathOp {
    /// Start a subpath.
    MoveTo(FixedPoint),
    /// Straight segment.
    LineTo(FixedPoint),
    /// Cubic segment: two control points and the end point.
    CurveTo(FixedPoint, FixedPoint, FixedPoint),
    /// Close the subpath.
    ClosePath,
}

/// The pipeline's native path: an ordered list of fixed-point segments.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FixedPath {
    ops: Vec<PathOp>,
}

impl FixedPath {
    /// Empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Segments in insertion order.
    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// `true` when no segment has been added.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Append a move.
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.ops.push(PathOp::MoveTo(FixedPoint::from_f64(x, y)));
        self
    }

    /// Append a line.
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.ops.push(PathOp::LineTo(FixedPoint::from_f64(x, y)));
        self
    }

    /// Append a cubic curve.
    pub fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> &mut Self {
        self.ops.push(PathOp::CurveTo(
            FixedPoint::from_f64(x1, y1),
            FixedPoint::from_f64(x2, y2),
            FixedPoint::from_f64(x3, y3),
        ));
        self
    }

    /// Close the current subpath.
    pub fn close_path(&mut self) -> &mut Self {
        self.ops.push(PathOp::ClosePath);
        self
    }

    /// Append a raw segment.
    pub fn push(&mut self, op: PathOp) -> &mut Self {
        self.ops.push(op);
        self
    }
}

impl FromIterator<PathOp> for FixedPath {
    fn from_iter<I: IntoIterator<Item = PathOp>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl From<&BezPath> for FixedPath {
    fn from(path: &BezPath) -> Self {
        bez_ops(path).collect()
    }
}

fn emit(sink: &mut dyn PathSink, op: PathOp) -> DrawResult<()> {
    match op {
        PathOp::MoveTo(p) => sink.move_to(p),
        PathOp::LineTo(p) => sink.line_to(p),
        PathOp::CurveTo(p1, p2, p3) => sink.curve_to(p1, p2, p3),
        PathOp::ClosePath => sink.close_path(),
    }
}

impl PathSource for FixedPath {
    fn interpret(&self, sink: &mut dyn PathSink) -> DrawResult<()> {
        for &op in &self.ops {
            emit(sink, op)?;
        }
        Ok(())
    }
}

impl PathSink for FixedPath {
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

/// Segments of a `kurbo` path rounded to fixed-point.
///
/// Quadratic segments are degree-elevated to cubics.
fn bez_ops(path: &BezPath) -> impl Iterator<Item = PathOp> + '_ {
    let mut current = Point::ZERO;
    let mut subpath_start = Point::ZERO;
    path.elements().iter().map(move |el| match *el {
        PathEl::MoveTo(p) => {
            current = p;
            subpath_start = p;
            PathOp::MoveTo(p.into())
        }
        PathEl::LineTo(p) => {
            current = p;
            PathOp::LineTo(p.into())
        }
        PathEl::QuadTo(q, p) => {
            let c1 = current + (q - current) * (2.0 / 3.0);
            let c2 = p + (q - p) * (2.0 / 3.0);
            current = p;
            PathOp::CurveTo(c1.into(), c2.into(), p.into())
        }
        PathEl::CurveTo(c1, c2, p) => {
            current = p;
            PathOp::CurveTo(c1.into(), c2.into(), p.into())
        }
        PathEl::ClosePath => {
            current = subpath_start;
            PathOp::ClosePath
        }
    })
}

impl PathSource for BezPath {
    fn interpret(&self, sink: &mut dyn PathSink) -> DrawResult<()> {
        for op in bez_ops(self) {
            emit(sink, op)?;
        }
        Ok(())
    }
}

/// Rebuilds a `kurbo` path from a segment walk.
impl PathSink for BezPath {
    fn move_to(&mut self, p: FixedPoint) -> DrawResult<()> {
        BezPath::move_to(self, p.to_point());
        Ok(())
    }

    fn line_to(&mut self, p: FixedPoint) -> DrawResult<()> {
        BezPath::line_to(self, p.to_point());
        Ok(())
    }

    fn curve_to(&mut self, p1: FixedPoint, p2: FixedPoint, p3: FixedPoint) -> DrawResult<()> {
        BezPath::curve_to(self, p1.to_point(), p2.to_point(), p3.to_point());
        Ok(())
    }

    fn close_path(&mut self) -> DrawResult<()> {
        BezPath::close_path(self);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/path.rs"]
mod tests;
