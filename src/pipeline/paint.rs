use crate::foundation::core::{Affine, Point};
use crate::pipeline::path::FixedPath;

/// Straight-alpha RGBA color with `[0, 1]` channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Rgba {
    /// Build a color; channels are clamped to `[0, 1]`.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }
}

/// Gradient color stop.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColorStop {
    /// Position along the gradient in `[0, 1]`.
    pub offset: f64,
    /// Stop color.
    pub color: Rgba,
}

/// How a gradient behaves outside its defined range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Extend {
    /// Transparent outside the range.
    None,
    /// Repeat the range.
    Repeat,
    /// Mirror the range.
    Reflect,
    /// Extend the end colors.
    #[default]
    Pad,
}

/// Paint source kinds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum PatternKind {
    /// Uniform color.
    Solid(Rgba),
    /// Linear gradient between two points.
    Linear {
        /// Gradient start.
        start: Point,
        /// Gradient end.
        end: Point,
        /// Ordered color stops.
        stops: Vec<ColorStop>,
    },
    /// Radial gradient between two circles.
    Radial {
        /// Start circle center.
        c0: Point,
        /// Start circle radius.
        r0: f64,
        /// End circle center.
        c1: Point,
        /// End circle radius.
        r1: f64,
        /// Ordered color stops.
        stops: Vec<ColorStop>,
    },
}

/// A paint source owned by the drawing pipeline.
///
/// Surfaces only ever borrow patterns for the duration of one drawing verb.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pattern {
    /// What is painted.
    pub kind: PatternKind,
    /// Pattern space to user space transform.
    pub matrix: Affine,
    /// Out-of-range behaviour.
    pub extend: Extend,
}

impl Pattern {
    /// Solid color pattern.
    pub fn solid(color: Rgba) -> Self {
        Self {
            kind: PatternKind::Solid(color),
            matrix: Affine::IDENTITY,
            extend: Extend::Pad,
        }
    }

    /// Linear gradient pattern.
    pub fn linear(start: Point, end: Point, stops: Vec<ColorStop>) -> Self {
        Self {
            kind: PatternKind::Linear { start, end, stops },
            matrix: Affine::IDENTITY,
            extend: Extend::Pad,
        }
    }

    /// Radial gradient pattern between two circles.
    pub fn radial(c0: Point, r0: f64, c1: Point, r1: f64, stops: Vec<ColorStop>) -> Self {
        Self {
            kind: PatternKind::Radial {
                c0,
                r0,
                c1,
                r1,
                stops,
            },
            matrix: Affine::IDENTITY,
            extend: Extend::Pad,
        }
    }

    /// Replace the pattern matrix.
    pub fn with_matrix(mut self, matrix: Affine) -> Self {
        self.matrix = matrix;
        self
    }
}

/// Compositing operator.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Operator {
    /// Clear the destination.
    Clear,
    /// Replace the destination with the source.
    Source,
    /// Source over destination.
    #[default]
    Over,
    /// Source where the destination is opaque.
    In,
    /// Source where the destination is transparent.
    Out,
    /// Source over destination, only where the destination is opaque.
    Atop,
    /// Leave the destination untouched.
    Dest,
    /// Destination over source.
    DestOver,
    /// Destination where the source is opaque.
    DestIn,
    /// Destination where the source is transparent.
    DestOut,
    /// Destination over source, only where the source is opaque.
    DestAtop,
    /// Source and destination where they do not overlap.
    Xor,
    /// Sum of source and destination.
    Add,
    /// Like `Over`, assuming disjoint geometry.
    Saturate,
    /// Product of source and destination.
    Multiply,
    /// Complement of the product of complements.
    Screen,
    /// Multiply or screen depending on the destination.
    Overlay,
    /// Darker of source and destination.
    Darken,
    /// Lighter of source and destination.
    Lighten,
    /// Brighten the destination to reflect the source.
    ColorDodge,
    /// Darken the destination to reflect the source.
    ColorBurn,
    /// Multiply or screen depending on the source.
    HardLight,
    /// Darken or lighten depending on the source.
    SoftLight,
    /// Absolute difference of source and destination.
    Difference,
    /// Like `Difference` with lower contrast.
    Exclusion,
    /// Source hue with destination saturation and luminosity.
    HslHue,
    /// Source saturation with destination hue and luminosity.
    HslSaturation,
    /// Source hue and saturation with destination luminosity.
    HslColor,
    /// Source luminosity with destination hue and saturation.
    HslLuminosity,
}

/// Rule deciding which regions of a self-intersecting path are inside.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum FillRule {
    /// Non-zero winding number.
    #[default]
    Winding,
    /// Odd crossing count.
    EvenOdd,
}

/// Antialiasing mode requested by the pipeline.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Antialias {
    /// Backend default.
    #[default]
    Default,
    /// Aliased edges.
    None,
    /// Single-channel coverage.
    Gray,
    /// Per-subpixel coverage.
    Subpixel,
    /// Prefer speed.
    Fast,
    /// Balance speed and quality.
    Good,
    /// Prefer quality.
    Best,
}

/// Shape at the ends of open stroked subpaths.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum LineCap {
    /// Stop at the endpoint.
    #[default]
    Butt,
    /// Half circle centered on the endpoint.
    Round,
    /// Half square centered on the endpoint.
    Square,
}

impl From<kurbo::Cap> for LineCap {
    fn from(cap: kurbo::Cap) -> Self {
        match cap {
            kurbo::Cap::Butt => Self::Butt,
            kurbo::Cap::Round => Self::Round,
            kurbo::Cap::Square => Self::Square,
        }
    }
}

/// Shape at the corners of stroked paths.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum LineJoin {
    /// Sharp corner, limited by the miter limit.
    #[default]
    Miter,
    /// Circular corner.
    Round,
    /// Cut-off corner.
    Bevel,
}

impl From<kurbo::Join> for LineJoin {
    fn from(join: kurbo::Join) -> Self {
        match join {
            kurbo::Join::Miter => Self::Miter,
            kurbo::Join::Round => Self::Round,
            kurbo::Join::Bevel => Self::Bevel,
        }
    }
}

/// Color model of a surface.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Content {
    /// Color channels only.
    Color,
    /// Alpha channel only.
    Alpha,
    /// Color and alpha.
    #[default]
    ColorAlpha,
}

/// Host clip region handed to every drawing verb.
///
/// Surfaces in this crate accept but do not propagate it.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Clip {
    /// Clip outline.
    pub path: FixedPath,
    /// Rule used to fill the outline.
    pub fill_rule: FillRule,
    /// Flattening tolerance.
    pub tolerance: f64,
    /// Antialiasing of the clip edge.
    pub antialias: Antialias,
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/paint.rs"]
mod tests;
