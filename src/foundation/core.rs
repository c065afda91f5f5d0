pub use kurbo::{Affine, BezPath, PathEl, Point, Rect, Stroke};

/// Signed 24.8 fixed-point number, the coordinate type of pipeline paths.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Fixed(pub i32);

impl Fixed {
    /// Number of fractional bits.
    pub const FRAC_BITS: u32 = 8;
    /// `1.0` in fixed-point.
    pub const ONE: Fixed = Fixed(1 << Self::FRAC_BITS);
    /// `0.0` in fixed-point.
    pub const ZERO: Fixed = Fixed(0);

    /// Convert from a float, rounding to the nearest representable value.
    ///
    /// Out-of-range inputs saturate; NaN maps to zero.
    pub fn from_f64(v: f64) -> Self {
        Self((v * f64::from(Self::ONE.0)).round() as i32)
    }

    /// Convert from an integer. Values outside the 24-bit integer range wrap.
    pub fn from_int(v: i32) -> Self {
        Self(v.wrapping_shl(Self::FRAC_BITS))
    }

    /// Convert to a float. Exact for every fixed value.
    pub fn to_f64(self) -> f64 {
        f64::from(self.0) / f64::from(Self::ONE.0)
    }

    /// Raw 24.8 bits.
    pub fn bits(self) -> i32 {
        self.0
    }
}

/// A point in fixed-point device/user space.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FixedPoint {
    /// Horizontal coordinate.
    pub x: Fixed,
    /// Vertical coordinate.
    pub y: Fixed,
}

impl FixedPoint {
    /// Origin.
    pub const ORIGIN: FixedPoint = FixedPoint {
        x: Fixed::ZERO,
        y: Fixed::ZERO,
    };

    /// Build from fixed coordinates.
    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }

    /// Build from float coordinates, rounding each to the nearest fixed value.
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self {
            x: Fixed::from_f64(x),
            y: Fixed::from_f64(y),
        }
    }

    /// Convert to a `kurbo` point.
    pub fn to_point(self) -> Point {
        Point::new(self.x.to_f64(), self.y.to_f64())
    }
}

impl From<Point> for FixedPoint {
    fn from(p: Point) -> Self {
        Self::from_f64(p.x, p.y)
    }
}

impl From<FixedPoint> for Point {
    fn from(p: FixedPoint) -> Self {
        p.to_point()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
