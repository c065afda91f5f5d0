use crate::foundation::core::{Affine, Rect, Stroke};
use crate::foundation::error::DrawResult;
use crate::pipeline::font::{Glyph, ScaledFont};
use crate::pipeline::paint::{Antialias, Clip, Content, FillRule, Operator, Pattern};
use crate::pipeline::path::PathSource;

/// Backend families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// Forwards drawing verbs to user callbacks.
    Callback,
    /// Keeps a list of drawing verbs.
    Recording,
}

/// Optional backend entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    /// `create_similar`.
    CreateSimilar,
    /// `create_similar_image`.
    CreateSimilarImage,
    /// `get_extents`.
    GetExtents,
    /// `copy_page`.
    CopyPage,
    /// `show_page`.
    ShowPage,
    /// `flush`.
    Flush,
    /// `paint`.
    Paint,
    /// `mask`.
    Mask,
    /// `stroke`.
    Stroke,
    /// `fill`.
    Fill,
    /// `fill_stroke`.
    FillStroke,
    /// `show_glyphs`.
    ShowGlyphs,
}

/// Read-only description of a backend and the verbs it implements.
#[derive(Debug)]
pub struct BackendInfo {
    /// Backend family.
    pub kind: SurfaceKind,
    /// Human-readable name.
    pub name: &'static str,
    /// Whether drawing is kept as vectors.
    pub is_vector: bool,
    /// Implemented optional verbs.
    pub verbs: &'static [Verb],
}

impl BackendInfo {
    /// `true` when `verb` is implemented.
    pub fn supports(&self, verb: Verb) -> bool {
        self.verbs.contains(&verb)
    }
}

/// Stroke parameters handed to [`SurfaceBackend::stroke`].
#[derive(Clone, Copy, Debug)]
pub struct StrokeParams<'a> {
    /// Pipeline stroke style.
    pub style: &'a Stroke,
    /// Current transformation matrix.
    pub ctm: &'a Affine,
    /// Inverse of `ctm`.
    pub ctm_inverse: &'a Affine,
    /// Flattening tolerance.
    pub tolerance: f64,
    /// Antialiasing mode.
    pub antialias: Antialias,
}

/// Fill parameters handed to [`SurfaceBackend::fill`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FillParams {
    /// Inside test.
    pub fill_rule: FillRule,
    /// Flattening tolerance.
    pub tolerance: f64,
    /// Antialiasing mode.
    pub antialias: Antialias,
}

/// Entry points a drawing pipeline invokes on a surface.
///
/// Drawing verbs take `&mut self`: a surface is driven by one caller at a time.
pub trait SurfaceBackend {
    /// Static backend description.
    fn info(&self) -> &'static BackendInfo;

    /// Backend family.
    fn kind(&self) -> SurfaceKind {
        self.info().kind
    }

    /// Color model.
    fn content(&self) -> Content;

    /// Create an intermediate surface compatible with this one.
    fn create_similar(&self, content: Content, width: i32, height: i32) -> Box<dyn SurfaceBackend>;

    /// Device bounds, or `None` for an unbounded surface.
    fn get_extents(&self) -> Option<Rect>;

    /// Paint `source` everywhere (within `clip`).
    fn paint(&mut self, op: Operator, source: &Pattern, clip: Option<&Clip>) -> DrawResult<()>;

    /// Paint `source` through the alpha of `mask`.
    fn mask(
        &mut self,
        op: Operator,
        source: &Pattern,
        mask: &Pattern,
        clip: Option<&Clip>,
    ) -> DrawResult<()>;

    /// Stroke `path` with `source`.
    fn stroke(
        &mut self,
        op: Operator,
        source: &Pattern,
        path: Option<&dyn PathSource>,
        params: StrokeParams<'_>,
        clip: Option<&Clip>,
    ) -> DrawResult<()>;

    /// Fill `path` with `source`.
    fn fill(
        &mut self,
        op: Operator,
        source: &Pattern,
        path: Option<&dyn PathSource>,
        params: FillParams,
        clip: Option<&Clip>,
    ) -> DrawResult<()>;

    /// Draw a glyph run from `font` with `source`.
    fn show_glyphs(
        &mut self,
        op: Operator,
        source: &Pattern,
        glyphs: &[Glyph],
        font: &dyn ScaledFont,
        clip: Option<&Clip>,
    ) -> DrawResult<()>;
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/surface.rs"]
mod tests;
