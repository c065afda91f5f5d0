use std::fmt;
use std::sync::Arc;

use crate::callback::command::{FillCommand, MaskCommand, PaintCommand, StrokeCommand};
use crate::callback::surface::CallbackSurface;

/// Observer of `paint` verbs.
pub type PaintFn = Arc<dyn Fn(&CallbackSurface, &PaintCommand<'_>) + Send + Sync>;
/// Observer of `mask` verbs.
pub type MaskFn = Arc<dyn Fn(&CallbackSurface, &MaskCommand<'_>) + Send + Sync>;
/// Observer of `fill` verbs and outline glyphs.
pub type FillFn = Arc<dyn Fn(&CallbackSurface, &FillCommand<'_>) + Send + Sync>;
/// Observer of `stroke` verbs.
pub type StrokeFn = Arc<dyn Fn(&CallbackSurface, &StrokeCommand<'_>) + Send + Sync>;

/// The set of callbacks a [`CallbackSurface`] forwards to.
///
/// Every slot is optional; an empty slot turns the matching verb into a successful no-op.
/// Glyph runs have no slot of their own and are reported through `fill`.
#[derive(Clone, Default)]
pub struct CallbackInterface {
    /// `mask` observer.
    pub mask: Option<MaskFn>,
    /// `paint` observer.
    pub paint: Option<PaintFn>,
    /// `fill` and glyph observer.
    pub fill: Option<FillFn>,
    /// `stroke` observer.
    pub stroke: Option<StrokeFn>,
}

impl CallbackInterface {
    /// Interface with every slot empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `mask` observer.
    pub fn on_mask(
        mut self,
        f: impl Fn(&CallbackSurface, &MaskCommand<'_>) + Send + Sync + 'static,
    ) -> Self {
        self.mask = Some(Arc::new(f));
        self
    }

    /// Set the `paint` observer.
    pub fn on_paint(
        mut self,
        f: impl Fn(&CallbackSurface, &PaintCommand<'_>) + Send + Sync + 'static,
    ) -> Self {
        self.paint = Some(Arc::new(f));
        self
    }

    /// Set the `fill` observer.
    pub fn on_fill(
        mut self,
        f: impl Fn(&CallbackSurface, &FillCommand<'_>) + Send + Sync + 'static,
    ) -> Self {
        self.fill = Some(Arc::new(f));
        self
    }

    /// Set the `stroke` observer.
    pub fn on_stroke(
        mut self,
        f: impl Fn(&CallbackSurface, &StrokeCommand<'_>) + Send + Sync + 'static,
    ) -> Self {
        self.stroke = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for CallbackInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackInterface")
            .field("mask", &self.mask.is_some())
            .field("paint", &self.paint.is_some())
            .field("fill", &self.fill.is_some())
            .field("stroke", &self.stroke.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/callback/interface.rs"]
mod tests;
