use crate::callback::command::{build_fill, build_mask, build_paint, build_stroke};
use crate::callback::interface::CallbackInterface;
use crate::callback::opts::CallbackSurfaceOpts;
use crate::foundation::core::Rect;
use crate::foundation::error::DrawResult;
use crate::pipeline::font::{FrozenGlyphCache, Glyph, GlyphInfo, ScaledFont};
use crate::pipeline::paint::{Clip, Content, Operator, Pattern};
use crate::pipeline::path::PathSource;
use crate::pipeline::surface::{
    BackendInfo, FillParams, StrokeParams, SurfaceBackend, SurfaceKind, Verb,
};
use crate::recording::RecordingSurface;

/// Backend table of [`CallbackSurface`].
pub static CALLBACK_BACKEND: BackendInfo = BackendInfo {
    kind: SurfaceKind::Callback,
    name: "callback",
    is_vector: true,
    verbs: &[
        Verb::CreateSimilar,
        Verb::GetExtents,
        Verb::Paint,
        Verb::Mask,
        Verb::Stroke,
        Verb::Fill,
        Verb::ShowGlyphs,
    ],
};

/// Per-surface dispatch counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchStats {
    /// Descriptors handed to a callback.
    pub delivered: u64,
    /// Verbs (or glyphs) that were a no-op: no callback, no path, or bitmap glyph.
    pub skipped: u64,
    /// Verbs that returned an error to the pipeline.
    pub failed: u64,
}

/// A vector surface that turns every drawing verb into a descriptor and hands it to a
/// user callback instead of rasterizing.
///
/// The callback set is copied at construction and never changes. Drawing verbs need
/// `&mut self` while callbacks only receive `&CallbackSurface`, so a callback cannot drive
/// drawing on the surface that is calling it.
#[derive(Debug)]
pub struct CallbackSurface {
    content: Content,
    iface: CallbackInterface,
    opts: CallbackSurfaceOpts,
    stats: DispatchStats,
}

impl CallbackSurface {
    /// Create a surface forwarding to `iface`; `None` leaves every slot empty.
    pub fn new(iface: Option<&CallbackInterface>, content: Content) -> Self {
        Self {
            content,
            iface: iface.cloned().unwrap_or_default(),
            opts: CallbackSurfaceOpts::default(),
            stats: DispatchStats::default(),
        }
    }

    /// Create a surface with explicit options.
    pub fn with_opts(
        iface: Option<&CallbackInterface>,
        content: Content,
        opts: CallbackSurfaceOpts,
    ) -> DrawResult<Self> {
        opts.validate()?;
        Ok(Self {
            opts,
            ..Self::new(iface, content)
        })
    }

    /// Registered callbacks.
    pub fn interface(&self) -> &CallbackInterface {
        &self.iface
    }

    /// Active options.
    pub fn opts(&self) -> &CallbackSurfaceOpts {
        &self.opts
    }

    /// Dispatch counters so far.
    pub fn stats(&self) -> DispatchStats {
        self.stats
    }

    fn skip(&mut self, verb: Verb, reason: &'static str) -> DrawResult<()> {
        tracing::trace!(?verb, reason, "verb skipped");
        self.stats.skipped = self.stats.skipped.saturating_add(1);
        Ok(())
    }

    fn fail<T>(&mut self, verb: Verb, result: DrawResult<T>) -> DrawResult<T> {
        if let Err(err) = &result {
            tracing::debug!(?verb, %err, "verb failed");
            self.stats.failed = self.stats.failed.saturating_add(1);
        }
        result
    }

    fn delivered(&mut self) {
        self.stats.delivered = self.stats.delivered.saturating_add(1);
    }

    fn fill_with_glyph(
        &mut self,
        op: Operator,
        source: &Pattern,
        path: Option<&dyn PathSource>,
        params: FillParams,
        glyph: Option<&Glyph>,
    ) -> DrawResult<()> {
        let Some(cb) = self.iface.fill.clone() else {
            return self.skip(Verb::Fill, "no fill callback");
        };
        let Some(path) = path else {
            return self.skip(Verb::Fill, "no path");
        };

        let cmd = build_fill(op, source, path, params, glyph, &self.opts)?;
        cb(&*self, &cmd);
        drop(cmd);
        self.delivered();
        Ok(())
    }

    fn emit_outline_glyph(
        &mut self,
        cache: &FrozenGlyphCache<'_>,
        glyph: &Glyph,
        op: Operator,
        source: &Pattern,
    ) -> DrawResult<()> {
        let scaled = cache.lookup(glyph.index, GlyphInfo::METRICS | GlyphInfo::PATH)?;
        let params = FillParams {
            fill_rule: self.opts.glyph_fill_rule,
            tolerance: self.opts.glyph_tolerance,
            antialias: self.opts.glyph_antialias,
        };
        let path = scaled.path.as_ref().map(|p| p as &dyn PathSource);
        self.fill_with_glyph(op, source, path, params, Some(glyph))
    }

    /// Bitmap glyphs are not observed.
    fn emit_bitmap_glyph(
        &mut self,
        _cache: &FrozenGlyphCache<'_>,
        glyph: &Glyph,
        _op: Operator,
        _source: &Pattern,
    ) -> DrawResult<()> {
        tracing::debug!(index = glyph.index, "bitmap glyph not reported");
        self.stats.skipped = self.stats.skipped.saturating_add(1);
        Ok(())
    }
}

impl SurfaceBackend for CallbackSurface {
    fn info(&self) -> &'static BackendInfo {
        &CALLBACK_BACKEND
    }

    fn content(&self) -> Content {
        self.content
    }

    /// Similar surfaces are plain recording surfaces; nothing drawn on them is reported.
    fn create_similar(
        &self,
        content: Content,
        _width: i32,
        _height: i32,
    ) -> Box<dyn SurfaceBackend> {
        Box::new(RecordingSurface::new(content))
    }

    fn get_extents(&self) -> Option<Rect> {
        None
    }

    #[tracing::instrument(level = "trace", skip_all, fields(op = ?op))]
    fn paint(&mut self, op: Operator, source: &Pattern, _clip: Option<&Clip>) -> DrawResult<()> {
        let Some(cb) = self.iface.paint.clone() else {
            return self.skip(Verb::Paint, "no paint callback");
        };
        cb(&*self, &build_paint(op, source));
        self.delivered();
        Ok(())
    }

    #[tracing::instrument(level = "trace", skip_all, fields(op = ?op))]
    fn mask(
        &mut self,
        op: Operator,
        source: &Pattern,
        mask: &Pattern,
        _clip: Option<&Clip>,
    ) -> DrawResult<()> {
        let Some(cb) = self.iface.mask.clone() else {
            return self.skip(Verb::Mask, "no mask callback");
        };
        cb(&*self, &build_mask(op, source, mask));
        self.delivered();
        Ok(())
    }

    #[tracing::instrument(level = "trace", skip_all, fields(op = ?op, tolerance = params.tolerance))]
    fn stroke(
        &mut self,
        op: Operator,
        source: &Pattern,
        path: Option<&dyn PathSource>,
        params: StrokeParams<'_>,
        _clip: Option<&Clip>,
    ) -> DrawResult<()> {
        let Some(cb) = self.iface.stroke.clone() else {
            return self.skip(Verb::Stroke, "no stroke callback");
        };
        let Some(path) = path else {
            return self.skip(Verb::Stroke, "no path");
        };

        let built = build_stroke(op, source, path, params, &self.opts);
        let cmd = self.fail(Verb::Stroke, built)?;
        cb(&*self, &cmd);
        drop(cmd);
        self.delivered();
        Ok(())
    }

    #[tracing::instrument(level = "trace", skip_all, fields(op = ?op, fill_rule = ?params.fill_rule))]
    fn fill(
        &mut self,
        op: Operator,
        source: &Pattern,
        path: Option<&dyn PathSource>,
        params: FillParams,
        _clip: Option<&Clip>,
    ) -> DrawResult<()> {
        let status = self.fill_with_glyph(op, source, path, params, None);
        self.fail(Verb::Fill, status)
    }

    #[tracing::instrument(level = "trace", skip_all, fields(op = ?op, glyphs = glyphs.len()))]
    fn show_glyphs(
        &mut self,
        op: Operator,
        source: &Pattern,
        glyphs: &[Glyph],
        font: &dyn ScaledFont,
        _clip: Option<&Clip>,
    ) -> DrawResult<()> {
        let cache = FrozenGlyphCache::new(font);
        for glyph in glyphs {
            let status = match self.emit_outline_glyph(&cache, glyph, op, source) {
                Err(err) if err.is_unsupported() => {
                    self.emit_bitmap_glyph(&cache, glyph, op, source)
                }
                other => other,
            };
            if let Err(err) = status {
                tracing::debug!(index = glyph.index, %err, "glyph run aborted");
                self.stats.failed = self.stats.failed.saturating_add(1);
                return Err(err);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/callback/surface.rs"]
mod tests;
