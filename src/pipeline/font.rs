use std::cell::Cell;
use std::collections::HashMap;
use std::ops::BitOr;
use std::sync::Arc;

use crate::foundation::error::{DrawError, DrawResult};
use crate::pipeline::path::FixedPath;

/// A positioned glyph in a glyph run.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Glyph {
    /// Glyph id within the font.
    pub index: u64,
    /// Origin, horizontal.
    pub x: f64,
    /// Origin, vertical.
    pub y: f64,
}

impl Glyph {
    /// Build a glyph at `(x, y)`.
    pub fn new(index: u64, x: f64, y: f64) -> Self {
        Self { index, x, y }
    }
}

/// Set of glyph representations requested from a [`ScaledFont`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GlyphInfo(u8);

impl GlyphInfo {
    /// Extents and advance.
    pub const METRICS: GlyphInfo = GlyphInfo(1);
    /// Vector outline.
    pub const PATH: GlyphInfo = GlyphInfo(1 << 1);
    /// Rasterized bitmap.
    pub const SURFACE: GlyphInfo = GlyphInfo(1 << 2);

    /// `true` when every flag of `other` is set in `self`.
    pub fn contains(self, other: GlyphInfo) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for GlyphInfo {
    type Output = GlyphInfo;

    fn bitor(self, rhs: GlyphInfo) -> GlyphInfo {
        GlyphInfo(self.0 | rhs.0)
    }
}

/// Glyph extents in device space.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlyphMetrics {
    /// Left side bearing.
    pub x_bearing: f64,
    /// Top side bearing.
    pub y_bearing: f64,
    /// Ink width.
    pub width: f64,
    /// Ink height.
    pub height: f64,
    /// Horizontal advance.
    pub x_advance: f64,
    /// Vertical advance.
    pub y_advance: f64,
}

/// A glyph resolved by a font cache.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScaledGlyph {
    /// Glyph id.
    pub index: u64,
    /// Extents.
    pub metrics: GlyphMetrics,
    /// Outline relative to the glyph origin, if the glyph has one.
    pub path: Option<FixedPath>,
}

/// A font at a fixed size and transform, with a glyph cache.
pub trait ScaledFont {
    /// Resolve `index` with at least the representations in `info`.
    ///
    /// Returns [`DrawError::Unsupported`] when a requested representation does not exist
    /// for this glyph (for example an outline for a bitmap-only glyph).
    fn lookup_glyph(&self, index: u64, info: GlyphInfo) -> DrawResult<Arc<ScaledGlyph>>;

    /// Pin cached glyphs until the matching [`ScaledFont::thaw_cache`].
    fn freeze_cache(&self);

    /// Release a previous [`ScaledFont::freeze_cache`].
    fn thaw_cache(&self);
}

/// Keeps a font's glyph cache frozen while alive.
pub struct FrozenGlyphCache<'a> {
    font: &'a dyn ScaledFont,
}

impl<'a> FrozenGlyphCache<'a> {
    /// Freeze `font`'s cache; it is thawed when the guard drops.
    pub fn new(font: &'a dyn ScaledFont) -> Self {
        font.freeze_cache();
        Self { font }
    }

    /// Look up a glyph through the frozen cache.
    pub fn lookup(&self, index: u64, info: GlyphInfo) -> DrawResult<Arc<ScaledGlyph>> {
        self.font.lookup_glyph(index, info)
    }
}

impl Drop for FrozenGlyphCache<'_> {
    fn drop(&mut self) {
        self.font.thaw_cache();
    }
}

#[derive(Clone, Debug)]
enum MemoryGlyph {
    Outline(Arc<ScaledGlyph>),
    Bitmap(Arc<ScaledGlyph>),
}

/// In-memory [`ScaledFont`] with explicitly registered glyphs.
///
/// Unknown glyph ids fail with [`DrawError::Validation`]; bitmap-only glyphs fail outline
/// lookups with [`DrawError::Unsupported`].
#[derive(Debug, Default)]
pub struct MemoryFont {
    glyphs: HashMap<u64, MemoryGlyph>,
    freeze_depth: Cell<u32>,
    freezes: Cell<u32>,
}

impl MemoryFont {
    /// Empty font.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an outline glyph.
    pub fn insert_outline(&mut self, index: u64, metrics: GlyphMetrics, path: FixedPath) {
        let glyph = ScaledGlyph {
            index,
            metrics,
            path: Some(path),
        };
        self.glyphs
            .insert(index, MemoryGlyph::Outline(Arc::new(glyph)));
    }

    /// Register a bitmap-only glyph.
    pub fn insert_bitmap(&mut self, index: u64, metrics: GlyphMetrics) {
        let glyph = ScaledGlyph {
            index,
            metrics,
            path: None,
        };
        self.glyphs
            .insert(index, MemoryGlyph::Bitmap(Arc::new(glyph)));
    }

    /// `true` while at least one freeze is outstanding.
    pub fn is_frozen(&self) -> bool {
        self.freeze_depth.get() > 0
    }

    /// Total number of freezes so far.
    pub fn freeze_count(&self) -> u32 {
        self.freezes.get()
    }
}

impl ScaledFont for MemoryFont {
    fn lookup_glyph(&self, index: u64, info: GlyphInfo) -> DrawResult<Arc<ScaledGlyph>> {
        match self.glyphs.get(&index) {
            None => Err(DrawError::validation(format!("unknown glyph {index}"))),
            Some(MemoryGlyph::Outline(g)) => Ok(Arc::clone(g)),
            Some(MemoryGlyph::Bitmap(_)) if info.contains(GlyphInfo::PATH) => Err(
                DrawError::unsupported(format!("glyph {index} has no outline")),
            ),
            Some(MemoryGlyph::Bitmap(g)) => Ok(Arc::clone(g)),
        }
    }

    fn freeze_cache(&self) {
        self.freeze_depth.set(self.freeze_depth.get() + 1);
        self.freezes.set(self.freezes.get() + 1);
    }

    fn thaw_cache(&self) {
        self.freeze_depth
            .set(self.freeze_depth.get().saturating_sub(1));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/font.rs"]
mod tests;
