//! Plain descriptor records delivered to callbacks, and the builders that fill them in.
//!
//! A descriptor owns its materialized path and dash copy and borrows everything else from the
//! pipeline call that produced it. Dropping the descriptor releases what it owns.

use crate::callback::opts::CallbackSurfaceOpts;
use crate::callback::path::{CallbackPath, materialize};
use crate::foundation::core::{Affine, Stroke};
use crate::foundation::error::{DrawError, DrawResult};
use crate::pipeline::font::Glyph;
use crate::pipeline::paint::{Antialias, FillRule, LineCap, LineJoin, Operator, Pattern};
use crate::pipeline::path::PathSource;
use crate::pipeline::surface::{FillParams, StrokeParams};

/// Clip description as seen by callbacks.
///
/// Clip propagation is not implemented: every descriptor reports `clip: None`.
#[derive(Clone, Debug, PartialEq)]
pub struct CallbackClip {
    /// Clip outline.
    pub path: CallbackPath,
    /// Flattening tolerance.
    pub tolerance: f64,
    /// Antialiasing of the clip edge.
    pub antialias: Antialias,
    /// Inside test.
    pub fill_rule: FillRule,
}

/// Callback-facing copy of a stroke style.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Line width in user space.
    pub line_width: f64,
    /// End cap.
    pub line_cap: LineCap,
    /// Corner join.
    pub line_join: LineJoin,
    /// Miter length limit, as a multiple of the line width.
    pub miter_limit: f64,
    /// Dash lengths, `None` for a solid line. Owned by the descriptor.
    pub dash: Option<Vec<f64>>,
    /// Offset into the dash pattern.
    pub dash_offset: f64,
}

impl StrokeStyle {
    /// Copy scalar fields from `style` and deep-copy its dash pattern.
    ///
    /// The dash copy honours `max_dashes` and reports exhaustion or allocation failure as
    /// [`DrawError::NoMemory`].
    pub fn copy_from(style: &Stroke, max_dashes: Option<usize>) -> DrawResult<Self> {
        Ok(Self {
            line_width: style.width,
            line_cap: style.start_cap.into(),
            line_join: style.join.into(),
            miter_limit: style.miter_limit,
            dash: copy_dashes(&style.dash_pattern, max_dashes)?,
            dash_offset: style.dash_offset,
        })
    }

    /// Number of dash entries; `0` for a solid line.
    pub fn dash_count(&self) -> usize {
        self.dash.as_ref().map_or(0, Vec::len)
    }
}

fn copy_dashes(src: &[f64], max_dashes: Option<usize>) -> DrawResult<Option<Vec<f64>>> {
    if src.is_empty() {
        return Ok(None);
    }
    if let Some(max) = max_dashes
        && src.len() > max
    {
        return Err(DrawError::no_memory(format!(
            "dash budget of {max} exceeded by {} entries",
            src.len()
        )));
    }
    let mut dash = Vec::new();
    dash.try_reserve_exact(src.len())?;
    dash.extend_from_slice(src);
    Ok(Some(dash))
}

/// A `paint` verb.
#[derive(Debug)]
pub struct PaintCommand<'a> {
    /// Compositing operator.
    pub op: Operator,
    /// Paint source.
    pub source: &'a Pattern,
    /// Always `None`.
    pub clip: Option<&'a CallbackClip>,
}

/// A `mask` verb.
#[derive(Debug)]
pub struct MaskCommand<'a> {
    /// Compositing operator.
    pub op: Operator,
    /// Paint source.
    pub source: &'a Pattern,
    /// Mask whose alpha modulates `source`.
    pub mask: &'a Pattern,
    /// Always `None`.
    pub clip: Option<&'a CallbackClip>,
}

/// A `stroke` verb.
#[derive(Debug)]
pub struct StrokeCommand<'a> {
    /// Flattening tolerance.
    pub tolerance: f64,
    /// Compositing operator.
    pub op: Operator,
    /// Antialiasing mode.
    pub antialias: Antialias,
    /// Stroke style with owned dash copy.
    pub style: StrokeStyle,
    /// Paint source.
    pub pattern: &'a Pattern,
    /// Stroked outline.
    pub path: CallbackPath,
    /// Always `None`.
    pub clip: Option<&'a CallbackClip>,
    /// Current transformation matrix.
    pub matrix: &'a Affine,
    /// Inverse of `matrix`.
    pub inv_matrix: &'a Affine,
}

/// A `fill` verb, or one outline glyph of a glyph run.
#[derive(Debug)]
pub struct FillCommand<'a> {
    /// Flattening tolerance.
    pub tolerance: f64,
    /// Compositing operator.
    pub op: Operator,
    /// Inside test.
    pub fill_rule: FillRule,
    /// Antialiasing mode.
    pub antialias: Antialias,
    /// Paint source.
    pub pattern: &'a Pattern,
    /// Filled outline.
    pub path: CallbackPath,
    /// Always `None`.
    pub clip: Option<&'a CallbackClip>,
    /// The originating glyph when the fill comes from a glyph run.
    pub glyph: Option<&'a Glyph>,
}

pub(crate) fn build_paint(op: Operator, source: &Pattern) -> PaintCommand<'_> {
    PaintCommand {
        op,
        source,
        clip: None,
    }
}

pub(crate) fn build_mask<'a>(
    op: Operator,
    source: &'a Pattern,
    mask: &'a Pattern,
) -> MaskCommand<'a> {
    MaskCommand {
        op,
        source,
        mask,
        clip: None,
    }
}

pub(crate) fn build_stroke<'a>(
    op: Operator,
    source: &'a Pattern,
    path: &dyn PathSource,
    params: StrokeParams<'a>,
    opts: &CallbackSurfaceOpts,
) -> DrawResult<StrokeCommand<'a>> {
    let path = materialize(path, opts.max_path_nodes)?;
    let style = StrokeStyle::copy_from(params.style, opts.max_dashes)?;
    Ok(StrokeCommand {
        tolerance: params.tolerance,
        op,
        antialias: params.antialias,
        style,
        pattern: source,
        path,
        clip: None,
        matrix: params.ctm,
        inv_matrix: params.ctm_inverse,
    })
}

pub(crate) fn build_fill<'a>(
    op: Operator,
    source: &'a Pattern,
    path: &dyn PathSource,
    params: FillParams,
    glyph: Option<&'a Glyph>,
    opts: &CallbackSurfaceOpts,
) -> DrawResult<FillCommand<'a>> {
    let path = materialize(path, opts.max_path_nodes)?;
    Ok(FillCommand {
        tolerance: params.tolerance,
        op,
        fill_rule: params.fill_rule,
        antialias: params.antialias,
        pattern: source,
        path,
        clip: None,
        glyph,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/callback/command.rs"]
mod tests;
