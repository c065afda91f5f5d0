//! drawtap is a drawing-operation interception layer for a 2D vector-graphics pipeline.
//!
//! A [`CallbackSurface`] accepts the pipeline's drawing verbs (paint, mask, stroke, fill,
//! glyph runs) and, instead of rasterizing them, turns each into a self-contained descriptor
//! and hands it to user callbacks. Debuggers, custom renderers and analysis tools can observe
//! every primitive a client issues without re-implementing the pipeline.
//!
//! # Flow
//!
//! 1. **Walk**: the pipeline path is interpreted segment by segment into an owned
//!    [`CallbackPath`] (move/line/curve/close nodes in 24.8 fixed-point).
//! 2. **Describe**: a [`PaintCommand`], [`MaskCommand`], [`StrokeCommand`] or [`FillCommand`]
//!    is built, borrowing patterns and owning its path and dash copy.
//! 3. **Dispatch**: the registered callback, if any, receives the descriptor; the descriptor
//!    is dropped before the verb returns.
//!
//! Glyph runs are decomposed into one [`FillCommand`] per outline glyph, tagged with the
//! glyph. Bitmap glyphs and clip regions are not reported.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod callback;
mod foundation;
mod pipeline;
mod recording;

pub use callback::command::{
    CallbackClip, FillCommand, MaskCommand, PaintCommand, StrokeCommand, StrokeStyle,
};
pub use callback::interface::{CallbackInterface, FillFn, MaskFn, PaintFn, StrokeFn};
pub use callback::opts::CallbackSurfaceOpts;
pub use callback::path::{CallbackPath, NodeRef, PathNode, PathNodeKind, materialize};
pub use callback::surface::{CALLBACK_BACKEND, CallbackSurface, DispatchStats};
pub use foundation::core::{Affine, BezPath, Fixed, FixedPoint, PathEl, Point, Rect, Stroke};
pub use foundation::error::{DrawError, DrawResult};
pub use pipeline::font::{
    FrozenGlyphCache, Glyph, GlyphInfo, GlyphMetrics, MemoryFont, ScaledFont, ScaledGlyph,
};
pub use pipeline::paint::{
    Antialias, Clip, ColorStop, Content, Extend, FillRule, LineCap, LineJoin, Operator, Pattern,
    PatternKind, Rgba,
};
pub use pipeline::path::{FixedPath, PathOp, PathSink, PathSource};
pub use pipeline::surface::{
    BackendInfo, FillParams, StrokeParams, SurfaceBackend, SurfaceKind, Verb,
};
pub use recording::{RECORDING_BACKEND, RecordedCommand, RecordingSurface};

/// Create a callback surface; `None` leaves every callback slot empty.
pub fn create_callback_surface(
    iface: Option<&CallbackInterface>,
    content: Content,
) -> CallbackSurface {
    CallbackSurface::new(iface, content)
}
