use crate::foundation::core::{BezPath, Rect};
use crate::foundation::error::DrawResult;
use crate::pipeline::font::{Glyph, ScaledFont};
use crate::pipeline::paint::{Clip, Content, FillRule, Operator, Pattern};
use crate::pipeline::path::PathSource;
use crate::pipeline::surface::{
    BackendInfo, FillParams, StrokeParams, SurfaceBackend, SurfaceKind, Verb,
};

/// Backend table of [`RecordingSurface`].
pub static RECORDING_BACKEND: BackendInfo = BackendInfo {
    kind: SurfaceKind::Recording,
    name: "recording",
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

/// One verb kept by a [`RecordingSurface`]. Patterns are not retained.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedCommand {
    /// `paint`.
    Paint {
        /// Compositing operator.
        op: Operator,
    },
    /// `mask`.
    Mask {
        /// Compositing operator.
        op: Operator,
    },
    /// `stroke`.
    Stroke {
        /// Compositing operator.
        op: Operator,
        /// Stroked outline.
        path: BezPath,
        /// Line width.
        line_width: f64,
    },
    /// `fill`.
    Fill {
        /// Compositing operator.
        op: Operator,
        /// Filled outline.
        path: BezPath,
        /// Inside test.
        fill_rule: FillRule,
    },
    /// `show_glyphs`.
    Glyphs {
        /// Compositing operator.
        op: Operator,
        /// Glyph run.
        glyphs: Vec<Glyph>,
    },
}

/// An unbounded vector surface that keeps the verbs drawn on it.
///
/// Used for intermediate surfaces; it never reports anything to callbacks.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    content: Content,
    commands: Vec<RecordedCommand>,
}

impl RecordingSurface {
    /// Empty recording.
    pub fn new(content: Content) -> Self {
        Self {
            content,
            commands: Vec::new(),
        }
    }

    /// Recorded verbs, oldest first.
    pub fn commands(&self) -> &[RecordedCommand] {
        &self.commands
    }

    /// Forget every recorded verb.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

fn flatten(path: &dyn PathSource) -> DrawResult<BezPath> {
    let mut out = BezPath::new();
    path.interpret(&mut out)?;
    Ok(out)
}

impl SurfaceBackend for RecordingSurface {
    fn info(&self) -> &'static BackendInfo {
        &RECORDING_BACKEND
    }

    fn content(&self) -> Content {
        self.content
    }

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

    fn paint(&mut self, op: Operator, _source: &Pattern, _clip: Option<&Clip>) -> DrawResult<()> {
        self.commands.push(RecordedCommand::Paint { op });
        Ok(())
    }

    fn mask(
        &mut self,
        op: Operator,
        _source: &Pattern,
        _mask: &Pattern,
        _clip: Option<&Clip>,
    ) -> DrawResult<()> {
        self.commands.push(RecordedCommand::Mask { op });
        Ok(())
    }

    fn stroke(
        &mut self,
        op: Operator,
        _source: &Pattern,
        path: Option<&dyn PathSource>,
        params: StrokeParams<'_>,
        _clip: Option<&Clip>,
    ) -> DrawResult<()> {
        let Some(path) = path else {
            return Ok(());
        };
        self.commands.push(RecordedCommand::Stroke {
            op,
            path: flatten(path)?,
            line_width: params.style.width,
        });
        Ok(())
    }

    fn fill(
        &mut self,
        op: Operator,
        _source: &Pattern,
        path: Option<&dyn PathSource>,
        params: FillParams,
        _clip: Option<&Clip>,
    ) -> DrawResult<()> {
        let Some(path) = path else {
            return Ok(());
        };
        self.commands.push(RecordedCommand::Fill {
            op,
            path: flatten(path)?,
            fill_rule: params.fill_rule,
        });
        Ok(())
    }

    fn show_glyphs(
        &mut self,
        op: Operator,
        _source: &Pattern,
        glyphs: &[Glyph],
        _font: &dyn ScaledFont,
        _clip: Option<&Clip>,
    ) -> DrawResult<()> {
        self.commands.push(RecordedCommand::Glyphs {
            op,
            glyphs: glyphs.to_vec(),
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/recording/surface.rs"]
mod tests;
