use crate::foundation::error::{DrawError, DrawResult};
use crate::pipeline::paint::{Antialias, FillRule};

/// Options for a [`crate::CallbackSurface`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CallbackSurfaceOpts {
    /// Maximum nodes in one materialized path. Exceeding it fails the verb with
    /// [`DrawError::NoMemory`].
    pub max_path_nodes: Option<usize>,
    /// Maximum dash entries copied for one stroke, with the same failure mode.
    pub max_dashes: Option<usize>,
    /// Tolerance reported for glyph outline fills.
    pub glyph_tolerance: f64,
    /// Fill rule reported for glyph outline fills.
    pub glyph_fill_rule: FillRule,
    /// Antialiasing reported for glyph outline fills.
    pub glyph_antialias: Antialias,
}

impl Default for CallbackSurfaceOpts {
    fn default() -> Self {
        Self {
            max_path_nodes: None,
            max_dashes: None,
            glyph_tolerance: 0.1,
            glyph_fill_rule: FillRule::Winding,
            glyph_antialias: Antialias::Default,
        }
    }
}

impl CallbackSurfaceOpts {
    /// Parse options from JSON; missing fields take their defaults.
    pub fn from_json(s: &str) -> DrawResult<Self> {
        let opts: Self = serde_json::from_str(s)
            .map_err(|e| DrawError::validation(format!("invalid surface options: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Reject options no surface can honour.
    pub fn validate(&self) -> DrawResult<()> {
        if !self.glyph_tolerance.is_finite() || self.glyph_tolerance <= 0.0 {
            return Err(DrawError::validation(
                "glyph_tolerance must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Return options with a node budget per path.
    pub fn with_max_path_nodes(mut self, max: Option<usize>) -> Self {
        self.max_path_nodes = max;
        self
    }

    /// Return options with a dash budget per stroke.
    pub fn with_max_dashes(mut self, max: Option<usize>) -> Self {
        self.max_dashes = max;
        self
    }

    /// Return options with a different glyph fill tolerance.
    pub fn with_glyph_tolerance(mut self, tolerance: f64) -> Self {
        self.glyph_tolerance = tolerance;
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/callback/opts.rs"]
mod tests;
