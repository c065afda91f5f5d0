/// Convenience result type used across drawtap.
pub type DrawResult<T> = Result<T, DrawError>;

/// Per-call failure taxonomy reported back to the drawing pipeline.
///
/// A failed call never leaves the surface in a bad state: the pipeline may keep
/// issuing further drawing verbs after any of these.
#[derive(thiserror::Error, Debug)]
pub enum DrawError {
    /// An allocation failed or a configured budget was exhausted.
    #[error("out of memory: {0}")]
    NoMemory(String),

    /// The requested representation is not available; used to fall back from outline
    /// glyphs to bitmap glyphs.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// The upstream path walk reported a failure.
    #[error("path interpretation error: {0}")]
    Interpret(String),

    /// Invalid user-provided options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from a collaborator (font backend, pattern source, ...).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DrawError {
    /// Build a [`DrawError::NoMemory`] value.
    pub fn no_memory(msg: impl Into<String>) -> Self {
        Self::NoMemory(msg.into())
    }

    /// Build a [`DrawError::Unsupported`] value.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Build a [`DrawError::Interpret`] value.
    pub fn interpret(msg: impl Into<String>) -> Self {
        Self::Interpret(msg.into())
    }

    /// Build a [`DrawError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// `true` for [`DrawError::NoMemory`].
    pub fn is_no_memory(&self) -> bool {
        matches!(self, Self::NoMemory(_))
    }

    /// `true` for [`DrawError::Unsupported`].
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}

impl From<std::collections::TryReserveError> for DrawError {
    fn from(err: std::collections::TryReserveError) -> Self {
        Self::NoMemory(err.to_string())
    }
}

impl From<smallvec::CollectionAllocErr> for DrawError {
    fn from(err: smallvec::CollectionAllocErr) -> Self {
        Self::NoMemory(format!("{err:?}"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
