//! Recording surfaces used for intermediate ("similar") surfaces.

mod surface;

pub use surface::{RECORDING_BACKEND, RecordedCommand, RecordingSurface};
