//! Interfaces of the host drawing pipeline that surfaces plug into.

pub(crate) mod font;
pub(crate) mod paint;
pub(crate) mod path;
pub(crate) mod surface;
