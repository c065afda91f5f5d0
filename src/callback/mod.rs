//! The callback surface: path materialization, descriptor building and verb dispatch.

pub(crate) mod command;
pub(crate) mod interface;
pub(crate) mod opts;
pub(crate) mod path;
pub(crate) mod surface;
