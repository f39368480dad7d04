//! Core pipeline stages: prefix/params, discovery via glob, parsing and
//! ordering of ordinals, and the rename step. These are the primitives
//! consumed by the high-level `api` module.
pub mod discover;
pub mod ordering;
pub mod params;
pub mod rename;
