// src/math/geometry/polygon/operations/mod.rs
pub mod triangulation;

pub use triangulation::*;
