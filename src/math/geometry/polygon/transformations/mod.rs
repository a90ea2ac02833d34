// src/math/geometry/polygon/transformations/mod.rs

// Transformationen sind inhärente Methoden von `Polygon`.
pub mod affine;
pub mod projection;
