// src/math/types/mod.rs
pub mod ring;
pub mod vector;

pub use ring::*;
pub use vector::*;

// Re-export häufig verwendete externe Typen
pub use nalgebra::{Matrix3, Vector3};

// Einheitliche Typen für das gesamte Modul
pub type Point3D = Vector3<f64>;
