// src/math/types/vector.rs

use super::Point3D;
use crate::math::{
    error::{MathError, MathResult},
    utils::constants::{PI, PRECISION},
};
use nalgebra::{Matrix3, Rotation3, Unit};

// --- Konvertierungsfunktionen ---

/// Kanonisiert bis zu drei Komponenten zu einem 3D-Punkt; fehlende Komponenten sind 0.
pub fn to_3d(components: &[f64]) -> MathResult<Point3D> {
    if components.len() > 3 {
        return Err(MathError::DimensionMismatch {
            expected: 3,
            actual: components.len(),
        });
    }
    let mut point = Point3D::zeros();
    for (i, value) in components.iter().enumerate() {
        point[i] = *value;
    }
    Ok(point)
}

/// Rotationsmatrix für `angle_rad` um die Achsenrichtung `axis` (Rechte-Hand-Regel).
pub fn rotation_matrix(angle_rad: f64, axis: &Point3D) -> MathResult<Matrix3<f64>> {
    let axis = Unit::try_new(*axis, 0.0).ok_or_else(|| MathError::DegenerateInput {
        reason: "Rotation axis cannot be zero vector".to_string(),
    })?;
    Ok(Rotation3::from_axis_angle(&axis, angle_rad).into_inner())
}

// --- Vektor Erweiterungen ---

/// Erweiterte Vektor-Operationen für nalgebra's Vector3<f64>.
pub trait Vector3DExt {
    /// Winkel zwischen zwei Vektoren in [0, π]; `None` wenn einer der Vektoren null ist.
    fn angle_from(&self, other: &Self) -> Option<f64>;
    fn is_parallel_to(&self, other: &Self, epsilon: f64) -> bool;
    fn is_antiparallel_to(&self, other: &Self, epsilon: f64) -> bool;
    fn is_perpendicular_to(&self, other: &Self, epsilon: f64) -> bool;
    fn to_unit_vector(&self) -> Option<Self>
    where
        Self: Sized;
    /// Komponentenweise Gleichheit innerhalb von `epsilon`.
    fn eql(&self, other: &Self, epsilon: f64) -> bool;
    fn reflection_in_point(&self, point: &Self) -> Self
    where
        Self: Sized;
}

impl Vector3DExt for Point3D {
    fn angle_from(&self, other: &Self) -> Option<f64> {
        let moduli = self.norm() * other.norm();
        if moduli == 0.0 {
            return None;
        }
        let cos_theta = (self.dot(other) / moduli).clamp(-1.0, 1.0);
        Some(cos_theta.acos())
    }

    fn is_parallel_to(&self, other: &Self, epsilon: f64) -> bool {
        self.angle_from(other)
            .is_some_and(|theta| theta.abs() <= epsilon)
    }

    fn is_antiparallel_to(&self, other: &Self, epsilon: f64) -> bool {
        self.angle_from(other)
            .is_some_and(|theta| (theta - PI).abs() <= epsilon)
    }

    fn is_perpendicular_to(&self, other: &Self, epsilon: f64) -> bool {
        match (self.to_unit_vector(), other.to_unit_vector()) {
            (Some(a), Some(b)) => a.dot(&b).abs() <= epsilon,
            _ => false,
        }
    }

    fn to_unit_vector(&self) -> Option<Self> {
        self.try_normalize(0.0)
    }

    fn eql(&self, other: &Self, epsilon: f64) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    fn reflection_in_point(&self, point: &Self) -> Self {
        point * 2.0 - self
    }
}

/// Kurzform für `eql` mit der globalen Toleranz.
pub fn points_equal(a: &Point3D, b: &Point3D) -> bool {
    a.eql(b, PRECISION)
}
