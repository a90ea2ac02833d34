// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    /// Globale Toleranz für alle Gleichheits-, Enthaltenseins- und Parallelitätstests.
    pub const PRECISION: f64 = 1e-6;
    pub const PI: f64 = std::f64::consts::PI;
    pub const TAU: f64 = std::f64::consts::TAU; // Eine volle Umdrehung
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::PRECISION;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f64, b: f64) -> bool {
        nearly_equal_eps(a, b, PRECISION)
    }

    /// Prüft ob zwei Floats mit custom Toleranz gleich sind
    pub fn nearly_equal_eps(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() <= epsilon
    }

    /// Prüft ob Float (nahezu) Null ist
    pub fn nearly_zero(a: f64) -> bool {
        a.abs() <= PRECISION
    }
}

#[cfg(test)]
mod tests {
    use super::comparison::*;

    #[test]
    fn test_tolerance_is_inclusive() {
        assert!(nearly_equal(1.0, 1.0 + 1e-7));
        assert!(nearly_equal_eps(1.0, 1.5, 0.5));
        assert!(!nearly_equal(1.0, 1.001));
        assert!(nearly_zero(-5e-7));
    }
}
