// src/math/geometry/object.rs

use super::{Line, Plane, Segment};
use crate::math::types::Point3D;

/// Geschlossene Menge der Operanden, gegen die Linien, Segmente und Ebenen
/// geprüft werden können.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Point(Point3D),
    Line(Line),
    Segment(Segment),
    Plane(Plane),
}

impl Geometry {
    /// Abstand eines Punktes zu diesem Objekt.
    pub fn distance_to_point(&self, point: &Point3D) -> f64 {
        match self {
            Geometry::Point(p) => (p - point).norm(),
            Geometry::Line(line) => line.distance_from(*point),
            // Ein Segment hat für jeden Punkt einen nächsten Punkt.
            Geometry::Segment(segment) => segment
                .distance_from(*point)
                .unwrap_or_else(|| (segment.start - point).norm()),
            Geometry::Plane(plane) => plane.distance_from(*point),
        }
    }
}

impl From<Point3D> for Geometry {
    fn from(point: Point3D) -> Self {
        Geometry::Point(point)
    }
}

impl From<&Point3D> for Geometry {
    fn from(point: &Point3D) -> Self {
        Geometry::Point(*point)
    }
}

impl From<[f64; 3]> for Geometry {
    fn from(point: [f64; 3]) -> Self {
        Geometry::Point(Point3D::from(point))
    }
}

impl From<[f64; 2]> for Geometry {
    fn from(point: [f64; 2]) -> Self {
        Geometry::Point(Point3D::new(point[0], point[1], 0.0))
    }
}

impl From<Line> for Geometry {
    fn from(line: Line) -> Self {
        Geometry::Line(line)
    }
}

impl From<&Line> for Geometry {
    fn from(line: &Line) -> Self {
        Geometry::Line(*line)
    }
}

impl From<Segment> for Geometry {
    fn from(segment: Segment) -> Self {
        Geometry::Segment(segment)
    }
}

impl From<&Segment> for Geometry {
    fn from(segment: &Segment) -> Self {
        Geometry::Segment(*segment)
    }
}

impl From<Plane> for Geometry {
    fn from(plane: Plane) -> Self {
        Geometry::Plane(plane)
    }
}

impl From<&Plane> for Geometry {
    fn from(plane: &Plane) -> Self {
        Geometry::Plane(*plane)
    }
}
