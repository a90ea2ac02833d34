// src/math/geometry/segment.rs

use super::{Geometry, Line, Plane};
use crate::math::{
    error::MathResult,
    types::{Point3D, Vector3DExt, points_equal},
    utils::constants::PRECISION,
};

/// Strecke zwischen zwei Endpunkten, getragen von der Geraden durch beide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub(crate) start: Point3D,
    pub(crate) end: Point3D,
    pub(crate) line: Line,
}

impl Segment {
    /// Schlägt fehl, wenn Start und Ende zusammenfallen.
    pub fn new(start: Point3D, end: Point3D) -> MathResult<Self> {
        let line = Line::new(start, end - start)?;
        Ok(Self { start, end, line })
    }

    pub fn start(&self) -> &Point3D {
        &self.start
    }

    pub fn end(&self) -> &Point3D {
        &self.end
    }

    pub fn line(&self) -> &Line {
        &self.line
    }

    /// Gleich unabhängig von der Richtung der Strecke.
    pub fn eql(&self, other: &Segment) -> bool {
        (points_equal(&self.start, &other.start) && points_equal(&self.end, &other.end))
            || (points_equal(&self.start, &other.end) && points_equal(&self.end, &other.start))
    }

    pub fn length(&self) -> f64 {
        self.to_vector().norm()
    }

    pub fn to_vector(&self) -> Point3D {
        self.end - self.start
    }

    pub fn midpoint(&self) -> Point3D {
        (self.start + self.end) * 0.5
    }

    /// Ebene durch den Mittelpunkt, senkrecht zur Strecke.
    pub fn bisecting_plane(&self) -> Plane {
        Plane {
            anchor: self.midpoint(),
            normal: self.line.direction,
        }
    }

    pub fn translate(&self, vector: &Point3D) -> Segment {
        Segment {
            start: self.start + vector,
            end: self.end + vector,
            line: self.line.translate(vector),
        }
    }

    pub fn is_parallel_to(&self, obj: impl Into<Geometry>) -> bool {
        self.line.is_parallel_to(obj)
    }

    /// Abstand zwischen dem nächsten Punkt der Strecke und `obj`.
    pub fn distance_from(&self, obj: impl Into<Geometry>) -> Option<f64> {
        let obj = obj.into();
        self.point_closest_to(obj)
            .map(|point| obj.distance_to_point(&point))
    }

    pub fn contains(&self, obj: impl Into<Geometry>) -> bool {
        self.contains_eps(obj, PRECISION)
    }

    pub fn contains_eps(&self, obj: impl Into<Geometry>, epsilon: f64) -> bool {
        match obj.into() {
            Geometry::Point(point) => {
                if self.start.eql(&point, epsilon) {
                    return true;
                }
                let from_point = self.start - point;
                let vector = self.to_vector();
                from_point.is_antiparallel_to(&vector, epsilon)
                    && from_point.norm() <= vector.norm() + epsilon
            }
            Geometry::Segment(segment) => {
                self.contains_eps(segment.start, epsilon) && self.contains_eps(segment.end, epsilon)
            }
            Geometry::Line(_) | Geometry::Plane(_) => false,
        }
    }

    pub fn intersects(&self, obj: impl Into<Geometry>) -> bool {
        self.intersection_with(obj).is_some()
    }

    pub fn intersection_with(&self, obj: impl Into<Geometry>) -> Option<Point3D> {
        let obj = obj.into();
        if !self.line.intersects(obj) {
            return None;
        }
        let point = self.line.intersection_with(obj)?;
        self.contains(point).then_some(point)
    }

    /// Nächster Punkt der Strecke; außerhalb liegende Lotfußpunkte werden auf
    /// den näheren Endpunkt geklemmt.
    pub fn point_closest_to(&self, obj: impl Into<Geometry>) -> Option<Point3D> {
        match obj.into() {
            Geometry::Plane(plane) => {
                let point = plane.line_intersection(&self.line)?;
                self.point_closest_to(point)
            }
            obj => {
                let point = self.line.point_closest_to(obj)?;
                if self.contains(point) {
                    return Some(point);
                }
                let position = (point - self.start).dot(&self.line.direction);
                Some(if position < 0.0 { self.start } else { self.end })
            }
        }
    }
}
