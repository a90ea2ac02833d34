// src/math/geometry/plane.rs

use super::{Geometry, Line};
use crate::math::{
    error::{MathError, MathResult},
    types::{Matrix3, Point3D, Vector3DExt},
    utils::constants::PRECISION,
};

/// Ebene aus Ankerpunkt und Einheitsnormale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub(crate) anchor: Point3D,
    pub(crate) normal: Point3D,
}

impl Plane {
    /// Erstellt eine Ebene; die Normale wird normiert.
    pub fn new(anchor: Point3D, normal: Point3D) -> MathResult<Self> {
        let normal = normal
            .to_unit_vector()
            .ok_or_else(|| MathError::DegenerateInput {
                reason: "Plane normal cannot be zero vector".to_string(),
            })?;
        Ok(Self { anchor, normal })
    }

    /// Ebene durch drei Punkte, Normale nach Rechte-Hand-Regel über `p1 -> p2 -> p3`.
    /// `None` wenn die Punkte kollinear sind.
    pub fn from_points(p1: &Point3D, p2: &Point3D, p3: &Point3D) -> Option<Self> {
        let normal = (p2 - p1).cross(&(p3 - p1)).try_normalize(f64::EPSILON)?;
        Some(Self {
            anchor: *p1,
            normal,
        })
    }

    /// Ebene eines geschlossenen Punktzuges (Newell-Verfahren).
    ///
    /// Die Normale folgt dem Umlaufsinn des gesamten Zuges, nicht nur der ersten
    /// Ecke. `None` wenn der Zug keine Fläche aufspannt.
    pub fn from_outline(points: &[Point3D]) -> Option<Self> {
        let first = points.first()?;
        let mut normal = Point3D::zeros();
        for (i, current) in points.iter().enumerate() {
            let next = &points[(i + 1) % points.len()];
            normal += (current - first).cross(&(next - first));
        }
        Some(Self {
            anchor: *first,
            normal: normal.try_normalize(f64::EPSILON)?,
        })
    }

    pub fn anchor(&self) -> &Point3D {
        &self.anchor
    }

    pub fn with_flipped_normal(&self) -> Plane {
        Plane {
            anchor: self.anchor,
            normal: -self.normal,
        }
    }

    pub fn normal(&self) -> &Point3D {
        &self.normal
    }

    pub fn eql(&self, other: &Plane) -> bool {
        self.contains(other.anchor) && self.is_parallel_to(other)
    }

    pub fn translate(&self, vector: &Point3D) -> Plane {
        Plane {
            anchor: self.anchor + vector,
            normal: self.normal,
        }
    }

    /// Wendet die Rotationsmatrix `rotation` um die Achse `axis` an.
    pub fn rotate(&self, rotation: &Matrix3<f64>, axis: &Line) -> Plane {
        let center = axis.closest_point_to_point(&self.anchor);
        Plane {
            anchor: center + rotation * (self.anchor - center),
            normal: rotation * self.normal,
        }
    }

    pub fn is_parallel_to(&self, obj: impl Into<Geometry>) -> bool {
        match obj.into() {
            Geometry::Point(_) => false,
            Geometry::Line(line) => self.normal.is_perpendicular_to(&line.direction, PRECISION),
            Geometry::Segment(segment) => self.is_parallel_to(segment.line),
            Geometry::Plane(plane) => {
                self.normal.is_parallel_to(&plane.normal, PRECISION)
                    || self.normal.is_antiparallel_to(&plane.normal, PRECISION)
            }
        }
    }

    /// Vorzeichenloser Abstand; 0 für alles, was die Ebene schneidet.
    pub fn distance_from(&self, obj: impl Into<Geometry>) -> f64 {
        match obj.into() {
            Geometry::Point(point) => self.signed_distance(&point).abs(),
            Geometry::Line(line) => {
                if self.intersects(line) {
                    0.0
                } else {
                    self.signed_distance(&line.anchor).abs()
                }
            }
            Geometry::Segment(segment) => {
                let a = self.signed_distance(&segment.start);
                let b = self.signed_distance(&segment.end);
                if a * b <= 0.0 { 0.0 } else { a.abs().min(b.abs()) }
            }
            Geometry::Plane(plane) => {
                if self.intersects(plane) {
                    0.0
                } else {
                    self.signed_distance(&plane.anchor).abs()
                }
            }
        }
    }

    pub fn contains(&self, obj: impl Into<Geometry>) -> bool {
        self.contains_eps(obj, PRECISION)
    }

    pub fn contains_eps(&self, obj: impl Into<Geometry>, epsilon: f64) -> bool {
        match obj.into() {
            Geometry::Point(point) => self.signed_distance(&point).abs() <= epsilon,
            Geometry::Line(line) => {
                self.contains_eps(line.anchor, epsilon)
                    && self.contains_eps(line.anchor + line.direction, epsilon)
            }
            Geometry::Segment(segment) => {
                self.contains_eps(segment.start, epsilon) && self.contains_eps(segment.end, epsilon)
            }
            Geometry::Plane(plane) => {
                self.contains_eps(plane.anchor, epsilon)
                    && (self.normal.is_parallel_to(&plane.normal, epsilon)
                        || self.normal.is_antiparallel_to(&plane.normal, epsilon))
            }
        }
    }

    pub fn intersects(&self, obj: impl Into<Geometry>) -> bool {
        match obj.into() {
            Geometry::Point(point) => self.contains(point),
            Geometry::Line(line) => !self.is_parallel_to(line),
            Geometry::Segment(segment) => segment.intersects(*self),
            Geometry::Plane(plane) => !self.is_parallel_to(plane),
        }
    }

    /// Schnitt mit einem Objekt: ein Punkt für Geraden und Strecken, eine Gerade für Ebenen.
    pub fn intersection_with(&self, obj: impl Into<Geometry>) -> Option<Geometry> {
        match obj.into() {
            Geometry::Point(point) => self.contains(point).then_some(Geometry::Point(point)),
            Geometry::Line(line) => self.line_intersection(&line).map(Geometry::Point),
            Geometry::Segment(segment) => segment.intersection_with(*self).map(Geometry::Point),
            Geometry::Plane(plane) => self.plane_intersection(&plane).map(Geometry::Line),
        }
    }

    pub fn line_intersection(&self, line: &Line) -> Option<Point3D> {
        if !self.intersects(line) {
            return None;
        }
        let t = self.normal.dot(&(self.anchor - line.anchor)) / self.normal.dot(&line.direction);
        Some(line.anchor + line.direction * t)
    }

    pub fn plane_intersection(&self, other: &Plane) -> Option<Line> {
        if !self.intersects(other) {
            return None;
        }
        let direction = self.normal.cross(&other.normal);
        let h1 = self.normal.dot(&self.anchor);
        let h2 = other.normal.dot(&other.anchor);
        let anchor = (direction.cross(&other.normal) * h1 + self.normal.cross(&direction) * h2)
            / direction.norm_squared();
        Line::new(anchor, direction).ok()
    }

    /// Lotfußpunkt des Punktes auf der Ebene.
    pub fn point_closest_to(&self, point: &Point3D) -> Point3D {
        point - self.normal * self.signed_distance(point)
    }

    pub(crate) fn reflection_of(&self, point: &Point3D) -> Point3D {
        point - self.normal * (2.0 * self.signed_distance(point))
    }

    fn signed_distance(&self, point: &Point3D) -> f64 {
        (point - self.anchor).dot(&self.normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{
        geometry::Segment,
        types::rotation_matrix,
        utils::{comparison, constants::PI},
    };
    use approx::assert_relative_eq;

    fn xy_plane() -> Plane {
        Plane::new(Point3D::zeros(), Point3D::new(0.0, 0.0, 5.0)).unwrap()
    }

    #[test]
    fn test_zero_normal_is_rejected() {
        assert!(Plane::new(Point3D::zeros(), Point3D::zeros()).is_err());
        assert_relative_eq!(*xy_plane().normal(), Point3D::z());
    }

    #[test]
    fn test_from_points_follows_winding() {
        let p = Plane::from_points(
            &Point3D::new(0.0, 0.0, 1.0),
            &Point3D::new(1.0, 0.0, 1.0),
            &Point3D::new(0.0, 1.0, 1.0),
        )
        .unwrap();
        assert_relative_eq!(*p.normal(), Point3D::z());
        assert!(p.contains([4.0, -2.0, 1.0]));

        let collinear = Plane::from_points(
            &Point3D::zeros(),
            &Point3D::new(1.0, 1.0, 1.0),
            &Point3D::new(2.0, 2.0, 2.0),
        );
        assert!(collinear.is_none());
    }

    #[test]
    fn test_from_outline_follows_overall_winding() {
        // Beginnt an der einspringenden Ecke eines L.
        let outline = [
            Point3D::new(1.0, 1.0, 0.0),
            Point3D::new(1.0, 2.0, 0.0),
            Point3D::new(0.0, 2.0, 0.0),
            Point3D::new(0.0, 0.0, 0.0),
            Point3D::new(2.0, 0.0, 0.0),
            Point3D::new(2.0, 1.0, 0.0),
        ];
        let plane = Plane::from_outline(&outline).unwrap();
        assert_relative_eq!(*plane.normal(), Point3D::z(), epsilon = 1e-12);

        let mut reversed = outline;
        reversed.reverse();
        let flipped = Plane::from_outline(&reversed).unwrap();
        assert_relative_eq!(*flipped.normal(), -Point3D::z(), epsilon = 1e-12);
        assert_eq!(flipped.with_flipped_normal().normal(), plane.normal());

        let line = [Point3D::zeros(), Point3D::x(), Point3D::x() * 2.0];
        assert!(Plane::from_outline(&line).is_none());
        assert!(Plane::from_outline(&[]).is_none());
    }

    #[test]
    fn test_point_queries() {
        let plane = xy_plane();
        let p = Point3D::new(1.0, 2.0, -3.0);
        assert!(comparison::nearly_equal(plane.distance_from(p), 3.0));
        assert_relative_eq!(plane.point_closest_to(&p), Point3D::new(1.0, 2.0, 0.0));
        assert!(!plane.contains(p));
        assert!(plane.contains_eps(p, 3.5));
    }

    #[test]
    fn test_plane_plane_intersection() {
        let xy = xy_plane();
        let xz = Plane::new(Point3D::new(0.0, 0.0, 0.0), Point3D::y()).unwrap();
        let line = xy.plane_intersection(&xz).unwrap();
        assert!(line.eql(&Line::x_axis()));

        let lifted = xy.translate(&Point3D::new(0.0, 0.0, 2.0));
        assert!(xy.is_parallel_to(lifted));
        assert!(xy.intersection_with(lifted).is_none());
        assert!(comparison::nearly_equal(xy.distance_from(lifted), 2.0));
        assert!(!xy.eql(&lifted));
        assert!(xy.eql(&Plane::new(Point3D::new(3.0, 3.0, 0.0), -Point3D::z()).unwrap()));
    }

    #[test]
    fn test_contains_plane_uses_given_tolerance() {
        let xy = xy_plane();
        let lifted = xy.translate(&Point3D::new(0.0, 0.0, 1e-4));
        assert!(!xy.contains(lifted));
        assert!(xy.contains_eps(lifted, 1e-3));

        let tilted = Plane::new(Point3D::zeros(), Point3D::new(1e-4, 0.0, 1.0)).unwrap();
        assert!(!xy.contains(tilted));
        assert!(xy.contains_eps(tilted, 1e-3));
        assert!(xy.contains_eps(tilted.with_flipped_normal(), 1e-3));
    }

    #[test]
    fn test_segment_operands() {
        let plane = xy_plane();
        let crossing =
            Segment::new(Point3D::new(1.0, 1.0, -1.0), Point3D::new(1.0, 1.0, 1.0)).unwrap();
        let above =
            Segment::new(Point3D::new(0.0, 0.0, 1.0), Point3D::new(1.0, 0.0, 3.0)).unwrap();
        assert!(plane.intersects(crossing));
        assert_eq!(
            plane.intersection_with(crossing),
            Some(Geometry::Point(Point3D::new(1.0, 1.0, 0.0)))
        );
        assert!(!plane.intersects(above));
        assert!(comparison::nearly_equal(plane.distance_from(above), 1.0));
    }

    #[test]
    fn test_rotate_about_axis() {
        let plane = xy_plane().translate(&Point3D::new(0.0, 0.0, 1.0));
        let rotation = rotation_matrix(PI / 2.0, &Point3D::x()).unwrap();
        let rotated = plane.rotate(&rotation, &Line::x_axis());
        assert_relative_eq!(*rotated.normal(), -Point3D::y(), epsilon = 1e-12);
        assert_relative_eq!(*rotated.anchor(), Point3D::new(0.0, -1.0, 0.0), epsilon = 1e-12);
    }
}
