// src/math/geometry/line.rs

use super::Geometry;
use super::Plane;
use crate::math::{
    error::{MathError, MathResult},
    types::{Matrix3, Point3D, Vector3DExt, rotation_matrix},
    utils::constants::{PI, PRECISION},
};

/// Unendliche Gerade aus Ankerpunkt und normierter Richtung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub(crate) anchor: Point3D,
    pub(crate) direction: Point3D,
}

impl Line {
    /// Erstellt eine Gerade; die Richtung wird normiert.
    pub fn new(anchor: Point3D, direction: Point3D) -> MathResult<Self> {
        let direction = direction
            .to_unit_vector()
            .ok_or_else(|| MathError::DegenerateInput {
                reason: "Line direction cannot be zero vector".to_string(),
            })?;
        Ok(Self { anchor, direction })
    }

    pub fn x_axis() -> Self {
        Self {
            anchor: Point3D::zeros(),
            direction: Point3D::x(),
        }
    }

    pub fn y_axis() -> Self {
        Self {
            anchor: Point3D::zeros(),
            direction: Point3D::y(),
        }
    }

    pub fn z_axis() -> Self {
        Self {
            anchor: Point3D::zeros(),
            direction: Point3D::z(),
        }
    }

    pub fn anchor(&self) -> &Point3D {
        &self.anchor
    }

    pub fn direction(&self) -> &Point3D {
        &self.direction
    }

    /// Zwei Geraden sind gleich, wenn sie parallel sind und eine den Anker der anderen enthält.
    pub fn eql(&self, other: &Line) -> bool {
        self.is_parallel_to(other) && self.contains(other.anchor)
    }

    pub fn translate(&self, vector: &Point3D) -> Line {
        Line {
            anchor: self.anchor + vector,
            direction: self.direction,
        }
    }

    pub fn is_parallel_to(&self, obj: impl Into<Geometry>) -> bool {
        match obj.into() {
            Geometry::Point(_) => false,
            Geometry::Line(line) => {
                self.direction.is_parallel_to(&line.direction, PRECISION)
                    || self.direction.is_antiparallel_to(&line.direction, PRECISION)
            }
            Geometry::Segment(segment) => self.is_parallel_to(segment.line),
            Geometry::Plane(plane) => plane.is_parallel_to(self),
        }
    }

    pub fn distance_from(&self, obj: impl Into<Geometry>) -> f64 {
        match obj.into() {
            Geometry::Point(point) => (point - self.closest_point_to_point(&point)).norm(),
            Geometry::Line(line) => {
                if self.is_parallel_to(line) {
                    return self.distance_from(line.anchor);
                }
                match self.direction.cross(&line.direction).to_unit_vector() {
                    Some(normal) => (self.anchor - line.anchor).dot(&normal).abs(),
                    None => self.distance_from(line.anchor),
                }
            }
            Geometry::Segment(segment) => {
                if self.is_parallel_to(segment.line) {
                    return self.distance_from(segment.start);
                }
                segment
                    .distance_from(*self)
                    .unwrap_or_else(|| self.distance_from(segment.start))
            }
            Geometry::Plane(plane) => plane.distance_from(*self),
        }
    }

    pub fn contains(&self, obj: impl Into<Geometry>) -> bool {
        self.contains_eps(obj, PRECISION)
    }

    pub fn contains_eps(&self, obj: impl Into<Geometry>, epsilon: f64) -> bool {
        match obj.into() {
            Geometry::Point(point) => self.distance_from(point) <= epsilon,
            Geometry::Line(line) => {
                self.is_parallel_to(line) && self.contains_eps(line.anchor, epsilon)
            }
            Geometry::Segment(segment) => {
                self.contains_eps(segment.start, epsilon) && self.contains_eps(segment.end, epsilon)
            }
            Geometry::Plane(_) => false,
        }
    }

    /// Parameter `t` des Punktes in `anchor + t * direction`, sofern er auf der Geraden liegt.
    pub fn position_of(&self, point: &Point3D) -> Option<f64> {
        if !self.contains(point) {
            return None;
        }
        Some((point - self.anchor).dot(&self.direction))
    }

    pub fn lies_in(&self, plane: &Plane) -> bool {
        plane.contains(self)
    }

    pub fn intersects(&self, obj: impl Into<Geometry>) -> bool {
        match obj.into() {
            Geometry::Point(point) => self.contains(point),
            Geometry::Line(line) => {
                !self.is_parallel_to(line) && self.distance_from(line) <= PRECISION
            }
            Geometry::Segment(segment) => segment.intersects(*self),
            Geometry::Plane(plane) => plane.intersects(*self),
        }
    }

    pub fn intersection_with(&self, obj: impl Into<Geometry>) -> Option<Point3D> {
        match obj.into() {
            Geometry::Point(point) => self.contains(point).then_some(point),
            Geometry::Line(line) => {
                if !self.intersects(line) {
                    return None;
                }
                self.closest_parameter(&line)
                    .map(|t| self.anchor + self.direction * t)
            }
            Geometry::Segment(segment) => segment.intersection_with(*self),
            Geometry::Plane(plane) => plane.line_intersection(self),
        }
    }

    pub fn point_closest_to(&self, obj: impl Into<Geometry>) -> Option<Point3D> {
        match obj.into() {
            Geometry::Point(point) => Some(self.closest_point_to_point(&point)),
            Geometry::Line(line) => {
                if self.is_parallel_to(line) {
                    return None;
                }
                self.closest_parameter(&line)
                    .map(|t| self.anchor + self.direction * t)
            }
            Geometry::Segment(segment) => segment
                .point_closest_to(*self)
                .map(|p| self.closest_point_to_point(&p)),
            Geometry::Plane(plane) => {
                if self.is_parallel_to(plane) {
                    return None;
                }
                plane.line_intersection(self)
            }
        }
    }

    /// Orthogonale Projektion eines Punktes auf die Gerade.
    pub fn closest_point_to_point(&self, point: &Point3D) -> Point3D {
        self.anchor + self.direction * (point - self.anchor).dot(&self.direction)
    }

    // Parameter des Punktes auf `self`, der `other` am nächsten liegt.
    fn closest_parameter(&self, other: &Line) -> Option<f64> {
        let b = self.direction.dot(&other.direction);
        let denom = 1.0 - b * b;
        if denom.abs() <= f64::EPSILON {
            return None;
        }
        let w = self.anchor - other.anchor;
        let d = self.direction.dot(&w);
        let e = other.direction.dot(&w);
        Some((b * e - d) / denom)
    }

    /// Rotationsmatrix für eine Drehung um diese Gerade als Achse.
    pub fn rotation_matrix(&self, angle_rad: f64) -> Matrix3<f64> {
        // Die Richtung ist nach `new` nie der Nullvektor.
        rotation_matrix(angle_rad, &self.direction).unwrap_or_else(|_| Matrix3::identity())
    }

    /// Dreht die Gerade um `angle_rad` um die Achse `axis`.
    pub fn rotate(&self, angle_rad: f64, axis: &Line) -> Line {
        let rotation = axis.rotation_matrix(angle_rad);
        let center = axis.closest_point_to_point(&self.anchor);
        Line {
            anchor: center + rotation * (self.anchor - center),
            direction: rotation * self.direction,
        }
    }

    pub fn reflection_in(&self, obj: impl Into<Geometry>) -> Line {
        match obj.into() {
            Geometry::Point(point) => Line {
                anchor: self.anchor.reflection_in_point(&point),
                direction: self.direction,
            },
            Geometry::Line(line) => self.rotate(PI, &line),
            Geometry::Segment(segment) => self.rotate(PI, &segment.line),
            Geometry::Plane(plane) => {
                let anchor = plane.reflection_of(&self.anchor);
                let tip = plane.reflection_of(&(self.anchor + self.direction));
                Line {
                    anchor,
                    direction: (tip - anchor).normalize(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{geometry::Segment, utils::comparison};
    use approx::assert_relative_eq;

    fn line(anchor: [f64; 3], direction: [f64; 3]) -> Line {
        Line::new(Point3D::from(anchor), Point3D::from(direction)).unwrap()
    }

    #[test]
    fn test_zero_direction_is_rejected() {
        let result = Line::new(Point3D::zeros(), Point3D::zeros());
        assert!(matches!(result, Err(MathError::DegenerateInput { .. })));
    }

    #[test]
    fn test_direction_is_normalized() {
        let l = line([1.0, 1.0, 1.0], [0.0, 3.0, 4.0]);
        assert_relative_eq!(l.direction().norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(*l.direction(), Point3D::new(0.0, 0.6, 0.8), epsilon = 1e-12);
    }

    #[test]
    fn test_axes_intersect_at_origin() {
        let x = Line::x_axis();
        let y = Line::y_axis();
        assert!(x.intersects(y));
        let p = x.intersection_with(y).unwrap();
        assert_relative_eq!(p, Point3D::zeros(), epsilon = 1e-12);
    }

    #[test]
    fn test_parallel_lines_do_not_intersect() {
        let a = line([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let b = line([0.0, 1.0, 0.0], [-2.0, 0.0, 0.0]);
        assert!(a.is_parallel_to(b));
        assert!(!a.intersects(b));
        assert!(a.intersection_with(b).is_none());
        assert!(a.point_closest_to(b).is_none());
        assert!(comparison::nearly_equal(a.distance_from(b), 1.0));
        assert!(!a.eql(&b));
    }

    #[test]
    fn test_eql_ignores_anchor_and_orientation() {
        let a = line([0.0, 0.0, 0.0], [1.0, 1.0, 0.0]);
        let b = line([3.0, 3.0, 0.0], [-1.0, -1.0, 0.0]);
        assert!(a.eql(&b));
        assert!(a.contains(b));
    }

    #[test]
    fn test_skew_lines() {
        let a = Line::x_axis();
        let b = line([5.0, 0.0, 1.0], [0.0, 1.0, 0.0]);
        assert!(!a.intersects(b));
        assert!(a.intersection_with(b).is_none());
        assert!(comparison::nearly_equal(a.distance_from(b), 1.0));
        let closest = a.point_closest_to(b).unwrap();
        assert_relative_eq!(closest, Point3D::new(5.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_point_queries() {
        let l = line([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let p = Point3D::new(2.0, 3.0, 4.0);
        assert!(comparison::nearly_equal(l.distance_from(p), 5.0));
        assert_relative_eq!(l.point_closest_to(p).unwrap(), Point3D::new(2.0, 0.0, 0.0));
        assert!(l.contains([7.0, 0.0, 0.0]));
        assert!(!l.contains(p));
        assert_eq!(l.position_of(&Point3D::new(-3.0, 0.0, 0.0)), Some(-3.0));
        assert!(l.position_of(&p).is_none());
    }

    #[test]
    fn test_segment_operands() {
        let l = Line::x_axis();
        let crossing =
            Segment::new(Point3D::new(1.0, -1.0, 0.0), Point3D::new(1.0, 1.0, 0.0)).unwrap();
        let missing =
            Segment::new(Point3D::new(1.0, 1.0, 0.0), Point3D::new(1.0, 2.0, 0.0)).unwrap();
        assert!(l.intersects(crossing));
        assert_relative_eq!(
            l.intersection_with(crossing).unwrap(),
            Point3D::new(1.0, 0.0, 0.0),
            epsilon = 1e-12
        );
        assert!(!l.intersects(missing));
        assert!(comparison::nearly_equal(l.distance_from(missing), 1.0));
        assert_relative_eq!(
            l.point_closest_to(missing).unwrap(),
            Point3D::new(1.0, 0.0, 0.0),
            epsilon = 1e-12
        );
        let on_axis =
            Segment::new(Point3D::new(2.0, 0.0, 0.0), Point3D::new(4.0, 0.0, 0.0)).unwrap();
        assert!(l.contains(on_axis));
        assert!(l.is_parallel_to(on_axis));
    }

    #[test]
    fn test_plane_operands() {
        let plane = Plane::new(Point3D::new(0.0, 0.0, 2.0), Point3D::z()).unwrap();
        let vertical = Line::z_axis();
        assert!(vertical.intersects(plane));
        assert_relative_eq!(
            vertical.intersection_with(plane).unwrap(),
            Point3D::new(0.0, 0.0, 2.0)
        );

        let flat = line([0.0, 0.0, 0.0], [1.0, 1.0, 0.0]);
        assert!(flat.is_parallel_to(plane));
        assert!(flat.point_closest_to(plane).is_none());
        assert!(comparison::nearly_equal(flat.distance_from(plane), 2.0));
        assert!(!flat.lies_in(&plane));
        assert!(flat.translate(&Point3D::new(0.0, 0.0, 2.0)).lies_in(&plane));
    }

    #[test]
    fn test_rotate_about_axis() {
        let rotated = Line::x_axis().rotate(PI / 2.0, &Line::z_axis());
        assert_relative_eq!(*rotated.direction(), Point3D::y(), epsilon = 1e-12);

        let offset = line([1.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        let turned = offset.rotate(PI, &Line::z_axis());
        assert_relative_eq!(*turned.anchor(), Point3D::new(-1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_matrix_about_line() {
        let rotation = line([3.0, 3.0, 0.0], [0.0, 0.0, 2.0]).rotation_matrix(PI / 2.0);
        assert_relative_eq!(rotation * Point3D::x(), Point3D::y(), epsilon = 1e-12);
        assert_relative_eq!(rotation * Point3D::z(), Point3D::z(), epsilon = 1e-12);
    }

    #[test]
    fn test_reflections() {
        let l = line([0.0, 0.0, 0.0], [1.0, 0.0, 1.0]);
        let mirror = Plane::new(Point3D::new(0.0, 0.0, 1.0), Point3D::z()).unwrap();
        let reflected = l.reflection_in(mirror);
        assert_relative_eq!(*reflected.anchor(), Point3D::new(0.0, 0.0, 2.0), epsilon = 1e-12);
        let expected = Point3D::new(1.0, 0.0, -1.0).normalize();
        assert_relative_eq!(*reflected.direction(), expected, epsilon = 1e-12);

        let through_point = l.reflection_in(Point3D::new(1.0, 0.0, 0.0));
        assert_relative_eq!(*through_point.anchor(), Point3D::new(2.0, 0.0, 0.0));

        let about_line = line([0.0, 1.0, 0.0], [1.0, 0.0, 0.0]).reflection_in(Line::x_axis());
        assert!(about_line.contains(Point3D::new(0.0, -1.0, 0.0)));
    }
}
