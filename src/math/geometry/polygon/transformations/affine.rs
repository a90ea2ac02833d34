// src/math/geometry/polygon/transformations/affine.rs

use super::super::{Polygon, Vertex};
use crate::math::{
    geometry::{Line, Plane},
    types::Point3D,
};

impl Polygon {
    /// Verschiebt Vertices und Ebene um `vector`.
    pub fn translate(&self, vector: &Point3D) -> Polygon {
        self.map_vertices(|p| p + vector, self.plane.translate(vector))
    }

    /// Dreht das Polygon um `angle_rad` um die Gerade `axis` (Rechte-Hand-Regel
    /// bezüglich der Achsenrichtung).
    pub fn rotate(&self, angle_rad: f64, axis: &Line) -> Polygon {
        let rotation = axis.rotation_matrix(angle_rad);
        self.map_vertices(
            |p| {
                let center = axis.closest_point_to_point(p);
                center + rotation * (p - center)
            },
            self.plane.rotate(&rotation, axis),
        )
    }

    /// Streckt das Polygon um `factor` bezüglich `center`.
    ///
    /// Die Ebene geht durch den ersten neuen Vertex und behält die alte Normale,
    /// auch bei negativem Faktor.
    pub fn scale(&self, factor: f64, center: &Point3D) -> Polygon {
        let moved = |p: &Point3D| center + (p - center) * factor;
        let plane = Plane {
            anchor: moved(self.v(1).position()),
            normal: self.plane.normal,
        };
        self.map_vertices(moved, plane)
    }

    pub(crate) fn map_vertices(&self, f: impl Fn(&Point3D) -> Point3D, plane: Plane) -> Polygon {
        let vertices = self
            .vertices
            .iter()
            .map(|v| Vertex::from(f(v.position())))
            .collect();
        Polygon::from_ring(vertices, plane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{geometry::PolygonProperties, utils::constants::PI};
    use approx::assert_relative_eq;

    fn square() -> Polygon {
        Polygon::new(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]).unwrap()
    }

    #[test]
    fn test_translate() {
        let square = square();
        assert!(square.translate(&Point3D::zeros()).eql(&square));

        let moved = square.translate(&Point3D::new(1.0, 2.0, 3.0));
        assert_eq!(*moved.v(3), Vertex::new(2.0, 3.0, 3.0));
        assert!(moved.plane().contains(Point3D::new(0.0, 0.0, 3.0)));
        assert_relative_eq!(moved.area(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_about_x_axis() {
        let rotated = square().rotate(PI / 2.0, &Line::x_axis());
        assert_relative_eq!(
            *rotated.v(3).position(),
            Point3D::new(1.0, 0.0, 1.0),
            epsilon = 1e-12
        );
        assert_relative_eq!(*rotated.plane().normal(), -Point3D::y(), epsilon = 1e-12);
        assert_relative_eq!(rotated.area(), 1.0, epsilon = 1e-12);
        assert!(rotated.contains(&Point3D::new(0.5, 0.0, 0.5)));
    }

    #[test]
    fn test_rotate_about_offset_axis() {
        let axis = Line::new(Point3D::new(1.0, 1.0, 5.0), Point3D::z()).unwrap();
        let rotated = square().rotate(PI, &axis);
        assert_relative_eq!(
            *rotated.v(1).position(),
            Point3D::new(2.0, 2.0, 0.0),
            epsilon = 1e-12
        );
        assert_relative_eq!(*rotated.plane().normal(), Point3D::z(), epsilon = 1e-12);
        assert_relative_eq!(
            rotated.centroid().unwrap(),
            Point3D::new(1.5, 1.5, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_scale_about_point() {
        let square = square();
        let scaled = square.scale(2.0, &Point3D::new(1.0, 1.0, 0.0));
        assert_eq!(*scaled.v(1), Vertex::new(-1.0, -1.0, 0.0));
        assert_eq!(*scaled.plane().anchor(), Point3D::new(-1.0, -1.0, 0.0));
        assert_eq!(scaled.plane().normal(), square.plane().normal());
        assert_relative_eq!(scaled.area(), 4.0, epsilon = 1e-12);

        let mirrored = square.scale(-1.0, &Point3D::zeros());
        assert_eq!(mirrored.plane().normal(), square.plane().normal());
        assert!(mirrored.is_convex());
    }
}
