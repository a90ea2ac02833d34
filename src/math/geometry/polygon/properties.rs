// src/math/geometry/polygon/properties.rs

use super::core::Polygon;
use crate::math::{
    geometry::{Plane, Segment},
    types::{Point3D, Vector3DExt},
    utils::{
        comparison,
        constants::{PRECISION, TAU},
    },
};

/// Trait für Polygon-Eigenschaften
pub trait PolygonProperties {
    /// Fläche, gewichtet mit der Orientierung der Fächerdreiecke zur Polygon-Normale.
    fn area(&self) -> f64;

    /// Flächenschwerpunkt; `None` bei einem Polygon ohne Fläche.
    fn centroid(&self) -> Option<Point3D>;

    /// Umfang inklusive der schließenden Kante.
    fn perimeter(&self) -> f64;

    /// `true`, wenn keine Ecke einspringend ist.
    fn is_convex(&self) -> bool;

    /// Liegt der Punkt echt im Inneren? Randpunkte zählen nicht.
    fn contains(&self, point: &Point3D) -> bool {
        self.contains_eps(point, PRECISION)
    }

    fn contains_eps(&self, point: &Point3D, epsilon: f64) -> bool;

    fn has_edge_containing(&self, point: &Point3D) -> bool {
        self.has_edge_containing_eps(point, PRECISION)
    }

    fn has_edge_containing_eps(&self, point: &Point3D, epsilon: f64) -> bool;
}

impl PolygonProperties for Polygon {
    fn area(&self) -> f64 {
        if self.is_triangle() {
            return triangle_area(self);
        }
        let normal = self.plane.normal;
        self.triangles_for_surface_integral()
            .iter()
            .map(|triangle| triangle_area(triangle) * triangle.plane.normal.dot(&normal))
            .sum()
    }

    fn centroid(&self) -> Option<Point3D> {
        if self.is_triangle() {
            return Some(vertex_mean(self));
        }
        let normal = self.plane.normal;
        let mut weighted = Point3D::zeros();
        let mut total = 0.0;
        for triangle in self.triangles_for_surface_integral() {
            let weight = triangle_area(triangle) * triangle.plane.normal.dot(&normal);
            weighted += vertex_mean(triangle) * weight;
            total += weight;
        }
        if comparison::nearly_zero(total) {
            return None;
        }
        Some(weighted / total)
    }

    fn perimeter(&self) -> f64 {
        self.vertices
            .nodes()
            .map(|node| (node.next().data().position() - node.data().position()).norm())
            .sum()
    }

    fn is_convex(&self) -> bool {
        self.reflex.is_empty()
    }

    fn contains_eps(&self, point: &Point3D, epsilon: f64) -> bool {
        if !self.plane.contains_eps(*point, epsilon) {
            return false;
        }
        if self.has_edge_containing_eps(point, epsilon) {
            return false;
        }

        let mut theta = 0.0;
        let mut loops: i32 = 0;
        for node in self.vertices.nodes() {
            let a = node.data().position() - point;
            let b = node.next().data().position() - point;
            let Some(delta) = a.angle_from(&b) else {
                continue;
            };
            if delta == 0.0 {
                continue;
            }
            // Gleichsinnig zur Normale zählt positiv, gegensinnig negativ.
            let sign = a.cross(&b).dot(&self.plane.normal).signum();
            theta += sign * delta;
            if theta >= TAU - epsilon {
                loops += 1;
                theta -= TAU;
            }
            if theta <= -TAU + epsilon {
                loops -= 1;
                theta += TAU;
            }
        }
        loops != 0
    }

    fn has_edge_containing_eps(&self, point: &Point3D, epsilon: f64) -> bool {
        self.vertices.nodes().any(|node| {
            // Zusammenfallende Nachbarn bilden keine Kante.
            Segment::new(*node.data().position(), *node.next().data().position())
                .is_ok_and(|edge| edge.contains_eps(*point, epsilon))
        })
    }
}

impl Polygon {
    /// Dreiecksfächer um den ersten Vertex, Grundlage für Fläche und Schwerpunkt.
    ///
    /// Jedes Dreieck trägt seine eigene Ebene, damit einspringende Teile mit
    /// umgekehrter Normale negativ gewichtet werden. Wird beim ersten Aufruf
    /// berechnet.
    pub fn triangles_for_surface_integral(&self) -> &[Polygon] {
        self.surface_integral.get_or_init(|| {
            let anchor = *self.v(1);
            let mut fan = Vec::with_capacity(self.len().saturating_sub(2));
            for i in 3..=self.len() as isize {
                let b = *self.v(i - 1);
                let c = *self.v(i);
                let plane = Plane::from_points(anchor.position(), b.position(), c.position())
                    .unwrap_or(self.plane);
                fan.push(Polygon::from_ring([anchor, b, c].into_iter().collect(), plane));
            }
            fan
        })
    }
}

/// Halber Betrag des Kreuzprodukts zweier Kanten.
fn triangle_area(triangle: &Polygon) -> f64 {
    let a = triangle.v(1).position();
    let b = triangle.v(2).position();
    let c = triangle.v(3).position();
    0.5 * (b - a).cross(&(c - a)).norm()
}

fn vertex_mean(polygon: &Polygon) -> Point3D {
    let sum = polygon
        .vertices
        .iter()
        .fold(Point3D::zeros(), |acc, v| acc + v.position());
    sum / polygon.len() as f64
}
