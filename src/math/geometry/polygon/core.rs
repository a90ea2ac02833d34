// src/math/geometry/polygon/core.rs

use super::vertex::{Vertex, VertexType, classify};
use crate::math::{
    error::{MathError, MathResult},
    geometry::Plane,
    types::{Point3D, Ring, RingNode},
    utils::constants::PRECISION,
};
use std::{fmt, sync::OnceLock};
use tracing::debug;

/// Ebenes Polygon im Raum.
///
/// Unveränderlich: jede Transformation liefert ein neues Polygon. Die
/// Einteilung in konvexe und einspringende Ecken wird beim Erstellen berechnet,
/// die Dreieckszerlegungen beim ersten Zugriff und danach nie wieder.
#[derive(Debug, Clone)]
pub struct Polygon {
    pub(crate) plane: Plane,
    pub(crate) vertices: Ring<Vertex>,
    // Indizes in `vertices`
    pub(crate) convex: Ring<usize>,
    pub(crate) reflex: Ring<usize>,
    pub(crate) surface_integral: OnceLock<Vec<Polygon>>,
    pub(crate) triangles: OnceLock<Vec<Polygon>>,
}

impl Polygon {
    /// Erstellt ein Polygon; die Ebene wird aus dem Umlauf der Punkte bestimmt.
    ///
    /// Die Normale kommt aus dem Newell-Verfahren über alle Punkte, nicht aus den
    /// ersten drei Punkten. So bleibt die Orientierung auch dann richtig, wenn der
    /// zweite Punkt eine einspringende Ecke ist.
    pub fn new<P: Into<Vertex>>(points: impl IntoIterator<Item = P>) -> MathResult<Self> {
        let vertices = Self::collect_vertices(points)?;
        let outline = vertices.map(|v| *v.position());
        let plane = Plane::from_outline(&outline).ok_or_else(|| MathError::DegenerateInput {
            reason: "polygon points are collinear".to_string(),
        })?;
        if !vertices.every(|v| plane.contains(*v.position())) {
            return Err(MathError::DegenerateInput {
                reason: "polygon points are not coplanar".to_string(),
            });
        }
        Ok(Self::from_ring(vertices, plane))
    }

    /// Erstellt ein Polygon auf einer vorgegebenen Ebene; deren Normale legt die Orientierung fest.
    pub fn on_plane<P: Into<Vertex>>(
        points: impl IntoIterator<Item = P>,
        plane: Plane,
    ) -> MathResult<Self> {
        let vertices = Self::collect_vertices(points)?;
        Ok(Self::from_ring(vertices, plane))
    }

    fn collect_vertices<P: Into<Vertex>>(
        points: impl IntoIterator<Item = P>,
    ) -> MathResult<Ring<Vertex>> {
        let vertices: Ring<Vertex> = points.into_iter().map(Into::into).collect();
        if vertices.len() < 3 {
            return Err(MathError::InsufficientPoints {
                expected: 3,
                actual: vertices.len(),
            });
        }
        Ok(vertices)
    }

    /// Setzt mindestens drei Vertices voraus.
    pub(crate) fn from_ring(vertices: Ring<Vertex>, plane: Plane) -> Self {
        let mut convex = Ring::with_capacity(vertices.len());
        let mut reflex = Ring::new();
        vertices.for_each(|node, index| {
            match classify(node.prev().data(), node.data(), node.next().data(), &plane.normal) {
                VertexType::Convex => convex.append(index),
                VertexType::Reflex => reflex.append(index),
            }
        });
        debug!(
            vertices = vertices.len(),
            convex = convex.len(),
            reflex = reflex.len(),
            "polygon built"
        );
        Self {
            plane,
            vertices,
            convex,
            reflex,
            surface_integral: OnceLock::new(),
            triangles: OnceLock::new(),
        }
    }

    /// Vertex `i`, 1-basiert und zyklisch.
    pub fn v(&self, i: isize) -> &Vertex {
        // Der Ring hat immer mindestens drei Vertices.
        &self.vertices[i - 1]
    }

    pub fn vertices(&self) -> &Ring<Vertex> {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    pub fn convex_vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.convex.iter().map(|&i| self.vertex_at(i))
    }

    pub fn reflex_vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.reflex.iter().map(|&i| self.vertex_at(i))
    }

    pub(crate) fn vertex_at(&self, index: usize) -> &Vertex {
        self.v(index as isize + 1)
    }

    /// Knoten des ersten Vertex, der `vertex` innerhalb der globalen Toleranz gleicht.
    pub fn node_for(&self, vertex: &Vertex) -> Option<RingNode<'_, Vertex>> {
        self.vertices
            .find_node(vertex, |candidate, wanted| candidate.eql(wanted, PRECISION))
    }

    pub fn is_triangle(&self) -> bool {
        self.vertices.len() == 3
    }

    /// Paarweiser Vergleich ab dem jeweils ersten Vertex, ohne zyklische Verschiebung.
    pub fn eql(&self, other: &Polygon) -> bool {
        self.eql_eps(other, PRECISION)
    }

    pub fn eql_eps(&self, other: &Polygon, epsilon: f64) -> bool {
        self.len() == other.len()
            && self
                .vertices
                .iter()
                .zip(other.vertices.iter())
                .all(|(a, b)| a.eql(b, epsilon))
    }

    /// Polygon ohne `vertex`, auf derselben Ebene.
    ///
    /// Dreiecke und fremde Vertices liefern eine unveränderte Kopie.
    pub fn remove_vertex(&self, vertex: &Vertex) -> Polygon {
        if self.is_triangle() {
            return self.clone();
        }
        match self.node_for(vertex) {
            Some(node) => self.without_index(node.index()),
            None => self.clone(),
        }
    }

    pub(crate) fn without_index(&self, removed: usize) -> Polygon {
        let remaining: Ring<Vertex> = self
            .vertices
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != removed)
            .map(|(_, vertex)| *vertex)
            .collect();
        Self::from_ring(remaining, self.plane)
    }
}

/// Display-Implementierung für Debugging
impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon<")?;
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "[{}, {}, {}]", vertex.x, vertex.y, vertex.z)?;
        }
        write!(f, ">")
    }
}

/// Konvertierung zu Vec<Point3D>
impl From<&Polygon> for Vec<Point3D> {
    fn from(polygon: &Polygon) -> Self {
        polygon.vertices.map(|v| *v.position())
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Vertex;
    type IntoIter = std::slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
