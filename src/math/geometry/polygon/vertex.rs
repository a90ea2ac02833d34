// src/math/geometry/polygon/vertex.rs

use super::core::Polygon;
use crate::math::{
    error::{MathError, MathResult},
    types::{Point3D, Vector3DExt, to_3d},
    utils::constants::{PI, PRECISION},
};
use std::ops::Deref;

/// Eckpunkt eines Polygons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex(Point3D);

/// Klassifikation einer Ecke relativ zur Orientierung des Polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexType {
    Convex,
    Reflex,
}

impl Vertex {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Point3D::new(x, y, z))
    }

    pub fn position(&self) -> &Point3D {
        &self.0
    }

    pub fn eql(&self, other: &Vertex, epsilon: f64) -> bool {
        self.0.eql(&other.0, epsilon)
    }

    /// Konvex, wenn die Ecke der Orientierung von `polygon` folgt.
    ///
    /// Schlägt fehl, wenn der Vertex nicht zu `polygon` gehört.
    pub fn is_convex(&self, polygon: &Polygon) -> MathResult<bool> {
        Ok(self.vertex_type(polygon)? == VertexType::Convex)
    }

    pub fn is_reflex(&self, polygon: &Polygon) -> MathResult<bool> {
        Ok(self.vertex_type(polygon)? == VertexType::Reflex)
    }

    pub fn vertex_type(&self, polygon: &Polygon) -> MathResult<VertexType> {
        let node = polygon
            .node_for(self)
            .ok_or_else(|| MathError::InvalidOperation {
                operation: format!("vertex {:?} is not part of the polygon", self.0),
            })?;
        Ok(classify(
            node.prev().data(),
            self,
            node.next().data(),
            polygon.plane().normal(),
        ))
    }
}

/// Klassifiziert die Ecke `vertex` zwischen `prev` und `next`.
pub(crate) fn classify(
    prev: &Vertex,
    vertex: &Vertex,
    next: &Vertex,
    normal: &Point3D,
) -> VertexType {
    let a = next.0 - vertex.0;
    let b = prev.0 - vertex.0;
    // Kein Winkel (zusammenfallende Punkte) zählt wie ein Nullwinkel.
    let Some(theta) = a.angle_from(&b) else {
        return VertexType::Convex;
    };
    if theta <= PRECISION {
        return VertexType::Convex;
    }
    if (theta - PI).abs() <= PRECISION {
        return VertexType::Reflex;
    }
    if a.cross(&b).dot(normal) > 0.0 {
        VertexType::Convex
    } else {
        VertexType::Reflex
    }
}

impl Deref for Vertex {
    type Target = Point3D;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Point3D> for Vertex {
    fn from(point: Point3D) -> Self {
        Self(point)
    }
}

impl From<&Point3D> for Vertex {
    fn from(point: &Point3D) -> Self {
        Self(*point)
    }
}

impl From<[f64; 3]> for Vertex {
    fn from(point: [f64; 3]) -> Self {
        Self(Point3D::from(point))
    }
}

impl From<[f64; 2]> for Vertex {
    fn from(point: [f64; 2]) -> Self {
        Self(Point3D::new(point[0], point[1], 0.0))
    }
}

/// Bis zu drei Komponenten; fehlende werden mit 0 aufgefüllt.
impl TryFrom<&[f64]> for Vertex {
    type Error = MathError;

    fn try_from(components: &[f64]) -> MathResult<Self> {
        to_3d(components).map(Self)
    }
}

impl From<Vertex> for Point3D {
    fn from(vertex: Vertex) -> Self {
        vertex.0
    }
}
