// src/math/geometry/mod.rs

// Deklaration der Haupt-Geometriemodule
pub mod line;
pub mod object;
pub mod plane;
pub mod polygon;
pub mod segment;

// Re-Exporte für einen schnellen Zugriff auf die Kern-Geometrietypen,
// falls man nicht das gesamte `math::prelude` importieren möchte.
pub use self::line::Line;
pub use self::object::Geometry;
pub use self::plane::Plane;
pub use self::segment::Segment;

// Polygon-Exporte
pub use self::polygon::{
    Polygon, PolygonProperties, Vertex, VertexType,
    operations::triangulation::{EarSelection, PolygonTriangulator, TriangulationUtils},
};
