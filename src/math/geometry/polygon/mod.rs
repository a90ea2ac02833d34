// src/math/geometry/polygon/mod.rs

// Deklaration der Untermodule für Polygon-spezifische Funktionalität
pub mod core; // Enthält die Polygon-Struktur selbst
pub mod properties; // Enthält den PolygonProperties-Trait
pub mod vertex; // Eckpunkte und ihre Klassifikation

pub mod operations; // Triangulation
pub mod transformations; // translate, rotate, scale, projection_on

// Re-Exporte für den einfachen Zugriff auf die wichtigsten Polygon-Elemente
pub use self::core::Polygon;
pub use self::properties::PolygonProperties;
pub use self::vertex::{Vertex, VertexType};

pub use self::operations::triangulation::{EarSelection, PolygonTriangulator, TriangulationUtils};
