pub mod error;
pub mod geometry;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{MathError, MathResult},
        geometry::{
            Geometry, Line, Plane, Segment,
            polygon::{
                EarSelection, Polygon, PolygonProperties, PolygonTriangulator,
                TriangulationUtils, Vertex, VertexType,
            },
        },
        types::*,
        utils::constants::PRECISION,
    };
}
