// src/math/geometry/polygon/transformations/projection.rs

use super::super::Polygon;
use crate::math::{
    error::{MathError, MathResult},
    geometry::Plane,
    utils::constants::PRECISION,
};
use tracing::warn;

impl Polygon {
    /// Orthogonale Projektion auf `plane`.
    ///
    /// Das Ergebnis liegt auf `plane`, deren Normale so ausgerichtet wird, dass sie
    /// mit der bisherigen Normale übereinstimmt. Steht das Polygon senkrecht auf
    /// der Zielebene, fällt es zu einer Strecke zusammen.
    pub fn projection_on(&self, plane: &Plane) -> MathResult<Polygon> {
        let alignment = self.plane.normal.dot(&plane.normal);
        if alignment.abs() <= PRECISION {
            warn!(
                polygon_normal = ?self.plane.normal,
                plane_normal = ?plane.normal,
                "projection of a perpendicular polygon collapses to a segment"
            );
            return Err(MathError::DegenerateInput {
                reason: "polygon is perpendicular to the projection plane".to_string(),
            });
        }
        let target = if alignment < 0.0 {
            plane.with_flipped_normal()
        } else {
            *plane
        };
        Ok(self.map_vertices(|p| plane.point_closest_to(p), target))
    }
}
