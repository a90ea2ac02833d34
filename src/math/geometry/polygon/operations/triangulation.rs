// src/math/geometry/polygon/operations/triangulation.rs
use super::super::{Polygon, PolygonProperties};
use crate::math::{
    error::{MathError, MathResult},
    types::Ring,
    utils::constants::PRECISION,
};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, error, trace};

/// Startpunkt der Ohrsuche
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EarSelection {
    /// Zufälliger konvexer Vertex (optional mit Seed)
    #[default]
    Random,
    /// Immer der erste konvexe Vertex, reproduzierbar ohne Seed
    Sequential,
}

/// Ear-Clipping-Triangulator
#[derive(Debug, Clone)]
pub struct PolygonTriangulator {
    pub selection: EarSelection,
    pub seed: Option<u64>,
    /// Toleranz für den Test, ob ein einspringender Vertex im Ohr liegt
    pub tolerance: f64,
}

impl Default for PolygonTriangulator {
    fn default() -> Self {
        Self {
            selection: EarSelection::Random,
            seed: None,
            tolerance: PRECISION,
        }
    }
}

impl PolygonTriangulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(mut self, selection: EarSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Triangulation tolerance must be positive and finite, got {}.",
                    self.tolerance
                ),
            });
        }
        Ok(())
    }

    /// Zerlegt ein einfaches Polygon mit n Vertices in n - 2 Dreiecke.
    ///
    /// Jedes Dreieck liegt auf der Ebene des Eingabepolygons. Ein abgeschnittenes
    /// Ohr hat die Form (next, tip, prev) und läuft damit gegen den Umlaufsinn des
    /// Polygons; das letzte Dreieck behält ihn. Die Spitze eines Ohrs ist immer konvex.
    ///
    /// # Panics
    ///
    /// Wenn in einem Durchlauf kein Ohr gefunden wird. Für einfache Polygone
    /// kann das nicht passieren.
    pub fn triangulate(&self, polygon: &Polygon) -> Vec<Polygon> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let plane = polygon.plane;
        let mut triangles = Vec::with_capacity(polygon.len().saturating_sub(2));
        let mut remaining = Polygon::from_ring(polygon.vertices.clone(), plane);

        debug!(
            vertices = polygon.len(),
            reflex = polygon.reflex.len(),
            selection = ?self.selection,
            "ear clipping started"
        );

        while remaining.len() > 3 {
            let Some((ear, tip)) = self.find_ear(&remaining, &mut rng) else {
                error!(
                    remaining = remaining.len(),
                    convex = remaining.convex.len(),
                    reflex = remaining.reflex.len(),
                    "no ear found, polygon is not simple"
                );
                panic!("ear clipping found no ear in {remaining}");
            };
            triangles.push(ear);
            remaining = remaining.without_index(tip);
        }
        triangles.push(Polygon::from_ring(remaining.vertices, plane));

        debug!(triangles = triangles.len(), "ear clipping finished");
        triangles
    }

    /// Erstes gültiges Ohr ab dem Startpunkt; liefert das Dreieck und den Index seiner Spitze.
    fn find_ear(&self, polygon: &Polygon, rng: &mut StdRng) -> Option<(Polygon, usize)> {
        let offset = match self.selection {
            EarSelection::Random => polygon.convex.random_node(rng)?.index(),
            EarSelection::Sequential => 0,
        };

        for step in 0..polygon.convex.len() {
            let tip = *polygon.convex.at((offset + step) as isize)?;
            let node = polygon.vertices.node(tip as isize)?;
            let (prev, next) = (node.prev(), node.next());
            let vertices: Ring<_> = [*next.data(), *node.data(), *prev.data()]
                .into_iter()
                .collect();
            let candidate = Polygon::from_ring(vertices, polygon.plane);

            let blocker = polygon
                .reflex
                .iter()
                .copied()
                .filter(|&index| index != prev.index() && index != next.index())
                .find(|&index| {
                    let point = polygon.vertex_at(index).position();
                    candidate.contains_eps(point, self.tolerance)
                        || candidate.has_edge_containing_eps(point, self.tolerance)
                });
            if let Some(index) = blocker {
                trace!(tip, blocker = index, "ear rejected");
                continue;
            }
            return Some((candidate, tip));
        }
        None
    }
}

impl Polygon {
    /// Ear-Clipping-Triangulation mit Standardeinstellungen, beim ersten Aufruf berechnet.
    pub fn to_triangles(&self) -> &[Polygon] {
        self.triangles
            .get_or_init(|| PolygonTriangulator::default().triangulate(self))
    }
}

/// Triangulations-Utilities
pub struct TriangulationUtils;

impl TriangulationUtils {
    /// Berechnet die Gesamtfläche einer Triangulation
    pub fn total_area(triangles: &[Polygon]) -> f64 {
        triangles.iter().map(|t| t.area()).sum()
    }
}
