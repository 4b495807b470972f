//! Normalization of positions into the unit cube

use crate::error::{Error, Result};
use crate::graph::PathGraph;
use crate::mesh::TriangleMesh;
use crate::point::*;
use crate::traits::bounds_of;
use serde::{Deserialize, Serialize};

/// Uniform scale and offset that maps a point set into `[0, 1]^3`.
///
/// The bounding box minimum moves to the origin and the longest side of the
/// box becomes 1, so proportions are preserved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitCubeNormalization {
    pub offset: Vector3f,
    pub scale: f32,
}

impl UnitCubeNormalization {
    /// Compute the normalization for a set of points
    pub fn compute(points: &[Point3f]) -> Result<Self> {
        if points.is_empty() {
            return Ok(Self::identity());
        }

        let (min, max) = bounds_of(points);
        let scale = (max - min).max();
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::InvalidData(format!(
                "cannot normalize points with extent {scale}"
            )));
        }

        Ok(Self {
            offset: min.coords,
            scale,
        })
    }

    pub fn identity() -> Self {
        Self {
            offset: Vector3f::zeros(),
            scale: 1.0,
        }
    }

    /// Map a point into the unit cube
    pub fn apply(&self, point: &Point3f) -> Point3f {
        Point3f::from((point.coords - self.offset) / self.scale)
    }

    /// Map a normalized point back to its original position
    pub fn invert(&self, point: &Point3f) -> Point3f {
        Point3f::from(point.coords * self.scale + self.offset)
    }
}

/// Normalize points in place into the unit cube
pub fn normalize_to_unit_cube(points: &mut [Point3f]) -> Result<UnitCubeNormalization> {
    let normalization = UnitCubeNormalization::compute(points)?;
    for p in points.iter_mut() {
        // Rounding can leave values a hair outside the cube.
        *p = normalization.apply(p).map(|c| c.clamp(0.0, 1.0));
    }
    Ok(normalization)
}

impl TriangleMesh {
    /// Normalize the vertices of this mesh into the unit cube
    pub fn normalize_to_unit_cube(&mut self) -> Result<UnitCubeNormalization> {
        normalize_to_unit_cube(&mut self.vertices)
    }
}

impl PathGraph {
    /// Normalize the vertices of this graph into the unit cube
    pub fn normalize_to_unit_cube(&mut self) -> Result<UnitCubeNormalization> {
        let normalization = UnitCubeNormalization::compute(self.vertices())?;
        self.map_vertices(|p| *p = normalization.apply(p).map(|c| c.clamp(0.0, 1.0)));
        Ok(normalization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_preserves_proportions() {
        let mut points = vec![
            Point3f::new(-2.0, 10.0, 1.0),
            Point3f::new(2.0, 12.0, 1.0),
            Point3f::new(0.0, 11.0, 2.0),
        ];
        let normalization = normalize_to_unit_cube(&mut points).unwrap();
        assert_relative_eq!(normalization.scale, 4.0);
        assert_relative_eq!(points[0], Point3f::new(0.0, 0.0, 0.0));
        assert_relative_eq!(points[1], Point3f::new(1.0, 0.5, 0.0));
        assert_relative_eq!(points[2], Point3f::new(0.5, 0.25, 0.25));

        for p in &points {
            assert!(p.iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn test_invert_restores_positions() {
        let points = vec![Point3f::new(3.0, -1.0, 5.0), Point3f::new(-4.0, 2.0, 0.0)];
        let normalization = UnitCubeNormalization::compute(&points).unwrap();
        for p in &points {
            assert_relative_eq!(normalization.invert(&normalization.apply(p)), *p, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_degenerate_extent_is_rejected() {
        let mut points = vec![Point3f::new(1.0, 1.0, 1.0); 3];
        assert!(matches!(
            normalize_to_unit_cube(&mut points),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_empty_is_identity() {
        let mut points: Vec<Point3f> = Vec::new();
        let normalization = normalize_to_unit_cube(&mut points).unwrap();
        assert_eq!(normalization, UnitCubeNormalization::identity());
    }

    #[test]
    fn test_graph_normalization_keeps_links() {
        let mut graph = PathGraph::new(
            vec![Point3f::new(0.0, 0.0, 0.0), Point3f::new(0.0, 0.0, 8.0)],
            vec![crate::graph::Link::new(0, 1)],
        )
        .unwrap();
        graph.normalize_to_unit_cube().unwrap();
        assert_eq!(graph.vertex(1), Some(Point3f::new(0.0, 0.0, 1.0)));
        assert_eq!(graph.link_count(), 1);
    }
}
