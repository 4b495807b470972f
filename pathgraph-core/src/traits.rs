//! Core traits for pathgraph

use crate::{graph::PathGraph, mesh::TriangleMesh, point::*};

/// Trait for objects occupying a region of space
pub trait Bounded {
    /// Get the axis-aligned bounding box of the object.
    ///
    /// Empty objects report a degenerate box at the origin.
    fn bounding_box(&self) -> (Point3f, Point3f);

    /// Get the center point of the object
    fn center(&self) -> Point3f {
        let (min, max) = self.bounding_box();
        nalgebra::center(&min, &max)
    }

    /// Length of the longest side of the bounding box
    fn max_extent(&self) -> f32 {
        let (min, max) = self.bounding_box();
        (max - min).max()
    }
}

/// Bounding box of a set of points
pub fn bounds_of(points: &[Point3f]) -> (Point3f, Point3f) {
    let Some(first) = points.first() else {
        return (Point3f::origin(), Point3f::origin());
    };

    let mut min = *first;
    let mut max = *first;
    for p in &points[1..] {
        min = min.inf(p);
        max = max.sup(p);
    }
    (min, max)
}

impl Bounded for [Point3f] {
    fn bounding_box(&self) -> (Point3f, Point3f) {
        bounds_of(self)
    }
}

impl Bounded for PathGraph {
    fn bounding_box(&self) -> (Point3f, Point3f) {
        bounds_of(self.vertices())
    }
}

impl Bounded for TriangleMesh {
    fn bounding_box(&self) -> (Point3f, Point3f) {
        bounds_of(&self.vertices)
    }
}
