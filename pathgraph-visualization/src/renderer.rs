//! Segment sinks

use crate::error::Result;
use pathgraph_core::Point3f;

/// A straight line segment between two positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Point3f,
    pub end: Point3f,
}

impl LineSegment {
    pub fn new(start: Point3f, end: Point3f) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f32 {
        nalgebra::distance(&self.start, &self.end)
    }

    pub fn midpoint(&self) -> Point3f {
        nalgebra::center(&self.start, &self.end)
    }
}

impl From<(Point3f, Point3f)> for LineSegment {
    fn from((start, end): (Point3f, Point3f)) -> Self {
        Self::new(start, end)
    }
}

/// A rendering backend that turns endpoint pairs into visible segments
pub trait SegmentSink {
    /// Produce one segment
    fn add_segment(&mut self, segment: LineSegment) -> Result<()>;

    /// Called once after the last segment of a draw
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<F> SegmentSink for F
where
    F: FnMut(LineSegment),
{
    fn add_segment(&mut self, segment: LineSegment) -> Result<()> {
        self(segment);
        Ok(())
    }
}

/// Headless scene keeping every segment it was given
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentBuffer {
    segments: Vec<LineSegment>,
}

impl SegmentBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Remove every segment
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Sum of all segment lengths
    pub fn total_length(&self) -> f32 {
        self.segments.iter().map(LineSegment::length).sum()
    }
}

impl SegmentSink for SegmentBuffer {
    fn add_segment(&mut self, segment: LineSegment) -> Result<()> {
        self.segments.push(segment);
        Ok(())
    }
}
