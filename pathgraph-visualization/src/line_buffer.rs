//! Line-list vertex data for GPU upload

use crate::error::Result;
use crate::renderer::{LineSegment, SegmentSink};
use bytemuck::{Pod, Zeroable};
use pathgraph_core::Point3f;

/// Vertex layout for line-list rendering
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    pub fn new(position: Point3f, color: [f32; 4]) -> Self {
        Self {
            position: [position.x, position.y, position.z],
            color,
        }
    }
}

/// Segments stored as a line list, two vertices per segment
#[derive(Debug, Clone, PartialEq)]
pub struct LineVertexBuffer {
    vertices: Vec<LineVertex>,
    color: [f32; 4],
}

impl LineVertexBuffer {
    /// Create a buffer drawing in opaque white
    pub fn new() -> Self {
        Self::with_color([1.0, 1.0, 1.0, 1.0])
    }

    pub fn with_color(color: [f32; 4]) -> Self {
        Self {
            vertices: Vec::new(),
            color,
        }
    }

    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    pub fn segment_count(&self) -> usize {
        self.vertices.len() / 2
    }

    /// Raw vertex bytes, ready to copy into a vertex buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}

impl Default for LineVertexBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentSink for LineVertexBuffer {
    fn add_segment(&mut self, segment: LineSegment) -> Result<()> {
        self.vertices.push(LineVertex::new(segment.start, self.color));
        self.vertices.push(LineVertex::new(segment.end, self.color));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<LineVertex>(), 28);
    }

    #[test]
    fn test_segments_become_vertex_pairs() {
        let mut buffer = LineVertexBuffer::with_color([1.0, 0.0, 0.0, 1.0]);
        buffer
            .add_segment(LineSegment::new(
                Point3f::new(0.0, 0.0, 0.0),
                Point3f::new(1.0, 2.0, 3.0),
            ))
            .unwrap();

        assert_eq!(buffer.segment_count(), 1);
        assert_eq!(buffer.vertices()[1].position, [1.0, 2.0, 3.0]);
        assert_eq!(buffer.vertices()[0].color, [1.0, 0.0, 0.0, 1.0]);

        let bytes = buffer.as_bytes();
        assert_eq!(bytes.len(), 56);
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(&floats[7..10], &[1.0, 2.0, 3.0]);
    }
}
