//! OFF mesh format support
//!
//! Accepts the usual `OFF` header followed by `V F E` counts, and the
//! compact `OFF<V>` header (no separator before the vertex count) followed
//! by `F E`. Tokens may be spread over lines freely; `#` starts a comment.
//! Only triangular faces are supported.

use crate::error::{IoError, Result};
use crate::MeshReader;
use pathgraph_core::{Point3f, TriangleMesh};
use std::path::Path;

pub struct OffReader;

impl MeshReader for OffReader {
    fn read_mesh<P: AsRef<Path>>(path: P) -> Result<TriangleMesh> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mesh = Self::parse_str(&content)?;

        tracing::info!(
            path = %path.display(),
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            "loaded OFF mesh"
        );
        Ok(mesh)
    }
}

/// Whitespace separated tokens with the line they came from
struct Tokens<I> {
    inner: I,
}

impl<'a, I: Iterator<Item = (usize, &'a str)>> Tokens<I> {
    fn next_raw(&mut self, section: &'static str, expected: usize, found: usize) -> Result<(usize, &'a str)> {
        self.inner.next().ok_or(IoError::Truncated {
            section,
            expected,
            found,
        })
    }

    fn next_parsed<T: std::str::FromStr>(
        &mut self,
        section: &'static str,
        expected: usize,
        found: usize,
        what: &'static str,
    ) -> Result<T> {
        let (line, token) = self.next_raw(section, expected, found)?;
        token.parse().map_err(|_| IoError::InvalidToken {
            line,
            token: token.to_string(),
            expected: what,
        })
    }
}

impl OffReader {
    /// Parse a triangle mesh from OFF text
    pub fn parse_str(content: &str) -> Result<TriangleMesh> {
        let mut tokens = Tokens {
            inner: content.lines().enumerate().flat_map(|(i, line)| {
                let data = line.split('#').next().unwrap_or_default();
                data.split_whitespace().map(move |token| (i + 1, token))
            }),
        };

        let (line, head) = tokens.next_raw("header", 1, 0)?;
        let Some(inline_count) = head.strip_prefix("OFF") else {
            return Err(IoError::InvalidFormat {
                format: format!("not an OFF file (header {head:?})"),
            });
        };

        let vertex_count: usize = if inline_count.is_empty() {
            tokens.next_parsed("header", 3, 0, "vertex count")?
        } else {
            inline_count.parse().map_err(|_| IoError::InvalidToken {
                line,
                token: head.to_string(),
                expected: "vertex count",
            })?
        };
        let face_count: usize = tokens.next_parsed("header", 3, 1, "face count")?;
        // Edge count is informational only.
        let _edge_count: usize = tokens.next_parsed("header", 3, 2, "edge count")?;

        let mut mesh = TriangleMesh::new();
        for found in 0..vertex_count {
            let mut coordinate = || tokens.next_parsed::<f32>("vertex", vertex_count, found, "coordinate");
            let (x, y, z) = (coordinate()?, coordinate()?, coordinate()?);
            mesh.add_vertex(Point3f::new(x, y, z));
        }

        for found in 0..face_count {
            let sides: usize = tokens.next_parsed("face", face_count, found, "face size")?;
            if sides != 3 {
                return Err(IoError::NonTriangularFace { face: found, sides });
            }
            let mut index = || tokens.next_parsed::<usize>("face", face_count, found, "vertex index");
            let face = [index()?, index()?, index()?];
            mesh.add_face(face);
        }

        mesh.validate()?;
        tracing::debug!(vertex_count, face_count, "parsed OFF mesh");
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const TETRAHEDRON: &str = "OFF
4 4 6
0 0 0
1 0 0
0 1 0
0 0 1
3 0 1 2
3 0 1 3
3 0 2 3
3 1 2 3
";

    #[test]
    fn test_standard_header() {
        let mesh = OffReader::parse_str(TETRAHEDRON).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 4);
        assert_eq!(mesh.vertices[3], Point3f::new(0.0, 0.0, 1.0));
        assert_eq!(mesh.faces[3], [1, 2, 3]);
    }

    #[test]
    fn test_compact_header_and_comments() {
        let content = "OFF3 1 0\n# a lone triangle\n0 0 0 1 0 0\n0 1 0 # last vertex\n3 0 1 2\n";
        let mesh = OffReader::parse_str(content).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.faces, vec![[0, 1, 2]]);
    }

    #[test]
    fn test_rejects_other_formats() {
        let err = OffReader::parse_str("ply\nformat ascii 1.0\n").unwrap_err();
        assert!(matches!(err, IoError::InvalidFormat { .. }));

        let err = OffReader::parse_str("OFFx 1 0\n").unwrap_err();
        assert!(matches!(err, IoError::InvalidToken { line: 1, expected: "vertex count", .. }));
    }

    #[test]
    fn test_rejects_quads() {
        let content = "OFF\n4 1 0\n0 0 0\n1 0 0\n1 1 0\n0 1 0\n4 0 1 2 3\n";
        let err = OffReader::parse_str(content).unwrap_err();
        assert!(matches!(err, IoError::NonTriangularFace { face: 0, sides: 4 }));
    }

    #[test]
    fn test_truncated_and_out_of_range() {
        let err = OffReader::parse_str("OFF\n3 1 0\n0 0 0\n1 0 0\n").unwrap_err();
        assert!(matches!(err, IoError::Truncated { section: "vertex", expected: 3, found: 2 }));

        let err = OffReader::parse_str("OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 9\n").unwrap_err();
        assert!(matches!(err, IoError::Core(pathgraph_core::Error::FaceOutOfRange { index: 9, .. })));
    }

    #[test]
    fn test_read_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tetra.off");
        fs::write(&path, TETRAHEDRON).unwrap();
        let mesh = OffReader::read_mesh(&path).unwrap();
        assert_eq!(mesh.face_count(), 4);
    }
}
