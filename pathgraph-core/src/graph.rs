//! Path graph data structures

use crate::error::{Error, Result};
use crate::mesh::TriangleMesh;
use crate::point::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A link between two vertices, referenced by their index in the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    pub start: usize,
    pub end: usize,
}

impl Link {
    /// Create a new link
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The same link with its endpoints in ascending order
    pub fn undirected(&self) -> Self {
        if self.start <= self.end {
            *self
        } else {
            Self::new(self.end, self.start)
        }
    }

    /// Whether both endpoints refer to the same vertex
    pub fn is_loop(&self) -> bool {
        self.start == self.end
    }
}

impl From<(usize, usize)> for Link {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

/// A graph of 3D positions joined by straight links.
///
/// Every link index is guaranteed to be below [`PathGraph::vertex_count`];
/// all constructors and mutators check it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PathGraphParts")]
pub struct PathGraph {
    vertices: Vec<Point3f>,
    links: Vec<Link>,
}

#[derive(Deserialize)]
struct PathGraphParts {
    vertices: Vec<Point3f>,
    links: Vec<Link>,
}

impl TryFrom<PathGraphParts> for PathGraph {
    type Error = Error;

    fn try_from(parts: PathGraphParts) -> Result<Self> {
        Self::new(parts.vertices, parts.links)
    }
}

impl PathGraph {
    /// Create a graph from vertices and links, validating every link
    pub fn new(vertices: Vec<Point3f>, links: Vec<Link>) -> Result<Self> {
        for (i, link) in links.iter().enumerate() {
            check_link(i, link, vertices.len())?;
        }
        Ok(Self { vertices, links })
    }

    pub(crate) fn from_parts_unchecked(vertices: Vec<Point3f>, links: Vec<Link>) -> Self {
        debug_assert!(links
            .iter()
            .all(|l| l.start < vertices.len() && l.end < vertices.len()));
        Self { vertices, links }
    }

    /// Create a graph with no links
    pub fn from_vertices(vertices: Vec<Point3f>) -> Self {
        Self {
            vertices,
            links: Vec::new(),
        }
    }

    /// Build a graph from the distinct undirected edges of a triangle mesh.
    ///
    /// Links are stored with ascending endpoints, in the order their edge is
    /// first met while walking the faces.
    pub fn from_mesh_edges(mesh: &TriangleMesh) -> Result<Self> {
        mesh.validate()?;

        let mut seen = HashSet::new();
        let mut links = Vec::new();
        for face in &mesh.faces {
            for (a, b) in [(face[0], face[1]), (face[1], face[2]), (face[2], face[0])] {
                let link = Link::new(a, b).undirected();
                if link.is_loop() {
                    continue;
                }
                if seen.insert(link) {
                    links.push(link);
                }
            }
        }

        tracing::debug!(
            faces = mesh.face_count(),
            links = links.len(),
            "extracted mesh edges"
        );

        Ok(Self::from_parts_unchecked(mesh.vertices.clone(), links))
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of links
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Check if the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[Point3f] {
        &self.vertices
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Get the position of a vertex
    pub fn vertex(&self, index: usize) -> Option<Point3f> {
        self.vertices.get(index).copied()
    }

    /// Add a vertex and return its index
    pub fn add_vertex(&mut self, vertex: Point3f) -> usize {
        let index = self.vertices.len();
        self.vertices.push(vertex);
        index
    }

    /// Add a link between two existing vertices and return its index
    pub fn add_link(&mut self, start: usize, end: usize) -> Result<usize> {
        let link = Link::new(start, end);
        let index = self.links.len();
        check_link(index, &link, self.vertices.len())?;
        self.links.push(link);
        Ok(index)
    }

    /// Endpoint positions of a link
    pub fn segment(&self, link: usize) -> Option<(Point3f, Point3f)> {
        let link = self.links.get(link)?;
        Some((self.vertices[link.start], self.vertices[link.end]))
    }

    /// Endpoint positions of every link, in link order
    pub fn segments(&self) -> impl Iterator<Item = (Point3f, Point3f)> + '_ {
        self.links
            .iter()
            .map(move |link| (self.vertices[link.start], self.vertices[link.end]))
    }

    /// Apply a function to every vertex position
    pub fn map_vertices<F>(&mut self, f: F)
    where
        F: FnMut(&mut Point3f),
    {
        self.vertices.iter_mut().for_each(f);
    }

    /// Split the graph into its vertices and links
    pub fn into_parts(self) -> (Vec<Point3f>, Vec<Link>) {
        (self.vertices, self.links)
    }
}

fn check_link(index: usize, link: &Link, vertex_count: usize) -> Result<()> {
    for endpoint in [link.start, link.end] {
        if endpoint >= vertex_count {
            return Err(Error::LinkOutOfRange {
                link: index,
                index: endpoint,
                vertex_count,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> PathGraph {
        let vertices = vec![
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(1.0, 0.0, 0.0),
            Point3f::new(1.0, 1.0, 0.0),
            Point3f::new(0.0, 1.0, 0.0),
        ];
        let links = vec![
            Link::new(0, 1),
            Link::new(1, 2),
            Link::new(2, 3),
            Link::new(3, 0),
        ];
        PathGraph::new(vertices, links).unwrap()
    }

    #[test]
    fn test_segments_follow_link_order() {
        let graph = square();
        let segments: Vec<_> = graph.segments().collect();
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0], (Point3f::new(0.0, 0.0, 0.0), Point3f::new(1.0, 0.0, 0.0)));
        assert_eq!(segments[3], (Point3f::new(0.0, 1.0, 0.0), Point3f::new(0.0, 0.0, 0.0)));
        assert_eq!(graph.segment(1), segments.get(1).copied());
        assert!(graph.segment(4).is_none());
    }

    #[test]
    fn test_new_rejects_out_of_range_link() {
        let vertices = vec![Point3f::origin(), Point3f::new(1.0, 1.0, 1.0)];
        let err = PathGraph::new(vertices, vec![Link::new(0, 1), Link::new(1, 2)]).unwrap_err();
        match err {
            Error::LinkOutOfRange { link, index, vertex_count } => {
                assert_eq!(link, 1);
                assert_eq!(index, 2);
                assert_eq!(vertex_count, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_add_link_checks_bounds() {
        let mut graph = PathGraph::default();
        let a = graph.add_vertex(Point3f::origin());
        let b = graph.add_vertex(Point3f::new(0.0, 2.0, 0.0));
        assert_eq!(graph.add_link(a, b).unwrap(), 0);
        assert!(graph.add_link(b, 7).is_err());
        assert_eq!(graph.link_count(), 1);
    }

    #[test]
    fn test_from_mesh_edges_deduplicates() {
        let mesh = TriangleMesh::from_vertices_and_faces(
            vec![
                Point3f::new(0.0, 0.0, 0.0),
                Point3f::new(1.0, 0.0, 0.0),
                Point3f::new(1.0, 1.0, 0.0),
                Point3f::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2], [0, 2, 3]],
        );
        let graph = PathGraph::from_mesh_edges(&mesh).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(
            graph.links(),
            &[
                Link::new(0, 1),
                Link::new(1, 2),
                Link::new(0, 2),
                Link::new(2, 3),
                Link::new(0, 3),
            ]
        );
    }

    #[test]
    fn test_from_mesh_edges_skips_degenerate_edges() {
        let mesh = TriangleMesh::from_vertices_and_faces(
            vec![Point3f::origin(), Point3f::new(1.0, 0.0, 0.0)],
            vec![[0, 0, 1]],
        );
        let graph = PathGraph::from_mesh_edges(&mesh).unwrap();
        assert_eq!(graph.links(), &[Link::new(0, 1)]);
    }

    #[test]
    fn test_serde_validates_links() {
        let graph = square();
        let json = serde_json::to_string(&graph).unwrap();
        let restored: PathGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, graph);

        let bad = r#"{"vertices":[[0.0,0.0,0.0]],"links":[{"start":0,"end":3}]}"#;
        assert!(serde_json::from_str::<PathGraph>(bad).is_err());
    }
}
