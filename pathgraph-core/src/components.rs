//! Connected components of a path graph

use crate::graph::{Link, PathGraph};
use std::collections::HashMap;

/// Disjoint-set forest over vertex indices
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            // path halving
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
    }
}

impl PathGraph {
    /// Group vertex indices by connected component.
    ///
    /// Each component lists its vertices in ascending order. Components are
    /// sorted largest first, ties going to the one holding the smaller vertex.
    /// Isolated vertices form components of their own.
    pub fn connected_components(&self) -> Vec<Vec<usize>> {
        let mut forest = UnionFind::new(self.vertex_count());
        for link in self.links() {
            forest.union(link.start, link.end);
        }

        let mut by_root: HashMap<usize, usize> = HashMap::new();
        let mut components: Vec<Vec<usize>> = Vec::new();
        for vertex in 0..self.vertex_count() {
            let root = forest.find(vertex);
            let slot = *by_root.entry(root).or_insert_with(|| {
                components.push(Vec::new());
                components.len() - 1
            });
            components[slot].push(vertex);
        }

        // Stable sort keeps first-vertex order among equal sizes.
        components.sort_by(|a, b| b.len().cmp(&a.len()));
        components
    }

    /// The subgraph induced by the largest connected component.
    ///
    /// Vertices keep their relative order and are re-indexed from zero.
    pub fn largest_component(&self) -> PathGraph {
        let components = self.connected_components();
        let Some(largest) = components.first() else {
            return PathGraph::default();
        };
        self.induced_subgraph(largest)
    }

    /// The subgraph spanned by the given vertices, which must be ascending
    fn induced_subgraph(&self, vertices: &[usize]) -> PathGraph {
        let remap: HashMap<usize, usize> = vertices
            .iter()
            .enumerate()
            .map(|(new, &old)| (old, new))
            .collect();

        let positions = vertices.iter().map(|&v| self.vertices()[v]).collect();
        let links = self
            .links()
            .iter()
            .filter_map(|link| {
                Some(Link::new(*remap.get(&link.start)?, *remap.get(&link.end)?))
            })
            .collect();

        // Remapped indices are below `vertices.len()` by construction.
        let graph = PathGraph::from_parts_unchecked(positions, links);
        tracing::debug!(
            vertices = graph.vertex_count(),
            links = graph.link_count(),
            "extracted component"
        );
        graph
    }
}
