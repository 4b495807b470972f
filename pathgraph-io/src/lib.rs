//! I/O operations for path graphs and meshes
//!
//! This crate reads and writes PATHGRAPH files and reads the OFF triangle
//! meshes that path graphs are baked from.

pub mod pathgraph;
pub mod off;
pub mod bake;
pub mod error;

pub use error::*;
pub use pathgraph::{
    PathGraphReadOptions, PathGraphReader, PathGraphWriteOptions, PathGraphWriter,
    PATHGRAPH_HEADER,
};
pub use off::OffReader;
pub use bake::{
    bake_directory, bake_mesh, bake_off_file, BakeDirectorySummary, BakeOptions, BakeSummary,
};

use pathgraph_core::{PathGraph, TriangleMesh};
use std::path::Path;

/// Trait for reading meshes from files
pub trait MeshReader {
    fn read_mesh<P: AsRef<Path>>(path: P) -> Result<TriangleMesh>;
}

/// Read a path graph, choosing the reader from the file extension.
///
/// `.off` meshes are turned into the graph of their edges. Any other
/// extension is read as PATHGRAPH text.
pub fn read_graph<P: AsRef<Path>>(path: P) -> Result<PathGraph> {
    let path = path.as_ref();
    match extension(path).as_deref() {
        Some("off") => {
            let mesh = OffReader::read_mesh(path)?;
            Ok(PathGraph::from_mesh_edges(&mesh)?)
        }
        _ => PathGraphReader::read_path_graph(path),
    }
}

/// Read a mesh, choosing the reader from the file extension
pub fn read_mesh<P: AsRef<Path>>(path: P) -> Result<TriangleMesh> {
    let path = path.as_ref();
    match extension(path).as_deref() {
        Some("off") => OffReader::read_mesh(path),
        _ => Err(IoError::UnsupportedFormat(format!(
            "Unsupported mesh format: {:?}",
            path.extension()
        ))),
    }
}

/// Write a path graph as PATHGRAPH text
pub fn write_graph<P: AsRef<Path>>(graph: &PathGraph, path: P) -> Result<()> {
    PathGraphWriter::write_path_graph(graph, path)
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
}
