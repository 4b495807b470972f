//! Baking OFF meshes into PATHGRAPH files

use crate::error::Result;
use crate::off::OffReader;
use crate::pathgraph::{PathGraphWriteOptions, PathGraphWriter};
use crate::MeshReader;
use pathgraph_core::{Error as CoreError, PathGraph, TriangleMesh};
use std::fs;
use std::path::{Path, PathBuf};

/// Options for turning a mesh into a path graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BakeOptions {
    /// Scale the mesh into the unit cube before extracting edges
    pub normalize: bool,
    /// Keep only the largest connected component
    pub largest_component_only: bool,
    pub write: PathGraphWriteOptions,
}

impl Default for BakeOptions {
    fn default() -> Self {
        Self {
            normalize: true,
            largest_component_only: true,
            write: PathGraphWriteOptions::default(),
        }
    }
}

/// Counts describing a finished bake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BakeSummary {
    pub mesh_vertices: usize,
    pub mesh_faces: usize,
    pub components: usize,
    pub graph_vertices: usize,
    pub graph_links: usize,
}

/// Counts describing a finished directory bake
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BakeDirectorySummary {
    pub baked: usize,
    /// Meshes whose output file already existed
    pub skipped: usize,
    pub failed: usize,
}

/// Extract the path graph of a mesh
pub fn bake_mesh(mesh: &TriangleMesh, options: &BakeOptions) -> Result<(PathGraph, BakeSummary)> {
    let mut graph = PathGraph::from_mesh_edges(mesh)?;
    // Without links every component is a lone vertex.
    if options.largest_component_only && graph.link_count() == 0 {
        return Err(CoreError::InvalidData("mesh has no component with links".into()).into());
    }
    if options.normalize {
        graph.normalize_to_unit_cube()?;
    }

    let components = graph.connected_components().len();
    if options.largest_component_only {
        graph = graph.largest_component();
    }

    let summary = BakeSummary {
        mesh_vertices: mesh.vertex_count(),
        mesh_faces: mesh.face_count(),
        components,
        graph_vertices: graph.vertex_count(),
        graph_links: graph.link_count(),
    };
    Ok((graph, summary))
}

/// Read an OFF mesh, extract its path graph and write it as PATHGRAPH
pub fn bake_off_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &BakeOptions,
) -> Result<BakeSummary> {
    let mesh = OffReader::read_mesh(input)?;
    let (graph, summary) = bake_mesh(&mesh, options)?;
    PathGraphWriter::write_path_graph_with_options(&graph, output, &options.write)?;

    tracing::info!(
        components = summary.components,
        vertices = summary.graph_vertices,
        links = summary.graph_links,
        "baked path graph"
    );
    Ok(summary)
}

/// Bake every `.off` mesh below `input_root` into a mirrored tree of `.path`
/// files under `output_root`.
///
/// Meshes whose output already exists are skipped. A mesh that fails to bake
/// is logged and counted; the rest of the tree is still processed.
pub fn bake_directory<P: AsRef<Path>, Q: AsRef<Path>>(
    input_root: P,
    output_root: Q,
    options: &BakeOptions,
) -> Result<BakeDirectorySummary> {
    let input_root = input_root.as_ref();
    let output_root = output_root.as_ref();

    let mut meshes = Vec::new();
    collect_off_files(input_root, &mut meshes)?;
    meshes.sort();

    let mut summary = BakeDirectorySummary::default();
    for input in meshes {
        let relative = input.strip_prefix(input_root).unwrap_or(input.as_path());
        let output = output_root.join(relative).with_extension("path");
        if output.exists() {
            tracing::info!(path = %output.display(), "already baked, skipping");
            summary.skipped += 1;
            continue;
        }
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)?;
        }

        match bake_off_file(&input, &output, options) {
            Ok(_) => summary.baked += 1,
            Err(e) => {
                tracing::warn!(path = %input.display(), error = %e, "failed to bake mesh");
                summary.failed += 1;
            }
        }
    }

    tracing::info!(
        baked = summary.baked,
        skipped = summary.skipped,
        failed = summary.failed,
        "baked directory"
    );
    Ok(summary)
}

fn collect_off_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_off_files(&path, files)?;
        } else if crate::extension(&path).as_deref() == Some("off") {
            files.push(path);
        }
    }
    Ok(())
}
