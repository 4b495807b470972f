//! Error types for pathgraph

use thiserror::Error;

/// Main error type for pathgraph core operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Link {link} references vertex {index}, but the graph has {vertex_count} vertices")]
    LinkOutOfRange {
        link: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("Face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    FaceOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
}

/// Result type alias for pathgraph core operations
pub type Result<T> = std::result::Result<T, Error>;
