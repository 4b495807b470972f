//! Error types for drawing

use pathgraph_io::IoError;
use thiserror::Error;

/// Errors that can occur while loading and drawing a graph
#[derive(Error, Debug)]
pub enum DrawError {
    #[error("Failed to load graph: {0}")]
    Load(#[from] IoError),

    #[error("Segment sink error: {0}")]
    Sink(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DrawError>;
