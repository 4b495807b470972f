//! Error types for I/O operations

use thiserror::Error;

/// Errors that can occur while reading or writing graph and mesh files
#[derive(Error, Debug)]
pub enum IoError {
    #[error("Missing PATHGRAPH header (first line was {found:?})")]
    MissingHeader { found: Option<String> },

    #[error("Line {line}: expected `<vertexCount> <linkCount>`, found {found:?}")]
    MalformedCounts { line: usize, found: String },

    #[error("Line {line}: expected {expected} tokens, found {found}")]
    TokenCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: invalid {expected} {token:?}")]
    InvalidToken {
        line: usize,
        token: String,
        expected: &'static str,
    },

    #[error("Unexpected end of file: expected {expected} {section} lines, found {found}")]
    Truncated {
        section: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: link {link} references vertex {index}, but only {vertex_count} vertices were declared")]
    LinkOutOfRange {
        line: usize,
        link: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("Line {line}: unexpected content after the last link")]
    TrailingContent { line: usize },

    #[error("Declared {section} count {declared} exceeds the limit of {limit}")]
    LimitExceeded {
        section: &'static str,
        declared: usize,
        limit: usize,
    },

    #[error("Invalid file format: {format}")]
    InvalidFormat { format: String },

    #[error("Face {face} has {sides} sides, only triangles are supported")]
    NonTriangularFace { face: usize, sides: usize },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Core(#[from] pathgraph_core::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Whether the input is simply not a PATHGRAPH file.
    ///
    /// Callers that only want to render recognizable files can skip these
    /// and treat every other error as a damaged file.
    pub fn is_format_mismatch(&self) -> bool {
        matches!(
            self,
            IoError::MissingHeader { .. } | IoError::MalformedCounts { .. }
        )
    }
}

/// Result type alias for I/O operations
pub type Result<T> = std::result::Result<T, IoError>;
