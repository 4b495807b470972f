//! Core data structures for pathgraph
//!
//! This crate provides the in-memory form of a PATHGRAPH file: positions,
//! links between them, and the triangle meshes such graphs are baked from.

pub mod point;
pub mod graph;
pub mod mesh;
mod components;
pub mod traits;
pub mod transform;
pub mod error;

pub use point::*;
pub use graph::*;
pub use mesh::*;
pub use traits::*;
pub use transform::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3};
