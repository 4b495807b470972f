//! Drawing path graphs
//!
//! A path graph is drawn as one straight line segment per link. The
//! rendering backend is anything implementing [`SegmentSink`]: an in-memory
//! scene, a GPU line-list vertex buffer or an OBJ line file.

pub mod error;
pub mod renderer;
pub mod line_buffer;
pub mod obj_lines;
pub mod drawer;

pub use error::*;
pub use renderer::*;
pub use line_buffer::*;
pub use obj_lines::*;
pub use drawer::*;
