//! WebGPU rendering module
//!
//! Snapshot -> triangle list (`scene`, `shapes`) -> vertex-color pipeline.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, playfield_to_ndc};
pub use scene::build_scene;
pub use vertex::Vertex;
