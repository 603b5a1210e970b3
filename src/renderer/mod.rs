//! Rendering module
//!
//! The scene is tessellated on the CPU into flat-colored triangles, then
//! either drawn through WebGPU or kept in memory by the headless renderer.

pub mod headless;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use headless::HeadlessRenderer;
pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::{Palette, Vertex};
