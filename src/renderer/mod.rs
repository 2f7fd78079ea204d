//! WebGPU rendering module
//!
//! The scene is built as flat-colored triangles on the CPU each frame and
//! drawn in a single pass. HUD text is left to the page.

pub mod hud;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use hud::{OverlayText, overlay_text, score_text, status_text};
pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::Vertex;
