//! WebGPU rendering module
//!
//! The simulation hands over a read-only state snapshot; `shapes` turns it
//! into a triangle list and `pipeline` pushes it at the screen. All text is
//! DOM overlay, so nothing here rasterizes glyphs.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{background_color, RenderState};
pub use shapes::scene;
pub use vertex::Vertex;
