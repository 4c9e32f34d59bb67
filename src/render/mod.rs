// src/render/mod.rs
// Cube geometry, projection and drawing of mosaic grids

pub mod cube;
pub mod mosaic_renderer;
pub mod projection;

pub use cube::{cell_faces, unit_faces, CubeFace, Lighting};
pub use mosaic_renderer::MosaicRenderer;
pub use projection::Projector;
