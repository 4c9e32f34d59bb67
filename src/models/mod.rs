pub mod cell;
pub mod mask;
pub mod mosaic;

pub use cell::{fallback_color, offset_lightness, Cell, MaterialKind, UvRect};
pub use mask::{brightness, grid_height, MaskConfig, MaskSample, DEFAULT_THRESHOLD};
pub use mosaic::{MosaicGrid, MosaicSet};
