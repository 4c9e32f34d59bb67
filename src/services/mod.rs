pub mod asset_loader;
pub mod build_tracker;
pub mod grid_builder;

pub use asset_loader::{load_mosaic, AssetLoader, LoadSettings, LoadedMosaic, MosaicError};
pub use build_tracker::BuildTracker;
pub use grid_builder::GridBuilder;
