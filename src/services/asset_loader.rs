// src/services/asset_loader.rs
//
// Loads mask and photo images off the main thread.
//
// Each mosaic is one job on the rayon pool. Finished jobs are sent back
// over a channel and picked up by the app's update loop, which uploads the
// photo to the GPU and counts the grid towards the build tracker.

use nannou::image::{self, DynamicImage};
use rand::thread_rng;
use std::{
    path::{Path, PathBuf},
    sync::mpsc::{channel, Receiver},
};

use super::grid_builder::GridBuilder;
use crate::models::{fallback_color, MaskConfig, MaskSample, MaterialKind, MosaicGrid};

#[derive(Debug, thiserror::Error)]
pub enum MosaicError {
    #[error("failed to load mask {} for mosaic '{id}': {source}", .path.display())]
    MaskLoad {
        id: String,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to load photo {} for mosaic '{id}': {source}", .path.display())]
    PhotoLoad {
        id: String,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub struct LoadedMosaic {
    pub grid: MosaicGrid,
    // decoded photo, waiting to be uploaded as a texture
    pub photo: Option<DynamicImage>,
}

#[derive(Debug, Clone)]
pub struct LoadSettings {
    pub image_dir: PathBuf,
    pub grid_size: u32,
    pub threshold: f32,
    pub builder: GridBuilder,
}

fn load_photo(config: &MaskConfig, image_dir: &Path) -> Result<DynamicImage, MosaicError> {
    let path = image_dir.join(&config.photo);
    image::open(&path).map_err(|source| MosaicError::PhotoLoad {
        id: config.id.clone(),
        path,
        source,
    })
}

/// Loads one mosaic synchronously.
/// A missing photo is not fatal: the grid falls back to a flat material.
pub fn load_mosaic(
    config: &MaskConfig,
    settings: &LoadSettings,
) -> Result<LoadedMosaic, MosaicError> {
    let mask_path = settings.image_dir.join(&config.mask);
    let mask = image::open(&mask_path).map_err(|source| MosaicError::MaskLoad {
        id: config.id.clone(),
        path: mask_path,
        source,
    })?;
    let sample = MaskSample::from_image(&mask, settings.grid_size, settings.threshold);

    let (material, photo) = match load_photo(config, &settings.image_dir) {
        Ok(photo) => (MaterialKind::Textured, Some(photo)),
        Err(e) => {
            log::warn!("{}; using flat material", e);
            (MaterialKind::Flat(fallback_color()), None)
        }
    };

    let grid = settings
        .builder
        .build(&config.id, &sample, material, &mut thread_rng());
    log::info!(
        "Built mosaic '{}': {}x{} grid, {} cells",
        grid.id,
        grid.width,
        grid.height,
        grid.cell_count()
    );

    Ok(LoadedMosaic { grid, photo })
}

pub struct AssetLoader {
    receiver: Receiver<Result<LoadedMosaic, MosaicError>>,
    expected: usize,
}

impl AssetLoader {
    /// Starts loading every mosaic in `configs` in the background.
    pub fn spawn(configs: &[MaskConfig], settings: LoadSettings) -> Self {
        let (sender, receiver) = channel();

        for config in configs.iter().cloned() {
            let sender = sender.clone();
            let settings = settings.clone();
            rayon::spawn(move || {
                let result = load_mosaic(&config, &settings);
                // receiver may already be gone on shutdown
                sender.send(result).ok();
            });
        }

        Self {
            receiver,
            expected: configs.len(),
        }
    }

    pub fn expected(&self) -> usize {
        self.expected
    }

    /// Everything that finished since the last poll.
    pub fn poll(&self) -> Vec<Result<LoadedMosaic, MosaicError>> {
        self.receiver.try_iter().collect()
    }
}
