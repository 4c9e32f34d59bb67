// src/models/mask.rs
//
// Mask sampling: turns a mask image into a per-cell include/exclude grid.
//
// The mask is downsampled to the grid resolution with a smoothing filter,
// and each cell is kept when it is dark enough.
// Row 0 of a MaskSample is the bottom row of the image.

use nannou::image::{imageops::FilterType, DynamicImage, GenericImageView};
use serde::Deserialize;

/// Brightness at or below which a cell becomes a mosaic tile.
pub const DEFAULT_THRESHOLD: f32 = 240.0;

/// One preset mosaic: a mask that shapes the grid and a photo that colours it.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MaskConfig {
    pub id: String,
    pub mask: String,
    pub photo: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaskSample {
    pub width: u32,
    pub height: u32,
    included: Vec<bool>,
}

pub fn brightness(r: u8, g: u8, b: u8) -> f32 {
    (r as f32 + g as f32 + b as f32) / 3.0
}

pub fn grid_height(grid_width: u32, aspect: f32) -> u32 {
    ((grid_width as f32 / aspect).round() as u32).max(1)
}

impl MaskSample {
    /// Samples raw RGBA rows (top row first) of a `width` x `height` image.
    pub fn from_rgba(width: u32, height: u32, data: &[u8], threshold: f32) -> Self {
        let mut included = Vec::with_capacity((width * height) as usize);

        for y in 0..height {
            // flip so that row 0 is the bottom of the image
            let src_row = height - 1 - y;
            for x in 0..width {
                let index = ((src_row * width + x) * 4) as usize;
                let (r, g, b) = match data.get(index..index + 4) {
                    Some(px) => over_black(px[0], px[1], px[2], px[3]),
                    None => (0, 0, 0),
                };
                included.push(brightness(r, g, b) <= threshold);
            }
        }

        Self {
            width,
            height,
            included,
        }
    }

    /// Downsamples `image` to `grid_width` columns and samples it.
    pub fn from_image(image: &DynamicImage, grid_width: u32, threshold: f32) -> Self {
        let (w, h) = image.dimensions();
        let aspect = w as f32 / h.max(1) as f32;
        let grid_h = grid_height(grid_width, aspect);

        let small = image
            .resize_exact(grid_width, grid_h, FilterType::Triangle)
            .to_rgba8();

        Self::from_rgba(grid_width, grid_h, small.as_raw(), threshold)
    }

    pub fn is_included(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.included[(y * self.width + x) as usize]
    }

    pub fn included_count(&self) -> usize {
        self.included.iter().filter(|&&on| on).count()
    }

    /// Included cells in row-major order, bottom row first.
    pub fn included_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.width;
        self.included
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(move |(i, _)| (i as u32 % width, i as u32 / width))
    }
}

// transparent pixels are composited over black
fn over_black(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8) {
    if a == 255 {
        return (r, g, b);
    }
    let scale = |c: u8| ((c as u16 * a as u16 + 127) / 255) as u8;
    (scale(r), scale(g), scale(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nannou::image::{Rgba, RgbaImage};

    fn solid(width: u32, height: u32, value: u8) -> Vec<u8> {
        let mut data = Vec::new();
        for _ in 0..width * height {
            data.extend_from_slice(&[value, value, value, 255]);
        }
        data
    }

    #[test]
    fn test_brightness_average() {
        assert_eq!(brightness(0, 0, 0), 0.0);
        assert_eq!(brightness(255, 255, 255), 255.0);
        assert_eq!(brightness(240, 240, 240), 240.0);
        assert_eq!(brightness(30, 60, 90), 60.0);
    }

    #[test]
    fn test_grid_height_follows_aspect() {
        assert_eq!(grid_height(42, 2.0), 21);
        assert_eq!(grid_height(42, 1.0), 42);
        assert_eq!(grid_height(42, 0.5), 84);
        assert_eq!(grid_height(42, 1.5), 28);
        // extreme aspect never collapses to zero rows
        assert_eq!(grid_height(4, 100.0), 1);
    }

    #[test]
    fn test_threshold_boundary_flips_inclusion() {
        let mut data = solid(2, 1, 255);
        let sample = MaskSample::from_rgba(2, 1, &data, DEFAULT_THRESHOLD);
        assert!(!sample.is_included(0, 0));

        // exactly at the threshold is still a tile
        data[0..3].copy_from_slice(&[240, 240, 240]);
        let sample = MaskSample::from_rgba(2, 1, &data, DEFAULT_THRESHOLD);
        assert!(sample.is_included(0, 0));
        assert!(!sample.is_included(1, 0));

        // one step brighter drops it again
        data[0..3].copy_from_slice(&[241, 240, 240]);
        let sample = MaskSample::from_rgba(2, 1, &data, DEFAULT_THRESHOLD);
        assert!(!sample.is_included(0, 0));
    }

    #[test]
    fn test_rows_are_flipped() {
        // top row dark, bottom row white
        let mut data = solid(3, 2, 255);
        for x in 0..3 {
            let i = x * 4;
            data[i..i + 3].copy_from_slice(&[0, 0, 0]);
        }
        let sample = MaskSample::from_rgba(3, 2, &data, DEFAULT_THRESHOLD);
        for x in 0..3 {
            assert!(!sample.is_included(x, 0));
            assert!(sample.is_included(x, 1));
        }
        assert_eq!(
            sample.included_cells().collect::<Vec<_>>(),
            vec![(0, 1), (1, 1), (2, 1)]
        );
    }

    #[test]
    fn test_transparent_pixels_read_as_black() {
        let data = vec![255, 255, 255, 0, 255, 255, 255, 255];
        let sample = MaskSample::from_rgba(2, 1, &data, DEFAULT_THRESHOLD);
        assert!(sample.is_included(0, 0));
        assert!(!sample.is_included(1, 0));
    }

    #[test]
    fn test_out_of_range_is_excluded() {
        let sample = MaskSample::from_rgba(2, 2, &solid(2, 2, 0), DEFAULT_THRESHOLD);
        assert_eq!(sample.included_count(), 4);
        assert!(!sample.is_included(2, 0));
        assert!(!sample.is_included(0, 2));
    }

    #[test]
    fn test_from_image_downsamples_to_grid() {
        // 84x42 image, left half black, right half white
        let img = RgbaImage::from_fn(84, 42, |x, _| {
            if x < 42 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        });
        let sample = MaskSample::from_image(&DynamicImage::ImageRgba8(img), 42, DEFAULT_THRESHOLD);
        assert_eq!(sample.width, 42);
        assert_eq!(sample.height, 21);
        assert!(sample.is_included(0, 0));
        assert!(sample.is_included(10, 20));
        assert!(!sample.is_included(41, 0));
        assert!(!sample.is_included(35, 10));
    }
}
