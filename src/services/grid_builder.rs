// src/services/grid_builder.rs
//
// Turns a MaskSample into a MosaicGrid.
// Each included cell becomes a cube centred on the grid's midpoint, with a
// little random depth, tilt and lightness so the mosaic doesn't look flat.

use nannou::prelude::*;
use rand::Rng;

use crate::config::{JitterConfig, MosaicConfig};
use crate::models::{offset_lightness, Cell, MaskSample, MaterialKind, MosaicGrid, UvRect};

#[derive(Debug, Clone)]
pub struct GridBuilder {
    pub spacing: f32,
    pub depth_jitter: f32,
    pub tilt_jitter: f32,
    pub lightness_jitter: f32,
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self {
            spacing: 0.6,
            depth_jitter: 0.6,
            tilt_jitter: 0.15,
            lightness_jitter: 0.05,
        }
    }
}

impl GridBuilder {
    pub fn from_config(mosaic: &MosaicConfig, jitter: &JitterConfig) -> Self {
        Self {
            spacing: mosaic.spacing,
            depth_jitter: jitter.depth,
            tilt_jitter: jitter.tilt,
            lightness_jitter: jitter.lightness,
        }
    }

    pub fn build<R: Rng>(
        &self,
        id: &str,
        sample: &MaskSample,
        material: MaterialKind,
        rng: &mut R,
    ) -> MosaicGrid {
        let width = sample.width;
        let height = sample.height;
        let half_w = width as f32 / 2.0;
        let half_h = height as f32 / 2.0;
        let base_color = material.base_color();

        let cells = sample
            .included_cells()
            .map(|(x, y)| {
                let depth = jitter(rng, self.depth_jitter);
                let tilt = vec2(jitter(rng, self.tilt_jitter), jitter(rng, self.tilt_jitter));
                let tint = offset_lightness(base_color, jitter(rng, self.lightness_jitter));

                Cell {
                    grid_x: x,
                    grid_y: y,
                    position: vec3(
                        (x as f32 - half_w) * self.spacing,
                        (y as f32 - half_h) * self.spacing,
                        depth,
                    ),
                    rest_depth: depth,
                    rotation: tilt,
                    // start hidden for the reveal
                    scale: 0.0,
                    uv: UvRect::for_cell(x, y, width, height),
                    tint,
                }
            })
            .collect();

        MosaicGrid {
            id: id.to_string(),
            width,
            height,
            material,
            cells,
        }
    }
}

// symmetric noise in [-amount/2, amount/2)
fn jitter<R: Rng>(rng: &mut R, amount: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * amount
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{fallback_color, DEFAULT_THRESHOLD};
    use rand::{rngs::StdRng, SeedableRng};

    // 4x2 mask: bottom row (image row 1) fully dark, top row dark only at x = 3
    fn sample() -> MaskSample {
        let mut data = Vec::new();
        for x in 0..4 {
            let v = if x == 3 { 0 } else { 255 };
            data.extend_from_slice(&[v, v, v, 255]);
        }
        for _ in 0..4 {
            data.extend_from_slice(&[10, 10, 10, 255]);
        }
        MaskSample::from_rgba(4, 2, &data, DEFAULT_THRESHOLD)
    }

    #[test]
    fn test_one_cell_per_included_pixel() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = GridBuilder::default().build("heart", &sample(), MaterialKind::Textured, &mut rng);
        assert_eq!(grid.id, "heart");
        assert_eq!((grid.width, grid.height), (4, 2));
        assert_eq!(grid.cell_count(), 5);
        let coords: Vec<_> = grid.cells.iter().map(|c| (c.grid_x, c.grid_y)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (3, 0), (3, 1)]);
    }

    #[test]
    fn test_cells_start_hidden() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = GridBuilder::default().build("heart", &sample(), MaterialKind::Textured, &mut rng);
        assert!(grid.all_scaled_to(0.0));
    }

    #[test]
    fn test_positions_are_centred_and_jittered() {
        let mut rng = StdRng::seed_from_u64(11);
        let builder = GridBuilder::default();
        let grid = builder.build("heart", &sample(), MaterialKind::Textured, &mut rng);

        let first = &grid.cells[0];
        assert!((first.position.x - (0.0 - 2.0) * 0.6).abs() < 1e-6);
        assert!((first.position.y - (0.0 - 1.0) * 0.6).abs() < 1e-6);
        let last = &grid.cells[4];
        assert!((last.position.x - (3.0 - 2.0) * 0.6).abs() < 1e-6);
        assert!(last.position.y.abs() < 1e-6);

        for cell in &grid.cells {
            assert!(cell.position.z.abs() <= 0.3);
            assert_eq!(cell.position.z, cell.rest_depth);
            assert!(cell.rotation.x.abs() <= 0.075);
            assert!(cell.rotation.y.abs() <= 0.075);
        }
    }

    #[test]
    fn test_uv_crop_matches_grid_position() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = GridBuilder::default().build("heart", &sample(), MaterialKind::Textured, &mut rng);
        let cell = &grid.cells[4];
        assert_eq!(cell.uv, UvRect::for_cell(3, 1, 4, 2));
        assert_eq!(cell.uv.u, 0.75);
        assert_eq!(cell.uv.v, 0.5);
        assert_eq!(cell.uv.w, 0.25);
        assert_eq!(cell.uv.h, 0.5);
    }

    #[test]
    fn test_seeded_builds_are_deterministic() {
        let builder = GridBuilder::default();
        let a = builder.build("a", &sample(), MaterialKind::Textured, &mut StdRng::seed_from_u64(5));
        let b = builder.build("a", &sample(), MaterialKind::Textured, &mut StdRng::seed_from_u64(5));
        for (ca, cb) in a.cells.iter().zip(b.cells.iter()) {
            assert_eq!(ca.position, cb.position);
            assert_eq!(ca.rotation, cb.rotation);
        }
    }

    #[test]
    fn test_flat_material_tint_stays_near_grey() {
        let mut rng = StdRng::seed_from_u64(9);
        let grid = GridBuilder::default().build(
            "heart",
            &sample(),
            MaterialKind::Flat(fallback_color()),
            &mut rng,
        );
        let grey = fallback_color().red;
        for cell in &grid.cells {
            assert!((cell.tint.red - grey).abs() <= 0.026);
        }
    }

    #[test]
    fn test_empty_mask_builds_empty_grid() {
        let data = vec![255u8; 4 * 4];
        let blank = MaskSample::from_rgba(2, 2, &data, DEFAULT_THRESHOLD);
        let mut rng = StdRng::seed_from_u64(1);
        let grid = GridBuilder::default().build("blank", &blank, MaterialKind::Textured, &mut rng);
        assert_eq!(grid.cell_count(), 0);
    }
}
