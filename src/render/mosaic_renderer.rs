// src/render/mosaic_renderer.rs
//
// Draws mosaic grids with nannou.
// Cells are painted back to front; only faces pointing at the camera are
// emitted. Textured grids crop the photo per cell, flat grids use the tint.

use nannou::prelude::*;

use super::cube::{cell_faces, CubeFace, Lighting, FACE_UVS};
use super::projection::Projector;
use crate::models::{Cell, MosaicGrid};

pub struct MosaicRenderer {
    pub cell_size: f32,
    pub projector: Projector,
    pub lighting: Lighting,
}

impl MosaicRenderer {
    pub fn new(cell_size: f32, projector: Projector) -> Self {
        Self {
            cell_size,
            projector,
            lighting: Lighting::default(),
        }
    }

    pub fn draw_grid(&self, draw: &Draw, grid: &MosaicGrid, texture: Option<&wgpu::Texture>) {
        for cell in visible_back_to_front(grid) {
            let faces = cell_faces(cell, self.cell_size);
            for face in faces.iter().filter(|f| f.faces_camera()) {
                let color = shaded(cell.tint, self.lighting.shade(face.normal));
                match (texture, grid.material.is_textured()) {
                    (Some(texture), true) => self.draw_textured_face(draw, cell, face, texture, color),
                    _ => self.draw_flat_face(draw, face, color),
                }
            }
        }
    }

    fn draw_textured_face(
        &self,
        draw: &Draw,
        cell: &Cell,
        face: &CubeFace,
        texture: &wgpu::Texture,
        color: Rgb,
    ) {
        let points = CubeFace::triangles().map(|i| {
            let p = self.projector.project(face.corners[i]);
            let (fu, fv) = FACE_UVS[i];
            (pt3(p.x, p.y, 0.0), cell.uv.map(fu, fv))
        });
        draw.mesh().points_textured(texture, points).color(color);
    }

    fn draw_flat_face(&self, draw: &Draw, face: &CubeFace, color: Rgb) {
        let points = CubeFace::triangles().map(|i| {
            let p = self.projector.project(face.corners[i]);
            (pt3(p.x, p.y, 0.0), color)
        });
        draw.mesh().points_colored(points);
    }
}

pub fn visible_back_to_front(grid: &MosaicGrid) -> Vec<&Cell> {
    let mut cells: Vec<&Cell> = grid.cells.iter().filter(|c| c.is_visible()).collect();
    cells.sort_by(|a, b| a.position.z.total_cmp(&b.position.z));
    cells
}

fn shaded(color: Rgb, light: f32) -> Rgb {
    rgb(color.red * light, color.green * light, color.blue * light)
}
