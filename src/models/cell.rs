// src/models/cell.rs
//
// A Cell is one cube of a mosaic grid.
// Everything except `scale` and `position.z` is fixed at creation.

use nannou::prelude::*;

/// Sub-rectangle of the photo shown on every face of a cube.
/// `v` is measured from the bottom edge of the photo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRect {
    pub u: f32,
    pub v: f32,
    pub w: f32,
    pub h: f32,
}

impl UvRect {
    pub fn for_cell(x: u32, y: u32, grid_width: u32, grid_height: u32) -> Self {
        Self {
            u: x as f32 / grid_width as f32,
            v: y as f32 / grid_height as f32,
            w: 1.0 / grid_width as f32,
            h: 1.0 / grid_height as f32,
        }
    }

    /// Maps a face-local coordinate (0..1, origin bottom-left) into the photo,
    /// returned in texture space (origin top-left).
    pub fn map(&self, fu: f32, fv: f32) -> Point2 {
        pt2(self.u + fu * self.w, 1.0 - (self.v + fv * self.h))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaterialKind {
    Textured,
    Flat(Rgb),
}

impl MaterialKind {
    pub fn base_color(&self) -> Rgb {
        match self {
            MaterialKind::Textured => rgb(1.0, 1.0, 1.0),
            MaterialKind::Flat(color) => *color,
        }
    }

    pub fn is_textured(&self) -> bool {
        matches!(self, MaterialKind::Textured)
    }
}

/// Grey used when the photo could not be loaded.
pub fn fallback_color() -> Rgb {
    rgb(
        0x88 as f32 / 255.0,
        0x88 as f32 / 255.0,
        0x88 as f32 / 255.0,
    )
}

/// Shifts the lightness of `color`, clamped to the valid range.
/// The offset is applied in linear light, not to the sRGB components.
pub fn offset_lightness(color: Rgb, offset: f32) -> Rgb {
    let hsl = Hsl::from(color);
    let lightness = (hsl.lightness + offset).clamp(0.0, 1.0);
    Rgb::from(Hsl::new(hsl.hue, hsl.saturation, lightness))
}

#[derive(Debug, Clone)]
pub struct Cell {
    pub grid_x: u32,
    pub grid_y: u32,
    pub position: Vec3,
    pub rest_depth: f32,
    pub rotation: Vec2, // tilt around x and y, radians
    pub scale: f32,
    pub uv: UvRect,
    pub tint: Rgb,
}

impl Cell {
    pub fn is_visible(&self) -> bool {
        self.scale > 0.0
    }
}
