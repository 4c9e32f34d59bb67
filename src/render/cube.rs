// src/render/cube.rs
//
// Cube geometry and lighting for mosaic cells.
// Faces are built in cell-local space, then scaled, tilted (X then Y) and
// moved to the cell's position.

use nannou::prelude::*;

use crate::models::Cell;

// face-local coordinates of the four corners, origin bottom-left
pub const FACE_UVS: [(f32, f32); 4] = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];

#[derive(Debug, Clone, Copy)]
pub struct CubeFace {
    pub normal: Vec3,
    pub corners: [Vec3; 4], // counter-clockwise seen from outside
}

impl CubeFace {
    pub fn faces_camera(&self) -> bool {
        self.normal.z > 0.0
    }

    /// Two triangles as corner indices.
    pub fn triangles() -> [usize; 6] {
        [0, 1, 2, 0, 2, 3]
    }
}

pub fn unit_faces(size: f32) -> [CubeFace; 6] {
    let h = size / 2.0;
    let face = |normal: Vec3, corners: [Vec3; 4]| CubeFace { normal, corners };
    [
        face(
            vec3(0.0, 0.0, 1.0),
            [vec3(-h, -h, h), vec3(h, -h, h), vec3(h, h, h), vec3(-h, h, h)],
        ),
        face(
            vec3(0.0, 0.0, -1.0),
            [vec3(h, -h, -h), vec3(-h, -h, -h), vec3(-h, h, -h), vec3(h, h, -h)],
        ),
        face(
            vec3(1.0, 0.0, 0.0),
            [vec3(h, -h, h), vec3(h, -h, -h), vec3(h, h, -h), vec3(h, h, h)],
        ),
        face(
            vec3(-1.0, 0.0, 0.0),
            [vec3(-h, -h, -h), vec3(-h, -h, h), vec3(-h, h, h), vec3(-h, h, -h)],
        ),
        face(
            vec3(0.0, 1.0, 0.0),
            [vec3(-h, h, h), vec3(h, h, h), vec3(h, h, -h), vec3(-h, h, -h)],
        ),
        face(
            vec3(0.0, -1.0, 0.0),
            [vec3(-h, -h, -h), vec3(h, -h, -h), vec3(h, -h, h), vec3(-h, -h, h)],
        ),
    ]
}

fn rotate_x(v: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    vec3(v.x, v.y * cos - v.z * sin, v.y * sin + v.z * cos)
}

fn rotate_y(v: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    vec3(v.x * cos + v.z * sin, v.y, -v.x * sin + v.z * cos)
}

/// Applies the Y tilt first, then X.
pub fn tilt(v: Vec3, tilt: Vec2) -> Vec3 {
    rotate_x(rotate_y(v, tilt.y), tilt.x)
}

/// World-space faces of `cell` for a cube of edge `size`.
pub fn cell_faces(cell: &Cell, size: f32) -> [CubeFace; 6] {
    let mut faces = unit_faces(size);
    for face in faces.iter_mut() {
        face.normal = tilt(face.normal, cell.rotation);
        for corner in face.corners.iter_mut() {
            *corner = tilt(*corner * cell.scale, cell.rotation) + cell.position;
        }
    }
    faces
}

// one directional light plus ambient
#[derive(Debug, Clone, Copy)]
pub struct Lighting {
    pub direction: Vec3,
    pub intensity: f32,
    pub ambient: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            direction: vec3(1.0, 1.0, 2.0).normalize(),
            intensity: 1.0,
            ambient: 0x66 as f32 / 255.0,
        }
    }
}

impl Lighting {
    pub fn shade(&self, normal: Vec3) -> f32 {
        let diffuse = normal.normalize().dot(self.direction).max(0.0) * self.intensity;
        (self.ambient + diffuse).min(1.0)
    }
}
