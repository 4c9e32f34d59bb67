// src/render/projection.rs
//
// World space -> window space.
// The camera sits on +z looking at the origin; points closer to it are
// drawn larger.

use nannou::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct Projector {
    pub pixels_per_unit: f32,
    pub camera_distance: f32,
}

impl Default for Projector {
    fn default() -> Self {
        Self {
            pixels_per_unit: 26.0,
            camera_distance: 60.0,
        }
    }
}

impl Projector {
    pub fn perspective(&self, z: f32) -> f32 {
        // keep points behind the camera from flipping
        let depth = (self.camera_distance - z).max(0.01);
        self.camera_distance / depth
    }

    pub fn project(&self, point: Vec3) -> Point2 {
        let scale = self.perspective(point.z) * self.pixels_per_unit;
        pt2(point.x * scale, point.y * scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_at_origin_is_scaled_only() {
        let projector = Projector {
            pixels_per_unit: 10.0,
            camera_distance: 50.0,
        };
        let p = projector.project(vec3(1.0, -2.0, 0.0));
        assert!((p.x - 10.0).abs() < 1e-5);
        assert!((p.y + 20.0).abs() < 1e-5);
    }

    #[test]
    fn test_nearer_points_spread_out() {
        let projector = Projector::default();
        let far = projector.project(vec3(1.0, 1.0, -1.0));
        let near = projector.project(vec3(1.0, 1.0, 5.0));
        assert!(near.x > far.x);
        assert!(near.y > far.y);
    }

    #[test]
    fn test_behind_camera_stays_finite() {
        let projector = Projector::default();
        let p = projector.project(vec3(1.0, 1.0, 100.0));
        assert!(p.x.is_finite() && p.y.is_finite());
    }
}
