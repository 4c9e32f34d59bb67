// src/animation/timeline.rs
//
// A Timeline is a batch of per-cell tweens scheduled against one grid.
// Each tween drives a cell's scale and z position from the values captured
// when the timeline was built towards its targets, after a start delay.

use super::easing::EasingType;
use crate::models::MosaicGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineRole {
    Reveal,
    Hide,
}

#[derive(Debug, Clone)]
pub struct CellTween {
    pub cell: usize,
    pub delay: f32,
    pub duration: f32,
    pub easing: EasingType,
    pub from_scale: f32,
    pub to_scale: f32,
    pub from_z: f32,
    pub to_z: f32,
}

impl CellTween {
    fn end_time(&self) -> f32 {
        self.delay + self.duration
    }

    // None until the tween has started
    fn progress(&self, elapsed: f32) -> Option<f32> {
        let local = elapsed - self.delay;
        if local < 0.0 {
            return None;
        }
        if self.duration <= 0.0 || local >= self.duration {
            return Some(1.0);
        }
        Some(local / self.duration)
    }
}

fn tween_value(from: f32, to: f32, progress: f32, easing: EasingType) -> f32 {
    if progress >= 1.0 {
        return to;
    }
    from + (to - from) * easing.apply(progress)
}

#[derive(Debug, Clone)]
pub struct Timeline {
    pub grid_id: String,
    pub role: TimelineRole,
    tweens: Vec<CellTween>,
    elapsed: f32,
    total_duration: f32,
    complete: bool,
}

impl Timeline {
    pub fn new(grid_id: &str, role: TimelineRole, tweens: Vec<CellTween>) -> Self {
        let total_duration = tweens.iter().map(|t| t.end_time()).fold(0.0, f32::max);
        Self {
            grid_id: grid_id.to_string(),
            role,
            tweens,
            elapsed: 0.0,
            total_duration,
            complete: false,
        }
    }

    /// Advances by `dt` seconds and writes the tweened values into `grid`.
    /// Returns true once every tween has landed on its target.
    pub fn update(&mut self, dt: f32, grid: &mut MosaicGrid) -> bool {
        if self.complete {
            return true;
        }
        self.elapsed += dt;

        for tween in &self.tweens {
            let Some(progress) = tween.progress(self.elapsed) else {
                continue;
            };
            if let Some(cell) = grid.cells.get_mut(tween.cell) {
                cell.scale = tween_value(tween.from_scale, tween.to_scale, progress, tween.easing);
                cell.position.z = tween_value(tween.from_z, tween.to_z, progress, tween.easing);
            }
        }

        if self.elapsed >= self.total_duration {
            self.complete = true;
        }
        self.complete
    }

    pub fn tween_count(&self) -> usize {
        self.tweens.len()
    }

    pub fn total_duration(&self) -> f32 {
        self.total_duration
    }
}

// Builds reveal and hide timelines with a shared duration and stagger
#[derive(Debug, Clone)]
pub struct TimelineEngine {
    pub duration: f32,
    pub stagger: f32,
    pub hidden_depth: f32,
    pub reveal_easing: EasingType,
    pub hide_easing: EasingType,
}

impl TimelineEngine {
    pub fn generate_reveal(&self, grid: &MosaicGrid) -> Timeline {
        let tweens = grid
            .cells
            .iter()
            .enumerate()
            .map(|(i, cell)| CellTween {
                cell: i,
                delay: i as f32 * self.stagger,
                duration: self.duration,
                easing: self.reveal_easing,
                from_scale: cell.scale,
                to_scale: 1.0,
                from_z: cell.position.z,
                to_z: cell.rest_depth,
            })
            .collect();
        Timeline::new(&grid.id, TimelineRole::Reveal, tweens)
    }

    pub fn generate_hide(&self, grid: &MosaicGrid) -> Timeline {
        let tweens = grid
            .cells
            .iter()
            .enumerate()
            .map(|(i, cell)| CellTween {
                cell: i,
                delay: i as f32 * self.stagger,
                duration: self.duration,
                easing: self.hide_easing,
                from_scale: cell.scale,
                to_scale: 0.0,
                from_z: cell.position.z,
                to_z: self.hidden_depth,
            })
            .collect();
        Timeline::new(&grid.id, TimelineRole::Hide, tweens)
    }
}
