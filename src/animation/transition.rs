// src/animation/transition.rs
//
// The Mosaic Transition Controller
//
// Owns the selection state (current / old / animating) and the running
// timelines. A transition reveals the newly selected grid while hiding the
// previous one; selections arriving while a transition runs are dropped.

use super::timeline::{Timeline, TimelineEngine};
use crate::{config::AnimationConfig, models::MosaicSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    Transitioning { incoming: String, outgoing: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    Started,
    Busy,
    AlreadyCurrent,
    UnknownGrid,
}

struct ActiveTimeline {
    timeline: Timeline,
    // gating timelines hold the animating flag until they finish
    gating: bool,
}

pub struct TransitionController {
    engine: TimelineEngine,
    current: String,
    old: Option<String>,
    animating: bool,
    timelines: Vec<ActiveTimeline>,
}

impl TransitionController {
    pub fn new(default_id: &str, config: &AnimationConfig) -> Self {
        Self {
            engine: TimelineEngine {
                duration: config.duration,
                stagger: config.stagger,
                hidden_depth: config.hidden_depth,
                reveal_easing: config.reveal_easing,
                hide_easing: config.hide_easing,
            },
            current: default_id.to_string(),
            old: None,
            animating: false,
            timelines: Vec::new(),
        }
    }

    /// Called once every grid is built: hides everything but the default
    /// grid and starts revealing it.
    pub fn start(&mut self, grids: &mut MosaicSet) {
        for grid in grids.iter_mut() {
            if grid.id != self.current {
                grid.set_scale(0.0);
            }
        }

        match grids.get(&self.current) {
            Some(grid) => {
                let timeline = self.engine.generate_reveal(grid);
                self.schedule(timeline, false);
            }
            None => log::warn!("Default mosaic '{}' was not built", self.current),
        }
    }

    pub fn select(&mut self, id: &str, grids: &MosaicSet) -> SelectOutcome {
        if self.animating {
            return SelectOutcome::Busy;
        }
        self.animating = true;

        let Some(incoming) = grids.get(id) else {
            log::debug!("Ignoring selection of unknown mosaic '{}'", id);
            self.animating = false;
            return SelectOutcome::UnknownGrid;
        };
        if id == self.current {
            self.animating = false;
            return SelectOutcome::AlreadyCurrent;
        }

        let previous = std::mem::replace(&mut self.current, id.to_string());
        let reveal = self.engine.generate_reveal(incoming);
        let hide = grids.get(&previous).map(|g| self.engine.generate_hide(g));
        self.old = Some(previous);

        log::info!(
            "Transition {} -> {}",
            self.old.as_deref().unwrap_or(""),
            self.current
        );

        self.schedule(reveal, true);
        if let Some(hide) = hide {
            self.schedule(hide, true);
        }
        SelectOutcome::Started
    }

    // replaces whatever is still running on the same grid
    fn schedule(&mut self, timeline: Timeline, gating: bool) {
        self.timelines
            .retain(|active| active.timeline.grid_id != timeline.grid_id);
        self.timelines.push(ActiveTimeline { timeline, gating });
    }

    pub fn update(&mut self, dt: f32, grids: &mut MosaicSet) {
        self.timelines
            .retain_mut(|active| match grids.get_mut(&active.timeline.grid_id) {
                Some(grid) => !active.timeline.update(dt, grid),
                None => false,
            });

        if self.animating && !self.timelines.iter().any(|active| active.gating) {
            self.animating = false;
            log::debug!("Transition to '{}' complete", self.current);
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn old(&self) -> Option<&str> {
        self.old.as_deref()
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn phase(&self) -> TransitionPhase {
        if !self.animating {
            return TransitionPhase::Idle;
        }
        TransitionPhase::Transitioning {
            incoming: self.current.clone(),
            outgoing: self.old.clone().unwrap_or_default(),
        }
    }
}
