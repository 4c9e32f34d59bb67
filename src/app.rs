// src/app.rs
//
// MosaicApp holds everything the window loop mutates that doesn't touch the
// GPU: the built grids, the build countdown and, once every grid is in,
// the transition controller. Selections are ignored until then.

use crate::{
    animation::{SelectOutcome, TransitionController, TransitionPhase},
    config::{AnimationConfig, Config},
    controllers::MosaicCommand,
    models::{MosaicGrid, MosaicSet},
    services::{BuildTracker, MosaicError},
};

pub struct MosaicApp {
    pub grids: MosaicSet,
    ids: Vec<String>,
    default_id: String,
    animation: AnimationConfig,
    tracker: BuildTracker,
    controller: Option<TransitionController>,
}

impl MosaicApp {
    pub fn new(config: &Config) -> Self {
        Self::with_ids(
            config.mosaic_ids(),
            &config.mosaic.default_id,
            config.animation.clone(),
        )
    }

    pub fn with_ids(ids: Vec<String>, default_id: &str, animation: AnimationConfig) -> Self {
        let tracker = BuildTracker::new(ids.len());
        Self {
            grids: MosaicSet::new(),
            ids,
            default_id: default_id.to_string(),
            animation,
            tracker,
            controller: None,
        }
    }

    /// Takes a finished grid. Returns true when this was the last one and
    /// interaction has just been enabled.
    pub fn on_grid_built(&mut self, grid: MosaicGrid) -> bool {
        self.grids.insert(grid);
        if !self.tracker.complete_one() {
            log::debug!(
                "{} of {} mosaic(s) built",
                self.grids.len(),
                self.ids.len()
            );
            return false;
        }

        let mut controller = TransitionController::new(&self.default_id, &self.animation);
        controller.start(&mut self.grids);
        self.controller = Some(controller);
        log::info!("All mosaics built; showing '{}'", self.default_id);
        true
    }

    pub fn on_grid_failed(&mut self, error: &MosaicError) {
        // the countdown is not advanced, so interaction stays disabled
        log::error!("{}", error);
        log::error!(
            "Mosaic selection stays disabled: {} of {} mosaic(s) never finished",
            self.tracker.remaining(),
            self.ids.len()
        );
    }

    pub fn is_ready(&self) -> bool {
        self.controller.is_some()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn current(&self) -> Option<&str> {
        self.controller.as_ref().map(|c| c.current())
    }

    pub fn phase(&self) -> Option<TransitionPhase> {
        self.controller.as_ref().map(|c| c.phase())
    }

    pub fn is_animating(&self) -> bool {
        self.controller.as_ref().is_some_and(|c| c.is_animating())
    }

    /// None while grids are still loading.
    pub fn select(&mut self, id: &str) -> Option<SelectOutcome> {
        let controller = self.controller.as_mut()?;
        Some(controller.select(id, &self.grids))
    }

    pub fn select_index(&mut self, index: usize) -> Option<SelectOutcome> {
        let id = self.ids.get(index)?.clone();
        self.select(&id)
    }

    pub fn apply(&mut self, command: MosaicCommand) -> Option<SelectOutcome> {
        match command {
            MosaicCommand::Select { id } => self.select(&id),
            MosaicCommand::SelectIndex { index } => self.select_index(index),
        }
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(controller) = self.controller.as_mut() {
            controller.update(dt, &mut self.grids);
        }
    }
}
