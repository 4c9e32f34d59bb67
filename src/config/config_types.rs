// src/config/config_types.rs
//
// Config types for the app

use crate::animation::EasingType;
use crate::models::DEFAULT_THRESHOLD;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct PathConfig {
    pub image_directory: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RenderConfig {
    pub pixels_per_unit: f32,
    pub camera_distance: f32,
    pub background: [f32; 3],
}

#[derive(Debug, Deserialize, Clone)]
pub struct OscConfig {
    pub rx_port: u16,
}

/************************* Mosaic Configs ********************/
#[derive(Debug, Deserialize, Clone)]
pub struct MosaicConfig {
    pub grid_size: u32,   // cells across; height follows the mask's aspect
    pub spacing: f32,     // world units between cell centres
    pub cell_size: f32,   // cube edge length
    #[serde(default = "default_threshold")]
    pub threshold: f32,   // max brightness that still produces a cell
    pub default_id: String,
}

fn default_threshold() -> f32 {
    DEFAULT_THRESHOLD
}

#[derive(Debug, Deserialize, Clone)]
pub struct JitterConfig {
    pub depth: f32,
    pub tilt: f32,
    pub lightness: f32,
}

/************************* Animation Configs ********************/
#[derive(Debug, Deserialize, Clone)]
pub struct AnimationConfig {
    pub duration: f32,
    pub stagger: f32,
    pub hidden_depth: f32,
    #[serde(default = "default_reveal_easing")]
    pub reveal_easing: EasingType,
    #[serde(default = "default_hide_easing")]
    pub hide_easing: EasingType,
}

fn default_reveal_easing() -> EasingType {
    EasingType::Power3Out
}

fn default_hide_easing() -> EasingType {
    EasingType::Power3InOut
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: 1.0,
            stagger: 0.001,
            hidden_depth: 5.0,
            reveal_easing: default_reveal_easing(),
            hide_easing: default_hide_easing(),
        }
    }
}
