// src/views/mod.rs

pub mod button_bar;

pub use button_bar::ButtonBar;
