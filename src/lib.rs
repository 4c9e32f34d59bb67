pub mod animation;
pub mod app;
pub mod config;
pub mod controllers;
pub mod models;
pub mod render;
pub mod services;
pub mod views;
