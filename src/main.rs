// src/main.rs
use nannou::prelude::*;
use std::collections::HashMap;
use std::time::Instant;

use mosaicvis::{
    animation::TransitionPhase,
    app::MosaicApp,
    config::Config,
    controllers::OscController,
    render::{MosaicRenderer, Projector},
    services::{AssetLoader, GridBuilder, LoadSettings},
    views::ButtonBar,
};

struct Model {
    // Core components:
    mosaic: MosaicApp,
    loader: AssetLoader,
    textures: HashMap<String, wgpu::Texture>, // (mosaic id : photo texture)

    // Comms components:
    osc_controller: Option<OscController>,

    // Rendering components:
    renderer: MosaicRenderer,
    buttons: ButtonBar,
    background: Rgb,

    // selection mirrored into the buttons and window title
    shown_selection: Option<String>,
    shown_title: String,
    last_update: Instant,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Create OSC controller; selection still works from mouse and keys without it
    let osc_controller = match OscController::new(config.osc.rx_port) {
        Ok(controller) => Some(controller),
        Err(e) => {
            log::warn!("OSC disabled: {}", e);
            None
        }
    };

    // Create window
    let window_id = app
        .new_window()
        .title("mosaicvis")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .resized(resized)
        .build()
        .unwrap();
    let window = app.window(window_id).unwrap();

    // Start loading every mosaic in the background
    let settings = LoadSettings {
        image_dir: config.resolve_image_dir(),
        grid_size: config.mosaic.grid_size,
        threshold: config.mosaic.threshold,
        builder: GridBuilder::from_config(&config.mosaic, &config.jitter),
    };
    let image_dir = settings.image_dir.clone();
    let loader = AssetLoader::spawn(&config.mosaics, settings);
    log::info!(
        "Loading {} mosaic(s) from {}",
        loader.expected(),
        image_dir.display()
    );

    let projector = Projector {
        pixels_per_unit: config.rendering.pixels_per_unit,
        camera_distance: config.rendering.camera_distance,
    };
    let [r, g, b] = config.rendering.background;

    Model {
        mosaic: MosaicApp::new(&config),
        loader,
        textures: HashMap::new(),

        osc_controller,

        renderer: MosaicRenderer::new(config.mosaic.cell_size, projector),
        buttons: ButtonBar::new(&config.mosaic_ids(), window.rect()),
        background: rgb(r, g, b),

        shown_selection: None,
        shown_title: String::new(),
        last_update: Instant::now(),
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let dt = (now - model.last_update).as_secs_f32();
    model.last_update = now;

    receive_built_mosaics(app, model);

    // Process OSC messages
    if let Some(osc_controller) = model.osc_controller.as_mut() {
        osc_controller.process_messages();
        for command in osc_controller.take_commands() {
            model.mosaic.apply(command);
        }
    }

    model.mosaic.update(dt);
    mirror_selection(app, model);
}

fn receive_built_mosaics(app: &App, model: &mut Model) {
    for result in model.loader.poll() {
        match result {
            Ok(loaded) => {
                if let Some(photo) = loaded.photo {
                    let texture = wgpu::Texture::from_image(app, &photo);
                    model.textures.insert(loaded.grid.id.clone(), texture);
                }
                model.mosaic.on_grid_built(loaded.grid);
            }
            Err(e) => model.mosaic.on_grid_failed(&e),
        }
    }
}

fn mirror_selection(app: &App, model: &mut Model) {
    let current = model.mosaic.current().map(str::to_string);
    if current != model.shown_selection {
        if let Some(id) = &current {
            model.buttons.set_active(id);
        }
        model.shown_selection = current;
    }

    let title = match model.mosaic.phase() {
        None => "mosaicvis [loading]".to_string(),
        Some(TransitionPhase::Idle) => {
            format!("mosaicvis [{}]", model.mosaic.current().unwrap_or_default())
        }
        Some(TransitionPhase::Transitioning { incoming, outgoing }) => {
            format!("mosaicvis [{} -> {}]", outgoing, incoming)
        }
    };
    if title != model.shown_title {
        app.main_window().set_title(&title);
        model.shown_title = title;
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    let index = match key {
        Key::Key1 => 0,
        Key::Key2 => 1,
        Key::Key3 => 2,
        Key::Key4 => 3,
        Key::Key5 => 4,
        Key::Key6 => 5,
        Key::Key7 => 6,
        Key::Key8 => 7,
        Key::Key9 => 8,
        _ => return,
    };
    model.mosaic.select_index(index);
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left || !model.mosaic.is_ready() {
        return;
    }
    if let Some(id) = model.buttons.hit(app.mouse.position()) {
        let id = id.to_string();
        model.mosaic.select(&id);
    }
}

fn resized(app: &App, model: &mut Model, _size: Vec2) {
    model.buttons.layout(app.window_rect());
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(model.background);

    for grid in model.mosaic.grids.iter() {
        let texture = model.textures.get(&grid.id);
        model.renderer.draw_grid(&draw, grid, texture);
    }

    // buttons only exist once every mosaic is built
    if model.mosaic.is_ready() {
        model.buttons.draw(&draw);
    }

    draw.to_frame(app, &frame).unwrap();
}
