//! Aberred Camera headless driver.
//!
//! Loads a camera configuration, builds a `bevy_ecs` world with the camera
//! resources and systems, runs a number of frames and reports the resulting
//! transforms, bounds and projected layer anchors.
//!
//! # Running
//!
//! ```sh
//! cargo run -- --config camera.ini --viewport 1920x1080 --pointer 960 540 --json
//! ```

use aberredcamera::camera::Camera2D;
use aberredcamera::camera::parallax::GROUND_Z;
use aberredcamera::components::inview::InView;
use aberredcamera::components::mapposition::MapPosition;
use aberredcamera::components::parallaxlayer::ParallaxLayer;
use aberredcamera::components::pointercontrolled::PointerControlled;
use aberredcamera::components::screenposition::ScreenPosition;
use aberredcamera::events::viewportresized::{ViewportResizedEvent, viewport_resized_observer};
use aberredcamera::math::{IntRect, Mat4, Vec2};
use aberredcamera::resources::backbuffersize::BackBufferSize;
use aberredcamera::resources::camera2d::Camera2DRes;
use aberredcamera::resources::cameraconfig::CameraConfig;
use aberredcamera::resources::parallaxlayers::ParallaxLayers;
use aberredcamera::resources::pointer::{PointerInput, PointerWorldPosition};
use aberredcamera::resources::viewportsize::ViewportSize;
use aberredcamera::systems::cameraconfig::apply_camera_config_changes;
use aberredcamera::systems::culling::culling_system;
use aberredcamera::systems::pointer::update_pointer_world_position;
use aberredcamera::systems::pointercontroller::pointer_controller;
use aberredcamera::systems::projection::screen_projection_system;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{info, warn};
use serde::Serialize;
use std::path::PathBuf;

/// Aberred Camera 2D
#[derive(Parser)]
#[command(
    version,
    about = "Headless driver for the Aberred 2D camera: runs a few frames and reports transforms."
)]
struct Cli {
    /// Camera configuration file (INI).
    #[arg(long, value_name = "PATH", default_value = "./camera.ini")]
    config: PathBuf,

    /// Viewport size override, e.g. 1920x1080.
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    viewport: Option<(i32, i32)>,

    /// Resize the viewport to this size after the first frame, e.g. 1280x720.
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    resize: Option<(i32, i32)>,

    /// Raw pointer position in viewport pixels.
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    pointer: Option<Vec<f32>>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Camera rotation per frame, in degrees.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    spin: f32,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Write the effective configuration to --config and exit.
    #[arg(long)]
    save_config: bool,
}

fn parse_size(s: &str) -> Result<(i32, i32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w = w.trim().parse::<i32>().map_err(|e| format!("bad width: {e}"))?;
    let h = h.trim().parse::<i32>().map_err(|e| format!("bad height: {e}"))?;
    Ok((w, h))
}

#[derive(Serialize)]
struct LayerReport {
    name: String,
    z: f32,
    visible: bool,
    zoom: f32,
    screen: Vec2,
    in_view: bool,
}

#[derive(Serialize)]
struct Report {
    viewport: (i32, i32),
    virtual_resolution: (i32, i32),
    virtual_scale: f32,
    origin: Vec2,
    view: Mat4,
    inverse_view: Mat4,
    projection: Mat4,
    bounds: IntRect,
    world_bounds: IntRect,
    letterbox: IntRect,
    screen_to_world_scale: f32,
    world_to_screen_scale: f32,
    pointer_world: Option<Vec2>,
    anchor: Vec2,
    layers: Vec<LayerReport>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = CameraConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    // Early-exit: write the config and quit
    if cli.save_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Camera config written to {}", cli.config.display());
        return;
    }

    let (vw, vh) = cli.viewport.unwrap_or_else(|| config.viewport_size());
    let viewport = ViewportSize { w: vw, h: vh };

    let camera = match Camera2D::from_pose(&config.pose(), &viewport) {
        Ok(camera) => camera,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    info!("Hello, world! This is the Aberred Camera!");

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(viewport);
    world.insert_resource(BackBufferSize { w: vw, h: vh });
    world.insert_resource(Camera2DRes(camera));
    world.insert_resource(PointerInput::default());
    world.insert_resource(PointerWorldPosition::default());
    world.insert_resource(ParallaxLayers::from_map(config.layers.clone()));
    world.insert_resource(config);

    world.add_observer(viewport_resized_observer);
    world.flush();

    // One anchor entity per named layer, plus the ground
    let layers = world.resource::<ParallaxLayers>();
    let mut named: Vec<(String, f32)> = layers
        .sorted()
        .into_iter()
        .map(|(name, z)| (name.to_string(), z))
        .collect();
    if layers.depth("ground").is_none() {
        named.push(("ground".to_string(), GROUND_Z));
    }
    let mut layer_entities: Vec<(String, f32, Entity)> = Vec::new();
    for (name, z) in named {
        let entity = world
            .spawn((
                MapPosition::new(0.0, 0.0),
                ParallaxLayer::new(z),
                ScreenPosition::default(),
            ))
            .id();
        layer_entities.push((name, z, entity));
    }
    let anchor = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            PointerControlled::default(),
            ScreenPosition::default(),
        ))
        .id();

    let mut update = Schedule::default();
    update.add_systems(apply_camera_config_changes);
    update.add_systems(update_pointer_world_position.after(apply_camera_config_changes));
    update.add_systems(pointer_controller.after(update_pointer_world_position));
    update.add_systems(screen_projection_system.after(pointer_controller));
    update.add_systems(culling_system.after(screen_projection_system));

    // --------------- Main loop ---------------
    let pointer = cli.pointer.as_deref().and_then(|p| match p {
        [x, y] => Some(Vec2::new(*x, *y)),
        _ => None,
    });
    let spin = cli.spin.to_radians();

    for frame in 0..cli.frames.max(1) {
        if let Some(p) = pointer {
            world.resource_mut::<PointerInput>().push(p.x, p.y);
        }

        update.run(&mut world);

        // After the update so the first frame's config application does not
        // overwrite it
        if spin != 0.0 {
            world.resource_mut::<Camera2DRes>().0.rotate_by(spin);
        }

        if frame == 0 {
            if let Some((w, h)) = cli.resize {
                world.resource_mut::<BackBufferSize>().w = w;
                world.resource_mut::<BackBufferSize>().h = h;
                world.trigger(ViewportResizedEvent {
                    width: w,
                    height: h,
                });
            }
        }

        world.clear_trackers();
    }

    // --------------- Report ---------------
    let back_buffer = *world.resource::<BackBufferSize>();
    let mut all_depths = world.resource::<ParallaxLayers>().sorted_depths();
    all_depths.push(GROUND_Z);

    let layers: Vec<LayerReport> = layer_entities
        .iter()
        .map(|(name, z, entity)| {
            let screen = world.get::<ScreenPosition>(*entity).copied().unwrap_or_default();
            LayerReport {
                name: name.clone(),
                z: *z,
                visible: world.resource::<Camera2DRes>().0.is_visible(*z),
                zoom: screen.zoom,
                screen: screen.pos,
                in_view: world.get::<InView>(*entity).is_some(),
            }
        })
        .collect();
    let anchor_pos = world
        .get::<MapPosition>(anchor)
        .map(|p| p.pos)
        .unwrap_or_default();

    let mut camera_res = world.resource_mut::<Camera2DRes>();
    let camera = &mut camera_res.0;
    let report = Report {
        viewport: camera.viewport_resolution(),
        virtual_resolution: camera.virtual_resolution(),
        virtual_scale: camera.virtual_scale(),
        origin: camera.origin(),
        view: camera.view_matrix(),
        inverse_view: camera.inverse_view_matrix(),
        projection: camera.projection_matrix(),
        bounds: camera.bounds(),
        world_bounds: camera.world_bounds(&all_depths),
        letterbox: camera.letterbox_for(&back_buffer),
        screen_to_world_scale: camera.screen_to_world_scale(0.0),
        world_to_screen_scale: camera.world_to_screen_scale(0.0),
        pointer_world: camera.pointer_world_position(),
        anchor: anchor_pos,
        layers,
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error serializing report: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!(
        "viewport {}x{}, virtual {}x{} (scale {}), origin ({}, {})",
        report.viewport.0,
        report.viewport.1,
        report.virtual_resolution.0,
        report.virtual_resolution.1,
        report.virtual_scale,
        report.origin.x,
        report.origin.y
    );
    println!("view        {:?}", report.view.to_cols_array());
    println!("inverse     {:?}", report.inverse_view.to_cols_array());
    println!("projection  {:?}", report.projection.to_cols_array());
    println!("bounds      {:?}", report.bounds);
    println!("all layers  {:?}", report.world_bounds);
    println!("letterbox   {:?}", report.letterbox);
    println!(
        "zoom        screen->world {} / world->screen {}",
        report.screen_to_world_scale, report.world_to_screen_scale
    );
    if let Some(p) = report.pointer_world {
        println!("pointer     ({}, {}) anchor ({}, {})", p.x, p.y, report.anchor.x, report.anchor.y);
    }
    for layer in &report.layers {
        println!(
            "layer {:<12} z={:<6} zoom={:<8} screen=({}, {}) visible={} in_view={}",
            layer.name, layer.z, layer.zoom, layer.screen.x, layer.screen.y, layer.visible, layer.in_view
        );
    }
}
