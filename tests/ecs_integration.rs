//! ECS integration tests for the camera systems, resources and observers.
//!
//! Each test builds a small `World` by hand and runs only the systems under
//! test, the way a host would wire them into its own schedule.

use bevy_ecs::prelude::*;

use aberredcamera::camera::{Camera2D, DirtyLevel};
use aberredcamera::components::inview::InView;
use aberredcamera::components::mapposition::MapPosition;
use aberredcamera::components::parallaxlayer::ParallaxLayer;
use aberredcamera::components::pointercontrolled::PointerControlled;
use aberredcamera::components::screenposition::ScreenPosition;
use aberredcamera::events::viewportresized::{ViewportResizedEvent, viewport_resized_observer};
use aberredcamera::math::Vec2;
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

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(viewport: (i32, i32)) -> World {
    let mut world = World::new();
    world.insert_resource(ViewportSize {
        w: viewport.0,
        h: viewport.1,
    });
    world.insert_resource(Camera2DRes(Camera2D::new(viewport)));
    world.insert_resource(PointerInput::default());
    world.insert_resource(PointerWorldPosition::default());
    world
}

fn camera(world: &mut World) -> Mut<'_, Camera2DRes> {
    world.resource_mut::<Camera2DRes>()
}

// ==================== Viewport resize observer ====================

#[test]
fn resize_event_updates_viewport_and_camera() {
    let mut world = make_world((800, 600));
    world.add_observer(viewport_resized_observer);
    camera(&mut world).0.resolve();

    world.trigger(ViewportResizedEvent {
        width: 1024,
        height: 768,
    });

    assert_eq!(
        *world.resource::<ViewportSize>(),
        ViewportSize { w: 1024, h: 768 }
    );
    let mut cam = camera(&mut world);
    assert_eq!(cam.0.viewport_resolution(), (1024, 768));
    // Nothing is recomputed until the next read
    assert_eq!(cam.0.dirty_level(), DirtyLevel::Scale);

    let center = cam.0.world_to_screen(Vec2::ZERO);
    assert!(approx_eq(center.x, 512.0) && approx_eq(center.y, 384.0));
}

#[test]
fn resize_observer_without_camera_is_harmless() {
    let mut world = World::new();
    world.insert_resource(ViewportSize { w: 320, h: 240 });
    world.add_observer(viewport_resized_observer);

    world.trigger(ViewportResizedEvent {
        width: 640,
        height: 480,
    });

    assert_eq!(
        *world.resource::<ViewportSize>(),
        ViewportSize { w: 640, h: 480 }
    );
}

// ==================== Pointer ====================

fn tick_pointer(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((update_pointer_world_position, pointer_controller).chain());
    schedule.run(world);
}

#[test]
fn pointer_without_input_stays_unset() {
    let mut world = make_world((800, 600));
    tick_pointer(&mut world);

    assert!(world.resource::<PointerWorldPosition>().0.is_none());
    assert!(camera(&mut world).0.pointer_world_position().is_none());
}

#[test]
fn pointer_world_position_follows_camera() {
    let mut world = make_world((800, 600));
    camera(&mut world).0.set_position(Vec2::new(50.0, 0.0));
    world.resource_mut::<PointerInput>().push(500.0, 300.0);

    tick_pointer(&mut world);

    let p = world
        .resource::<PointerWorldPosition>()
        .0
        .expect("pointer was pushed");
    assert!(approx_eq(p.x, 150.0) && approx_eq(p.y, 0.0));
    assert_eq!(camera(&mut world).0.pointer_world_position(), Some(p));
}

#[test]
fn pointer_controller_respects_axes() {
    let mut world = make_world((800, 600));
    let both = world
        .spawn((PointerControlled::default(), MapPosition::new(0.0, 7.0)))
        .id();
    let x_only = world
        .spawn((PointerControlled::new(true, false), MapPosition::new(0.0, 7.0)))
        .id();
    world.resource_mut::<PointerInput>().push(500.0, 250.0);

    tick_pointer(&mut world);

    let both = world.get::<MapPosition>(both).unwrap().pos;
    assert!(approx_eq(both.x, 100.0) && approx_eq(both.y, -50.0));
    let x_only = world.get::<MapPosition>(x_only).unwrap().pos;
    assert!(approx_eq(x_only.x, 100.0) && approx_eq(x_only.y, 7.0));
}

// ==================== Projection ====================

fn tick_projection(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(screen_projection_system);
    schedule.run(world);
}

#[test]
fn projection_uses_layer_depth() {
    let mut world = make_world((800, 600));
    let ground = world
        .spawn((MapPosition::new(10.0, 0.0), ScreenPosition::default()))
        .id();
    let far = world
        .spawn((
            MapPosition::new(10.0, 0.0),
            ParallaxLayer::new(-1.0),
            ScreenPosition::default(),
        ))
        .id();
    let far_twin = world
        .spawn((
            MapPosition::new(-10.0, 20.0),
            ParallaxLayer::new(-1.0),
            ScreenPosition::default(),
        ))
        .id();

    tick_projection(&mut world);

    let ground = *world.get::<ScreenPosition>(ground).unwrap();
    assert!(approx_eq(ground.pos.x, 410.0) && approx_eq(ground.pos.y, 300.0));
    assert!(approx_eq(ground.zoom, 1.0));

    // Camera at depth 1 sees z = -1 at half size
    let far = *world.get::<ScreenPosition>(far).unwrap();
    assert!(approx_eq(far.pos.x, 405.0) && approx_eq(far.pos.y, 300.0));
    assert!(approx_eq(far.zoom, 0.5));

    let far_twin = *world.get::<ScreenPosition>(far_twin).unwrap();
    assert!(approx_eq(far_twin.pos.x, 395.0) && approx_eq(far_twin.pos.y, 310.0));
}

#[test]
fn projection_matches_camera_conversion() {
    let mut world = make_world((1280, 720));
    {
        let mut cam = camera(&mut world);
        cam.0.set_position(Vec2::new(-35.0, 80.0));
        cam.0.set_angle(0.7);
        cam.0.set_zoom(1.5).unwrap();
        cam.0.set_virtual_resolution(640, 360);
    }
    let e = world
        .spawn((MapPosition::new(12.0, -4.0), ScreenPosition::default()))
        .id();

    tick_projection(&mut world);

    let expected = camera(&mut world).0.world_to_screen(Vec2::new(12.0, -4.0));
    let got = world.get::<ScreenPosition>(e).unwrap().pos;
    assert!(approx_eq(got.x, expected.x) && approx_eq(got.y, expected.y));
}

// ==================== Culling ====================

fn tick_culling(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(culling_system);
    schedule.run(world);
}

#[test]
fn culling_marks_entities_inside_bounds() {
    let mut world = make_world((800, 600));
    let inside = world.spawn(MapPosition::new(100.0, 100.0)).id();
    let outside = world.spawn(MapPosition::new(600.0, 0.0)).id();
    // Half-size layer covers twice the area
    let far = world
        .spawn((MapPosition::new(600.0, 0.0), ParallaxLayer::new(-1.0)))
        .id();

    tick_culling(&mut world);

    assert!(world.get::<InView>(inside).is_some());
    assert!(world.get::<InView>(outside).is_none());
    assert!(world.get::<InView>(far).is_some());
}

#[test]
fn culling_removes_marker_when_camera_moves_away() {
    let mut world = make_world((800, 600));
    let e = world.spawn(MapPosition::new(0.0, 0.0)).id();

    tick_culling(&mut world);
    assert!(world.get::<InView>(e).is_some());

    camera(&mut world).0.move_by(Vec2::new(2000.0, 0.0));
    tick_culling(&mut world);
    assert!(world.get::<InView>(e).is_none());
}

#[test]
fn culling_hides_layers_the_camera_cannot_see() {
    let mut world = make_world((800, 600));
    // Coincident with the camera: zoom collapses to 0
    let coincident = world
        .spawn((MapPosition::new(0.0, 0.0), ParallaxLayer::new(1.0)))
        .id();
    // Magnified 20x, past the visible range
    let too_close = world
        .spawn((MapPosition::new(0.0, 0.0), ParallaxLayer::new(0.95)))
        .id();
    // In front of the camera: mirrored
    let behind_camera = world
        .spawn((MapPosition::new(0.0, 0.0), ParallaxLayer::new(2.0)))
        .id();

    tick_culling(&mut world);

    assert!(world.get::<InView>(coincident).is_none());
    assert!(world.get::<InView>(too_close).is_none());
    assert!(world.get::<InView>(behind_camera).is_none());
}

// ==================== Camera config ====================

#[test]
fn config_is_applied_on_insert_only() {
    let mut world = make_world((800, 600));
    let mut config = CameraConfig::new();
    config.position_x = 25.0;
    config.zoom_x = 2.0;
    config.zoom_y = 2.0;
    config.virtual_width = 400;
    config.virtual_height = 300;
    config.layers.insert("far".to_string(), -3.0);
    world.insert_resource(config);
    world.insert_resource(ParallaxLayers::default());

    let mut schedule = Schedule::default();
    schedule.add_systems(apply_camera_config_changes);
    schedule.run(&mut world);

    {
        let mut cam = camera(&mut world);
        assert_eq!(cam.0.scale(), Vec2::splat(2.0));
        assert!(approx_eq(cam.0.position().x, 25.0));
        assert_eq!(cam.0.virtual_resolution(), (400, 300));
        assert!(approx_eq(cam.0.virtual_scale(), 2.0));
    }
    assert_eq!(world.resource::<ParallaxLayers>().depth("far"), Some(-3.0));

    // Unchanged config must not clobber runtime edits
    camera(&mut world).0.set_position(Vec2::new(99.0, 0.0));
    schedule.run(&mut world);
    assert!(approx_eq(camera(&mut world).0.position().x, 99.0));
}

#[test]
fn invalid_config_zoom_leaves_camera_untouched() {
    let mut world = make_world((800, 600));
    world.insert_resource(CameraConfig::new());
    world.insert_resource(ParallaxLayers::default());

    let mut schedule = Schedule::default();
    schedule.add_systems(apply_camera_config_changes);
    schedule.run(&mut world);

    {
        let mut config = world.resource_mut::<CameraConfig>();
        config.zoom_x = 0.0;
        config.position_x = 500.0;
        config.layers.insert("near".to_string(), 0.5);
    }
    schedule.run(&mut world);

    let cam = &world.resource::<Camera2DRes>().0;
    assert_eq!(cam.scale(), Vec2::ONE);
    assert!(approx_eq(cam.position().x, 0.0));
    // Layers do not depend on the camera and are still replaced
    assert_eq!(world.resource::<ParallaxLayers>().depth("near"), Some(0.5));
}
