//! Headless Bevy integration tests.
//!
//! These verify resources and systems work correctly without a GPU.

use std::thread::sleep;
use std::time::Duration;

use bevy::input::mouse::{AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;

use earthmoon::camera::{camera_zoom, MainCamera, OrbitCamera, PointerCapture, DEFAULT_DISTANCE};
use earthmoon::kinematics::{place_satellite, spin_bodies, BodySpin};
use earthmoon::picking::HoverState;
use earthmoon::render::{BodyRegistry, CelestialBody};
use earthmoon::telemetry::{publish_telemetry, TelemetrySnapshot};
use earthmoon::time::TimePlugin;
use earthmoon::types::{BodyKind, SimulationTime, MOON_RADIUS};

fn create_minimal_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app
}

fn spawn_moon(app: &mut App) -> Entity {
    app.world_mut()
        .spawn((
            CelestialBody {
                kind: BodyKind::Moon,
                radius: MOON_RADIUS,
            },
            BodySpin::new(0.6),
            Transform::default(),
        ))
        .id()
}

#[test]
fn satellite_follows_simulation_time() {
    let mut app = create_minimal_app();
    app.insert_resource(SimulationTime::default());
    app.add_systems(Update, place_satellite);
    let moon = spawn_moon(&mut app);

    app.update();
    let translation = app.world().get::<Transform>(moon).unwrap().translation;
    assert_eq!(translation, Vec3::new(2.0, 0.0, 0.0));

    // A quarter period later (t * phi = pi/2) the Moon sits on +Z.
    app.world_mut().resource_mut::<SimulationTime>().elapsed = std::f64::consts::PI;
    app.update();
    let translation = app.world().get::<Transform>(moon).unwrap().translation;
    assert!(translation.x.abs() < 1e-6);
    assert!((translation.z - 2.0).abs() < 1e-6);
}

#[test]
fn time_plugin_advances_and_respects_pause() {
    let mut app = create_minimal_app();
    app.init_resource::<ButtonInput<KeyCode>>();
    app.insert_resource(SimulationTime::default());
    app.add_plugins(TimePlugin);

    // The first update initializes the clock; the second has a real delta.
    app.update();
    sleep(Duration::from_millis(5));
    app.update();
    let elapsed = app.world().resource::<SimulationTime>().elapsed;
    assert!(elapsed > 0.0);

    app.world_mut().resource_mut::<SimulationTime>().paused = true;
    sleep(Duration::from_millis(5));
    app.update();
    let sim_time = app.world().resource::<SimulationTime>();
    assert_eq!(sim_time.elapsed, elapsed);
    assert_eq!(sim_time.delta, 0.0);
}

#[test]
fn scroll_zoom_yields_to_ui_pointer_capture() {
    let mut app = create_minimal_app();
    app.insert_resource(PointerCapture { captured: true });
    app.insert_resource(AccumulatedMouseScroll {
        unit: MouseScrollUnit::Line,
        delta: Vec2::new(0.0, 1.0),
    });
    app.add_systems(Update, camera_zoom);
    let camera = app
        .world_mut()
        .spawn((OrbitCamera::default(), MainCamera))
        .id();

    // While the UI owns the pointer, scrolling must not zoom.
    app.update();
    let orbit = app.world().get::<OrbitCamera>(camera).unwrap();
    assert_eq!(orbit.target_distance, DEFAULT_DISTANCE);

    // Once released, the same scroll zooms in.
    app.world_mut().resource_mut::<PointerCapture>().captured = false;
    app.update();
    let orbit = app.world().get::<OrbitCamera>(camera).unwrap();
    assert!(orbit.target_distance < DEFAULT_DISTANCE);
}

#[test]
fn paused_time_freezes_spin() {
    let mut app = create_minimal_app();
    app.insert_resource(SimulationTime::default());
    app.add_systems(Update, spin_bodies);
    let moon = spawn_moon(&mut app);

    // Paused: delta stays zero, the accumulator must not move.
    app.update();
    let angle = app.world().get::<BodySpin>(moon).unwrap().angle;
    assert_eq!(angle, 0.0);

    // One tick worth of time moves the accumulator by rate * delta.
    app.world_mut().resource_mut::<SimulationTime>().delta = 0.1;
    app.update();
    let angle = app.world().get::<BodySpin>(moon).unwrap().angle;
    assert!((angle - 0.06).abs() < 1e-12);
}

#[test]
fn telemetry_republishes_every_tick() {
    let mut app = create_minimal_app();
    app.insert_resource(SimulationTime::default());
    app.init_resource::<TelemetrySnapshot>();
    app.add_systems(Update, (place_satellite, publish_telemetry).chain());
    spawn_moon(&mut app);

    app.update();
    let snapshot = app.world().resource::<TelemetrySnapshot>();
    assert_eq!(snapshot.moon.position, "(2.00, 0.00, 0.00)");
    assert_eq!(snapshot.moon.rotation, "0.00");

    // Move the clock: the previous snapshot is replaced, not appended to.
    app.world_mut().resource_mut::<SimulationTime>().elapsed = std::f64::consts::PI;
    app.update();
    let snapshot = app.world().resource::<TelemetrySnapshot>();
    assert_eq!(snapshot.moon.position, "(0.00, 0.00, 2.00)");
}

#[test]
fn registry_maps_each_kind_to_its_entity() {
    let mut app = create_minimal_app();
    let earth = app.world_mut().spawn_empty().id();
    let moon = app.world_mut().spawn_empty().id();
    app.insert_resource(BodyRegistry::new(earth, moon));

    let registry = app.world().resource::<BodyRegistry>();
    assert_eq!(registry.get(BodyKind::Earth), earth);
    assert_eq!(registry.get(BodyKind::Moon), moon);
    assert_ne!(earth, moon);
}

#[test]
fn latest_hover_write_wins_within_a_frame() {
    let mut app = create_minimal_app();
    app.init_resource::<HoverState>();

    // Two pointer events land between renders; the reader must only ever
    // observe the second.
    {
        let mut hover = app.world_mut().resource_mut::<HoverState>();
        *hover = HoverState::shown("Earth", 10.0, 10.0);
        *hover = HoverState::shown("Moon", 20.0, 30.0);
    }

    app.update();
    let hover = app.world().resource::<HoverState>();
    assert_eq!(hover, &HoverState::shown("Moon", 20.0, 30.0));
}
