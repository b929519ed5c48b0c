//! Per-frame kinematics: body spin and the Moon's closed-form orbit.
//!
//! The orbit is a periodic placement recomputed from elapsed time each tick,
//! not an integrator. Given the same `t` it always produces the same
//! position, which makes the motion restartable and drift-free. Spin angles
//! are unbounded accumulators advanced by an explicit delta-time.

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::render::bodies::CelestialBody;
use crate::types::{BodyKind, OrbitParams, SimulationTime, TickSet};

/// Plugin advancing body rotation and orbital position every tick.
pub struct KinematicsPlugin;

impl Plugin for KinematicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (spin_bodies, place_satellite).in_set(TickSet::Kinematics),
        );
    }
}

/// Rotation state for a body: a rad/s rate and an unbounded angle
/// accumulator.
///
/// The accumulator is the source of truth (telemetry reads it directly); the
/// `Transform` quaternion is derived from it each tick.
#[derive(Component, Clone, Copy, Debug)]
pub struct BodySpin {
    /// Angular rate around +Y, rad/s.
    pub rate: f64,
    /// Accumulated rotation angle in radians. Never wrapped.
    pub angle: f64,
}

impl BodySpin {
    pub fn new(rate: f64) -> Self {
        Self { rate, angle: 0.0 }
    }
}

/// Advance a spin angle by `dt` seconds.
///
/// Precondition: `dt` is finite and non-negative.
pub fn spin_step(angle: f64, rate: f64, dt: f64) -> f64 {
    debug_assert!(dt.is_finite() && dt >= 0.0, "invalid spin delta: {dt}");
    angle + rate * dt
}

/// Closed-form satellite position at simulation time `t`:
/// `(R cos(t*phi), 0, R sin(t*phi))`.
///
/// Precondition: `t` is finite and non-negative.
pub fn satellite_position(t: f64, orbit: OrbitParams) -> DVec3 {
    debug_assert!(t.is_finite() && t >= 0.0, "invalid simulation time: {t}");
    let phase = t * orbit.angular_freq;
    DVec3::new(orbit.radius * phase.cos(), 0.0, orbit.radius * phase.sin())
}

/// Advance every body's spin accumulator and apply it to the transform.
pub fn spin_bodies(mut bodies: Query<(&mut BodySpin, &mut Transform)>, time: Res<SimulationTime>) {
    for (mut spin, mut transform) in bodies.iter_mut() {
        spin.angle = spin_step(spin.angle, spin.rate, time.delta);
        transform.rotation = Quat::from_rotation_y(spin.angle as f32);
    }
}

/// Place the Moon on its orbit from elapsed time alone.
pub fn place_satellite(
    mut bodies: Query<(&CelestialBody, &mut Transform)>,
    time: Res<SimulationTime>,
) {
    let orbit = OrbitParams::moon();
    for (body, mut transform) in bodies.iter_mut() {
        if body.kind != BodyKind::Moon {
            continue;
        }
        let pos = satellite_position(time.elapsed, orbit);
        transform.translation = pos.as_vec3();
    }
}
