//! Per-frame telemetry snapshot for the UI layer.
//!
//! A pure projection of each body's current transform and spin accumulator,
//! rebuilt unconditionally every tick. The previous snapshot is replaced;
//! no history is retained.

use bevy::prelude::*;

use crate::kinematics::BodySpin;
use crate::render::bodies::CelestialBody;
use crate::types::{BodyKind, TickSet};

/// Formatted readout for one body.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BodyTelemetry {
    /// Rotation angle, two decimal places.
    pub rotation: String,
    /// Position as a parenthesized triple of two-decimal values.
    pub position: String,
}

/// Read-only per-frame summary handed to the UI layer.
#[derive(Resource, Clone, Debug, Default)]
pub struct TelemetrySnapshot {
    pub earth: BodyTelemetry,
    pub moon: BodyTelemetry,
}

impl TelemetrySnapshot {
    pub fn get(&self, kind: BodyKind) -> &BodyTelemetry {
        match kind {
            BodyKind::Earth => &self.earth,
            BodyKind::Moon => &self.moon,
        }
    }
}

/// Format a rotation angle to two decimals.
pub fn format_rotation(angle: f64) -> String {
    format!("{angle:.2}")
}

/// Format a position as `"(x.xx, y.yy, z.zz)"`.
pub fn format_position(pos: Vec3) -> String {
    format!("({:.2}, {:.2}, {:.2})", pos.x, pos.y, pos.z)
}

/// Plugin publishing the telemetry snapshot every tick.
pub struct TelemetryPlugin;

impl Plugin for TelemetryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TelemetrySnapshot>()
            .add_systems(Update, publish_telemetry.in_set(TickSet::Telemetry));
    }
}

/// Rebuild the snapshot from the bodies' current state.
pub fn publish_telemetry(
    bodies: Query<(&CelestialBody, &BodySpin, &Transform)>,
    mut snapshot: ResMut<TelemetrySnapshot>,
) {
    for (body, spin, transform) in bodies.iter() {
        let telemetry = BodyTelemetry {
            rotation: format_rotation(spin.angle),
            position: format_position(transform.translation),
        };
        match body.kind {
            BodyKind::Earth => snapshot.earth = telemetry,
            BodyKind::Moon => snapshot.moon = telemetry,
        }
    }
}
