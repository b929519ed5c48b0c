//! Earth-Moon scene viewer.
//!
//! An interactive two-body celestial scene: a spinning Earth, an orbiting
//! Moon, pointer hover picking, and a live telemetry panel.

use bevy::prelude::*;

use earthmoon::camera::CameraPlugin;
use earthmoon::kinematics::KinematicsPlugin;
use earthmoon::picking::PickingPlugin;
use earthmoon::render::RenderPlugin;
use earthmoon::telemetry::TelemetryPlugin;
use earthmoon::time::TimePlugin;
use earthmoon::types::{SimulationTime, TickSet};
use earthmoon::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        // Insert resources before plugins that depend on them
        .insert_resource(SimulationTime::default())
        // One tick: advance time, move bodies, snapshot telemetry
        .configure_sets(
            Update,
            (TickSet::AdvanceTime, TickSet::Kinematics, TickSet::Telemetry).chain(),
        )
        .add_plugins((
            TimePlugin,
            KinematicsPlugin,
            CameraPlugin,
            RenderPlugin,
            PickingPlugin,
            TelemetryPlugin,
            UiPlugin,
        ))
        .run();
}
