//! Time advancement for the Earth-Moon scene.
//!
//! Accumulates simulation time from the real per-frame delta and handles
//! the pause toggle.

use bevy::prelude::*;

use crate::types::{SimulationTime, TickSet};

/// Plugin providing time advancement and the pause shortcut.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (toggle_pause, advance_time).chain().in_set(TickSet::AdvanceTime),
        );
    }
}

/// Advance simulation time by the real time elapsed since the last tick.
///
/// Uses the frame delta rather than a wall-clock date so `elapsed` stays
/// small and the closed-form orbit math keeps full precision.
fn advance_time(mut sim_time: ResMut<SimulationTime>, time: Res<Time>) {
    if sim_time.paused {
        sim_time.delta = 0.0;
        return;
    }

    let dt = time.delta_secs_f64();
    sim_time.delta = dt;
    sim_time.elapsed += dt;
}

/// Space: toggle pause.
fn toggle_pause(keys: Res<ButtonInput<KeyCode>>, mut sim_time: ResMut<SimulationTime>) {
    if keys.just_pressed(KeyCode::Space) {
        sim_time.paused = !sim_time.paused;
        info!(
            "Simulation {}",
            if sim_time.paused { "paused" } else { "running" }
        );
    }
}
