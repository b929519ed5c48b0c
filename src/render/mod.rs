//! Scene construction: celestial bodies, starfield, and lighting.

pub mod background;
pub mod bodies;

use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::bodies::BodiesPlugin;

pub use self::bodies::{BodyRegistry, CelestialBody};

/// Plugin aggregating scene construction.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((BodiesPlugin, BackgroundPlugin));
    }
}
