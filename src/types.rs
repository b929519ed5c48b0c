//! Core types and constants for the Earth-Moon scene.

use bevy::prelude::*;

/// Nominal frame rate the reference spin rates were tuned against.
///
/// The original motion constants were expressed as radians per frame at
/// roughly 60 Hz; all runtime math works in rad/s so animation speed does
/// not depend on the display refresh rate.
pub const NOMINAL_FRAME_HZ: f64 = 60.0;

/// Earth spin rate, radians per nominal frame.
pub const EARTH_SPIN_PER_FRAME: f64 = 0.005;

/// Moon spin rate, radians per nominal frame.
pub const MOON_SPIN_PER_FRAME: f64 = 0.01;

/// Earth sphere radius in render units.
pub const EARTH_RADIUS: f32 = 1.0;

/// Moon sphere radius in render units.
pub const MOON_RADIUS: f32 = 0.27;

/// UV-sphere resolution (sectors and stacks) for both bodies.
pub const SPHERE_SEGMENTS: u32 = 32;

/// Radius of the Moon's circular orbit in render units.
pub const ORBIT_RADIUS: f64 = 2.0;

/// Angular frequency of the Moon's orbit, rad/s of simulation time.
pub const ORBIT_ANGULAR_FREQ: f64 = 0.5;

/// System sets ordering one tick of the frame loop.
///
/// Time must advance before kinematics consume it, and telemetry snapshots
/// the bodies only after they moved.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TickSet {
    /// Simulation clock advancement.
    AdvanceTime,
    /// Body spin and orbital placement.
    Kinematics,
    /// Telemetry snapshot publication.
    Telemetry,
}

/// Convert a per-nominal-frame angular increment to rad/s.
pub fn per_frame_to_per_second(rate_per_frame: f64) -> f64 {
    rate_per_frame * NOMINAL_FRAME_HZ
}

/// Identifier for the two bodies in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    /// The central body.
    Earth,
    /// The orbiting satellite.
    Moon,
}

impl BodyKind {
    /// Human-readable display name, used for hover labels and the info panel.
    pub fn name(self) -> &'static str {
        match self {
            BodyKind::Earth => "Earth",
            BodyKind::Moon => "Moon",
        }
    }
}

/// Simulation clock, monotonic from loop start.
///
/// `elapsed` deliberately starts at zero rather than a wall-clock date:
/// trigonometry on epoch-scale timestamps loses precision long before the
/// scene does.
#[derive(Resource, Debug)]
pub struct SimulationTime {
    /// Seconds of simulation time since the loop started.
    pub elapsed: f64,
    /// Simulation seconds that passed during the last tick.
    pub delta: f64,
    /// When paused, `elapsed` stops advancing and the scene freezes.
    pub paused: bool,
}

impl Default for SimulationTime {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            delta: 0.0,
            paused: false,
        }
    }
}

/// Construction-time validation failures.
///
/// These are programmer errors: the scene fails fast before the loop starts
/// instead of animating silently wrong geometry.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("body radius must be finite and positive, got {0}")]
    InvalidRadius(f32),

    #[error("sphere resolution must be at least 3 segments, got {0}")]
    InvalidSegments(u32),

    #[error("orbital radius must be finite and positive, got {0}")]
    InvalidOrbitRadius(f64),

    #[error("orbital angular frequency must be finite, got {0}")]
    InvalidAngularFrequency(f64),
}

/// Validated sphere geometry parameters for one body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyParams {
    pub radius: f32,
    pub segments: u32,
}

impl BodyParams {
    pub fn new(radius: f32, segments: u32) -> Result<Self, SceneError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SceneError::InvalidRadius(radius));
        }
        if segments < 3 {
            return Err(SceneError::InvalidSegments(segments));
        }
        Ok(Self { radius, segments })
    }
}

/// Validated circular-orbit parameters for the satellite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitParams {
    /// Orbit radius in render units.
    pub radius: f64,
    /// Angular frequency in rad/s.
    pub angular_freq: f64,
}

impl OrbitParams {
    pub fn new(radius: f64, angular_freq: f64) -> Result<Self, SceneError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SceneError::InvalidOrbitRadius(radius));
        }
        if !angular_freq.is_finite() {
            return Err(SceneError::InvalidAngularFrequency(angular_freq));
        }
        Ok(Self {
            radius,
            angular_freq,
        })
    }

    /// Reference Moon orbit: R = 2.0 render units, phi = 0.5 rad/s.
    pub fn moon() -> Self {
        Self {
            radius: ORBIT_RADIUS,
            angular_freq: ORBIT_ANGULAR_FREQ,
        }
    }
}
