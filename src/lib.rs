//! Earth-Moon scene viewer.
//!
//! A library crate exposing the simulation components for testing and
//! integration purposes.

pub mod camera;
pub mod kinematics;
pub mod picking;
pub mod render;
pub mod telemetry;
pub mod time;
pub mod types;
pub mod ui;
