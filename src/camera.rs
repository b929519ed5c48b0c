//! Orbit camera for the Earth-Moon scene.
//!
//! Pointer drag orbits around the focus point, scroll zooms, middle drag
//! pans. Input only moves targets; each tick the current values are damped
//! toward them, matching the smoothed feel of the original viewer.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
    window::PrimaryWindow,
};

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 75.0;

/// Near clip plane distance.
pub const NEAR_PLANE: f32 = 0.1;

/// Far clip plane distance.
pub const FAR_PLANE: f32 = 1000.0;

/// Initial camera distance from the focus point.
pub const DEFAULT_DISTANCE: f32 = 5.0;

/// Closest allowed zoom.
pub const MIN_DISTANCE: f32 = 1.5;

/// Furthest allowed zoom.
pub const MAX_DISTANCE: f32 = 50.0;

/// Exponential damping factor applied per tick.
pub const DAMPING_FACTOR: f32 = 0.05;

/// Radians of orbit per pixel of drag.
pub const ORBIT_SPEED: f32 = 0.005;

/// Distance multiplier per scroll line.
pub const ZOOM_SPEED: f32 = 0.1;

/// Pan speed in focus units per pixel, scaled by distance.
pub const PAN_SPEED: f32 = 0.001;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Whether the UI layer currently owns the pointer.
///
/// Written by the UI pass each frame, read by the camera input systems so
/// drags and scrolls over a panel do not also move the camera.
#[derive(Resource, Debug, Default)]
pub struct PointerCapture {
    pub captured: bool,
}

/// Orbit state: spherical coordinates around a focus point, with separate
/// target values so input and damping stay decoupled.
#[derive(Component, Clone, Debug)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target_focus: Vec3,
    pub target_yaw: f32,
    pub target_pitch: f32,
    pub target_distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            distance: DEFAULT_DISTANCE,
            target_focus: Vec3::ZERO,
            target_yaw: 0.0,
            target_pitch: 0.0,
            target_distance: DEFAULT_DISTANCE,
        }
    }
}

/// Last valid viewport dimensions, used by picking.
///
/// A hidden window can report zero width or height for a few frames; those
/// reports are ignored so the stored aspect never divides by zero.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ViewportState {
    pub width: f32,
    pub height: f32,
    pub aspect: f32,
}

impl Default for ViewportState {
    fn default() -> Self {
        // Bevy's default window size; replaced on the first real report.
        Self {
            width: 1280.0,
            height: 720.0,
            aspect: 1280.0 / 720.0,
        }
    }
}

impl ViewportState {
    /// Accept a new viewport size, keeping the previous values if either
    /// dimension is non-positive.
    pub fn update(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.width = width;
            self.height = height;
            self.aspect = width / height;
        }
    }
}

/// One damping step: move `current` toward `target` by `factor`.
pub fn damp(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Camera transform for the given orbit state: positioned on the sphere of
/// radius `distance` around `focus`, looking at `focus`.
pub fn orbit_transform(focus: Vec3, yaw: f32, pitch: f32, distance: f32) -> Transform {
    let rotation = Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0);
    Transform {
        translation: focus + rotation * Vec3::new(0.0, 0.0, distance),
        rotation,
        ..default()
    }
}

/// Plugin providing the orbit camera and viewport tracking.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewportState>()
            .init_resource::<PointerCapture>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (camera_orbit, camera_pan, camera_zoom, apply_damping).chain(),
            )
            .add_systems(Update, track_viewport);
    }
}

/// Spawn the main camera with a perspective projection.
fn setup_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        orbit_transform(orbit.focus, orbit.yaw, orbit.pitch, orbit.distance),
        orbit.clone(),
        MainCamera,
    ));
}

/// Left drag: orbit around the focus point.
pub fn camera_orbit(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    capture: Res<PointerCapture>,
    mut camera_query: Query<&mut OrbitCamera, With<MainCamera>>,
) {
    // Input over a UI panel belongs to egui, not the camera.
    if capture.captured {
        return;
    }

    if !mouse_buttons.pressed(MouseButton::Left) || mouse_motion.delta == Vec2::ZERO {
        return;
    }

    let Ok(mut orbit) = camera_query.single_mut() else {
        return;
    };

    orbit.target_yaw -= mouse_motion.delta.x * ORBIT_SPEED;
    orbit.target_pitch = (orbit.target_pitch - mouse_motion.delta.y * ORBIT_SPEED).clamp(
        -std::f32::consts::FRAC_PI_2 + 0.01,
        std::f32::consts::FRAC_PI_2 - 0.01,
    );
}

/// Middle drag: pan the focus point in the camera plane.
pub fn camera_pan(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    capture: Res<PointerCapture>,
    mut camera_query: Query<(&mut OrbitCamera, &Transform), With<MainCamera>>,
) {
    if capture.captured {
        return;
    }

    if !mouse_buttons.pressed(MouseButton::Middle) || mouse_motion.delta == Vec2::ZERO {
        return;
    }

    let Ok((mut orbit, transform)) = camera_query.single_mut() else {
        return;
    };

    // Screen motion maps to the camera's right/up axes, scaled by distance
    // so panning stays proportional on screen.
    let scale = orbit.distance * PAN_SPEED;
    let delta =
        transform.right() * -mouse_motion.delta.x * scale + transform.up() * mouse_motion.delta.y * scale;
    orbit.target_focus += delta;
}

/// Scroll wheel: zoom toward or away from the focus point.
pub fn camera_zoom(
    mouse_scroll: Res<AccumulatedMouseScroll>,
    capture: Res<PointerCapture>,
    mut camera_query: Query<&mut OrbitCamera, With<MainCamera>>,
) {
    if capture.captured {
        return;
    }

    if mouse_scroll.delta.y == 0.0 {
        return;
    }

    let Ok(mut orbit) = camera_query.single_mut() else {
        return;
    };

    // Logarithmic zoom: multiply distance by a factor per scroll line.
    let zoom_factor = 1.0 - mouse_scroll.delta.y * ZOOM_SPEED;
    orbit.target_distance = (orbit.target_distance * zoom_factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
}

/// Damp current orbit values toward their targets and rebuild the transform.
fn apply_damping(mut camera_query: Query<(&mut OrbitCamera, &mut Transform), With<MainCamera>>) {
    let Ok((mut orbit, mut transform)) = camera_query.single_mut() else {
        return;
    };

    orbit.yaw = damp(orbit.yaw, orbit.target_yaw, DAMPING_FACTOR);
    orbit.pitch = damp(orbit.pitch, orbit.target_pitch, DAMPING_FACTOR);
    orbit.distance = damp(orbit.distance, orbit.target_distance, DAMPING_FACTOR);
    orbit.focus = orbit.focus.lerp(orbit.target_focus, DAMPING_FACTOR);

    *transform = orbit_transform(orbit.focus, orbit.yaw, orbit.pitch, orbit.distance);
}

/// Record the window's current size, ignoring zero-sized reports.
fn track_viewport(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<ViewportState>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };
    viewport.update(window.width(), window.height());
}
