//! Pointer-to-body picking.
//!
//! Converts the cursor position into a world-space ray through the camera
//! and resolves the nearest intersected body. Runs once per tick against the
//! window's latest cursor position, so several pointer moves within one
//! frame collapse into a single pick.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::camera::{MainCamera, ViewportState};
use crate::render::bodies::CelestialBody;

/// Hover readout consumed by the UI layer. Overwritten every tick.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct HoverState {
    pub visible: bool,
    pub label: String,
    /// Raw cursor position, window coordinates.
    pub x: f32,
    pub y: f32,
}

impl HoverState {
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn shown(label: &str, x: f32, y: f32) -> Self {
        Self {
            visible: true,
            label: label.to_string(),
            x,
            y,
        }
    }
}

/// A world-space picking ray.
#[derive(Clone, Copy, Debug)]
pub struct PickRay {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Normalize window coordinates to [-1, 1] device coordinates.
///
/// Window Y grows downward while normalized device Y grows upward, so the Y
/// axis is inverted.
pub fn screen_to_ndc(cursor: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        (cursor.x / viewport.x) * 2.0 - 1.0,
        1.0 - (cursor.y / viewport.y) * 2.0,
    )
}

/// Build the world-space ray through a normalized device coordinate for a
/// perspective camera.
pub fn viewport_ray(ndc: Vec2, camera: &Transform, fov_y: f32, aspect: f32) -> PickRay {
    let half_fov = (fov_y * 0.5).tan();
    // Camera space: +X right, +Y up, looking down -Z.
    let local = Vec3::new(ndc.x * half_fov * aspect, ndc.y * half_fov, -1.0);
    PickRay {
        origin: camera.translation,
        direction: (camera.rotation * local).normalize(),
    }
}

/// Nearest non-negative intersection distance of a ray with a sphere, or
/// `None` on a miss. A ray starting inside the sphere hits at the exit point.
pub fn ray_sphere_intersection(ray: PickRay, center: Vec3, radius: f32) -> Option<f32> {
    let to_center = center - ray.origin;
    let proj = to_center.dot(ray.direction);
    let closest_sq = to_center.length_squared() - proj * proj;
    let radius_sq = radius * radius;

    if closest_sq > radius_sq {
        return None;
    }

    let half_chord = (radius_sq - closest_sq).sqrt();
    let near = proj - half_chord;
    let far = proj + half_chord;

    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        Some(far)
    } else {
        // Sphere is entirely behind the ray origin.
        None
    }
}

/// Resolve the nearest body hit by the ray. Ties are broken by geometric
/// intersection distance, never by candidate order.
pub fn pick_nearest<'a, I>(ray: PickRay, candidates: I) -> Option<(&'a CelestialBody, f32)>
where
    I: IntoIterator<Item = (&'a CelestialBody, Vec3)>,
{
    let mut nearest: Option<(&CelestialBody, f32)> = None;
    for (body, center) in candidates {
        if let Some(dist) = ray_sphere_intersection(ray, center, body.radius) {
            if nearest.map_or(true, |(_, d)| dist < d) {
                nearest = Some((body, dist));
            }
        }
    }
    nearest
}

/// Plugin providing hover picking.
pub struct PickingPlugin;

impl Plugin for PickingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoverState>()
            .add_systems(Update, update_hover);
    }
}

/// Pick against the latest cursor position and publish the hover readout.
fn update_hover(
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Transform, &Projection), With<MainCamera>>,
    bodies: Query<(&CelestialBody, &Transform), Without<MainCamera>>,
    viewport: Res<ViewportState>,
    mut hover: ResMut<HoverState>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    let Some(cursor) = window.cursor_position() else {
        *hover = HoverState::hidden();
        return;
    };

    let Ok((camera_transform, projection)) = camera_query.single() else {
        return;
    };

    let Projection::Perspective(perspective) = projection else {
        return;
    };

    let ndc = screen_to_ndc(cursor, Vec2::new(viewport.width, viewport.height));
    let ray = viewport_ray(ndc, camera_transform, perspective.fov, viewport.aspect);

    let hit = pick_nearest(
        ray,
        bodies
            .iter()
            .map(|(body, transform)| (body, transform.translation)),
    );

    *hover = match hit {
        Some((body, _)) => HoverState::shown(body.kind.name(), cursor.x, cursor.y),
        None => HoverState::hidden(),
    };
}
