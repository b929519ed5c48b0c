//! Common fixtures for integration tests.

use bevy::prelude::*;

use earthmoon::camera::FOV_DEGREES;
use earthmoon::picking::{screen_to_ndc, viewport_ray, PickRay};

/// Reference viewport used by the picking tests.
pub const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

/// Camera at the reference viewpoint: (0, 0, 5) looking down -Z.
pub fn reference_camera() -> Transform {
    Transform::from_xyz(0.0, 0.0, 5.0)
}

/// Aspect ratio of the reference viewport.
pub fn aspect() -> f32 {
    VIEWPORT.x / VIEWPORT.y
}

/// Build the picking ray through a cursor position with the reference
/// camera and viewport.
pub fn ray_at(cursor: Vec2) -> PickRay {
    let ndc = screen_to_ndc(cursor, VIEWPORT);
    viewport_ray(ndc, &reference_camera(), FOV_DEGREES.to_radians(), aspect())
}

/// Screen position a world point projects to under the reference camera.
pub fn project_to_screen(world: Vec3) -> Vec2 {
    let camera = reference_camera();
    let eye = camera.rotation.inverse() * (world - camera.translation);
    assert!(eye.z < 0.0, "point must be in front of the camera");

    let half_fov = (FOV_DEGREES.to_radians() * 0.5).tan();
    let ndc_x = (eye.x / -eye.z) / (half_fov * aspect());
    let ndc_y = (eye.y / -eye.z) / half_fov;

    Vec2::new(
        (ndc_x + 1.0) * 0.5 * VIEWPORT.x,
        (1.0 - ndc_y) * 0.5 * VIEWPORT.y,
    )
}
