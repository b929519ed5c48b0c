//! Celestial body spawning and the body registry.
//!
//! Spawns the two bodies as textured UV spheres. Texture loads resolve
//! asynchronously: until then each body renders with its placeholder color,
//! and a failed load degrades that body to the untextured placeholder
//! permanently instead of interrupting the animation.

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::kinematics::BodySpin;
use crate::types::{
    per_frame_to_per_second, BodyKind, BodyParams, EARTH_RADIUS, EARTH_SPIN_PER_FRAME,
    MOON_RADIUS, MOON_SPIN_PER_FRAME, SPHERE_SEGMENTS,
};

/// Texture asset path for the Earth surface.
pub const EARTH_TEXTURE: &str = "textures/earth.jpg";

/// Texture asset path for the Moon surface.
pub const MOON_TEXTURE: &str = "textures/moon.jpg";

/// Component marking an entity as one of the scene's two bodies.
#[derive(Component, Clone, Copy, Debug)]
pub struct CelestialBody {
    /// Which body this entity is.
    pub kind: BodyKind,
    /// Sphere radius in render units, used as the picking bounding sphere.
    pub radius: f32,
}

/// Async texture state for one body.
#[derive(Component, Debug)]
pub struct BodyTexture {
    pub handle: Handle<Image>,
    /// Set once the load resolved either way and the material was updated.
    pub resolved: bool,
}

/// Maps each body kind to its entity. Exactly one entity per kind exists
/// for the scene's lifetime.
#[derive(Resource, Clone, Copy, Debug)]
pub struct BodyRegistry {
    earth: Entity,
    moon: Entity,
}

impl BodyRegistry {
    pub fn new(earth: Entity, moon: Entity) -> Self {
        Self { earth, moon }
    }

    pub fn get(&self, kind: BodyKind) -> Entity {
        match kind {
            BodyKind::Earth => self.earth,
            BodyKind::Moon => self.moon,
        }
    }
}

/// Plugin spawning the bodies and watching their texture loads.
pub struct BodiesPlugin;

impl Plugin for BodiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_bodies)
            .add_systems(Update, resolve_body_textures);
    }
}

/// Placeholder color shown until (or instead of) the texture.
fn placeholder_color(kind: BodyKind) -> Color {
    match kind {
        BodyKind::Earth => Color::srgb(0.2, 0.5, 0.8),
        BodyKind::Moon => Color::srgb(0.7, 0.7, 0.7),
    }
}

/// Per-nominal-frame spin rate of a body, before rad/s conversion.
fn spin_per_frame(kind: BodyKind) -> f64 {
    match kind {
        BodyKind::Earth => EARTH_SPIN_PER_FRAME,
        BodyKind::Moon => MOON_SPIN_PER_FRAME,
    }
}

fn texture_path(kind: BodyKind) -> &'static str {
    match kind {
        BodyKind::Earth => EARTH_TEXTURE,
        BodyKind::Moon => MOON_TEXTURE,
    }
}

/// Spawn one body entity from validated parameters.
fn create_body(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
    kind: BodyKind,
    params: BodyParams,
) -> Entity {
    let mesh = meshes.add(Sphere::new(params.radius).mesh().uv(params.segments, params.segments));

    let texture = asset_server.load(texture_path(kind));
    let material = materials.add(StandardMaterial {
        base_color: placeholder_color(kind),
        base_color_texture: Some(texture.clone()),
        ..default()
    });

    commands
        .spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::default(),
            CelestialBody {
                kind,
                radius: params.radius,
            },
            BodySpin::new(per_frame_to_per_second(spin_per_frame(kind))),
            BodyTexture {
                handle: texture,
                resolved: false,
            },
        ))
        .id()
}

/// Spawn Earth and Moon and register them.
///
/// Geometry parameters are validated here; invalid values abort startup
/// rather than animating silently wrong spheres.
fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) -> Result {
    let earth_params = BodyParams::new(EARTH_RADIUS, SPHERE_SEGMENTS)?;
    let moon_params = BodyParams::new(MOON_RADIUS, SPHERE_SEGMENTS)?;

    let earth = create_body(
        &mut commands,
        &mut meshes,
        &mut materials,
        &asset_server,
        BodyKind::Earth,
        earth_params,
    );
    let moon = create_body(
        &mut commands,
        &mut meshes,
        &mut materials,
        &asset_server,
        BodyKind::Moon,
        moon_params,
    );

    commands.insert_resource(BodyRegistry::new(earth, moon));

    info!("Spawned Earth and Moon");
    Ok(())
}

/// Update a body material once its texture load resolves.
///
/// `base_color` multiplies `base_color_texture`, so on success the
/// placeholder tint must be cleared for the texture to show true colors. On
/// failure the texture reference is stripped and the placeholder color stays.
pub fn apply_texture_outcome(material: &mut StandardMaterial, loaded: bool) {
    if loaded {
        material.base_color = Color::WHITE;
    } else {
        material.base_color_texture = None;
    }
}

/// Watch each body's texture load and update the material when it resolves,
/// once, warning on failure.
fn resolve_body_textures(
    asset_server: Res<AssetServer>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut bodies: Query<(
        &CelestialBody,
        &mut BodyTexture,
        &MeshMaterial3d<StandardMaterial>,
    )>,
) {
    for (body, mut texture, material_handle) in bodies.iter_mut() {
        if texture.resolved {
            continue;
        }

        let loaded = match asset_server.get_load_state(&texture.handle) {
            Some(LoadState::Loaded) => true,
            Some(LoadState::Failed(err)) => {
                warn!(
                    "{} texture failed to load, rendering untextured: {err}",
                    body.kind.name()
                );
                false
            }
            _ => continue,
        };

        if let Some(material) = materials.get_mut(&material_handle.0) {
            apply_texture_outcome(material, loaded);
        }
        texture.resolved = true;
    }
}
