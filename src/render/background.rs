//! Background starfield and scene lighting.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use rand::Rng;

/// Number of stars in the background point cloud.
pub const STAR_COUNT: usize = 10_000;

/// Side length of the cube the stars are scattered in, centered at the
/// origin.
pub const STARFIELD_EXTENT: f32 = 2000.0;

/// Plugin providing the starfield and lighting, built once at startup.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_starfield, spawn_lighting));
    }
}

/// Generate starfield vertex positions: each coordinate independently
/// uniform in [-extent/2, extent/2].
pub fn starfield_positions<R: Rng>(rng: &mut R, count: usize, extent: f32) -> Vec<[f32; 3]> {
    let half = extent / 2.0;
    (0..count)
        .map(|_| {
            [
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            ]
        })
        .collect()
}

/// Spawn the static starfield as a single point-list mesh.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = rand::thread_rng();
    let positions = starfield_positions(&mut rng, STAR_COUNT, STARFIELD_EXTENT);

    let mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::RENDER_WORLD)
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions);

    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(material),
        Transform::default(),
    ));

    info!("Spawned starfield with {STAR_COUNT} stars");
}

/// Ambient fill plus a single point light, as in the reference scene.
fn spawn_lighting(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });

    commands.spawn((
        PointLight {
            color: Color::WHITE,
            intensity: 2_000_000.0,
            range: 100.0,
            ..default()
        },
        Transform::from_xyz(5.0, 3.0, 5.0),
    ));
}
