//! Scene construction: spawning the Sun, planets, and catalog objects.

use bevy::prelude::*;

use crate::body::CelestialBody;
use crate::catalog;
use crate::data::{planets, sun, BodyRecord};
use crate::types::{SimulationClock, Updatables, RADIUS_SCALE};

/// Smallest render radius so catalog objects stay visible.
const MIN_RENDER_RADIUS: f32 = 0.08;

/// Spawn every celestial body as a sphere mesh and register the orbiting
/// ones with the clock, in a stable order: Sun, planets inward-out, then
/// catalog objects in file order.
pub fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut updatables: ResMut<Updatables>,
    clock: Res<SimulationClock>,
) {
    let mut records = vec![sun()];
    records.extend(planets());

    // A missing or malformed catalog is not fatal
    match catalog::load_from_assets_dir() {
        Ok(neos) => records.extend(neos),
        Err(err) => warn!("Small-body catalog unavailable: {err}"),
    }

    let body_count = records.len();
    for record in &records {
        spawn_body(
            record,
            &mut commands,
            &mut meshes,
            &mut materials,
            &mut updatables,
            &clock,
        );
    }

    // The Sun's material is emissive but emissive materials don't light
    // their neighbors; a point light at the origin does.
    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            range: 2_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::default(),
    ));

    info!("Spawned {body_count} celestial bodies");
}

fn spawn_body(
    record: &BodyRecord,
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    updatables: &mut Updatables,
    clock: &SimulationClock,
) {
    let mut body = CelestialBody::from_record(record);
    // Place the body at the clock's starting date, not at epoch
    body.tick(clock.elapsed_years());

    let render_radius = ((record.radius * RADIUS_SCALE) as f32).max(MIN_RENDER_RADIUS);
    let mesh = meshes.add(Sphere::new(render_radius));

    let base_color = record.color.with_alpha(record.opacity);
    let material = materials.add(StandardMaterial {
        base_color,
        emissive: if record.category.is_fixed() {
            record.color.to_linear() * 2.0
        } else {
            LinearRgba::BLACK
        },
        alpha_mode: if record.opacity < 1.0 {
            AlphaMode::Blend
        } else {
            AlphaMode::Opaque
        },
        ..default()
    });

    let translation = body.current_position.as_vec3();
    let is_fixed = record.category.is_fixed();

    let entity = commands
        .spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_translation(translation),
            body,
        ))
        .id();

    if !is_fixed {
        updatables.add(entity);
    }
}
