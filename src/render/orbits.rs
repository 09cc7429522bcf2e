//! Static orbit path rendering.
//!
//! Each orbiting body gets its full conic sampled once at spawn and drawn
//! as a dim closed (or open, for e >= 1) polyline. Orbits never change in
//! this simulation, so there is nothing to recompute per frame.

use bevy::prelude::*;

use crate::body::CelestialBody;
use crate::orbit::path::{sample_path, OrbitShape};
use crate::types::SPACE_SCALE;
use crate::ui::alerts::AlertEvent;

/// Component caching the sampled path for one body.
#[derive(Component, Debug)]
pub struct OrbitPath {
    pub shape: OrbitShape,
    pub points: Vec<Vec3>,
}

/// Settings for orbit path rendering.
#[derive(Resource, Debug)]
pub struct OrbitPathSettings {
    pub visible: bool,
    /// Samples per path (higher is smoother)
    pub segments: usize,
    pub alpha: f32,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            visible: true,
            segments: 256,
            alpha: 0.3,
        }
    }
}

/// Plugin providing orbit path visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPathSettings>()
            .add_systems(Update, (build_orbit_paths, draw_orbit_paths).chain());
    }
}

/// Sample the conic for every newly spawned orbiting body.
///
/// A negative or non-finite eccentricity cannot be classified; the body
/// still renders (frozen or moving per its period) but gets no path, and
/// the user is told why.
fn build_orbit_paths(
    mut commands: Commands,
    settings: Res<OrbitPathSettings>,
    bodies: Query<(Entity, &CelestialBody), Added<CelestialBody>>,
    mut alerts: EventWriter<AlertEvent>,
) {
    for (entity, body) in bodies.iter() {
        let Some(elements) = body.elements.as_ref() else {
            continue;
        };

        match sample_path(elements, settings.segments, SPACE_SCALE) {
            Ok((shape, samples)) => {
                let points = samples.iter().map(|p| p.as_vec3()).collect();
                commands.entity(entity).insert(OrbitPath { shape, points });
            }
            Err(err) => {
                error!("Cannot draw orbit for {}: {err}", body.name);
                alerts.write(AlertEvent::new(format!(
                    "Cannot draw orbit for {}: {err}",
                    body.name
                )));
            }
        }
    }
}

/// Draw every cached path as a dim polyline in the body's color.
fn draw_orbit_paths(
    mut gizmos: Gizmos,
    settings: Res<OrbitPathSettings>,
    paths: Query<(&OrbitPath, &CelestialBody)>,
) {
    if !settings.visible {
        return;
    }

    for (path, body) in paths.iter() {
        if path.points.len() < 2 {
            continue;
        }
        // Bound orbits arrive as a closed polyline; open conics as an arc
        let color = body.color.with_alpha(settings.alpha * body.opacity);
        gizmos.linestrip(path.points.iter().copied(), color);
    }
}
