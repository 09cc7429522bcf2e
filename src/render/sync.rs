//! Mirror simulation positions into render transforms.

use bevy::prelude::*;

use crate::body::CelestialBody;

/// Copy each body's f64 simulation position into its f32 transform.
///
/// Runs only on frames the limiter releases; the simulation state itself
/// advances every update.
pub fn sync_body_transforms(mut bodies: Query<(&mut Transform, &CelestialBody)>) {
    for (mut transform, body) in bodies.iter_mut() {
        transform.translation = body.current_position.as_vec3();
    }
}
