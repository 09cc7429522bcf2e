//! Trace history rendering.
//!
//! Each traced body keeps a bounded ring of past positions; this module
//! draws them as a gizmo polyline in the body's color.

use bevy::prelude::*;

use crate::body::{CelestialBody, OrbitMode};

/// Global toggle for trace recording.
#[derive(Resource, Debug)]
pub struct TraceSettings {
    pub enabled: bool,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Propagate the global toggle to every orbiting body.
///
/// Runs on the toggle's change ticks only; flipping it clears existing
/// traces (disabling drops them, re-enabling starts from empty).
pub fn apply_trace_setting(
    settings: Res<TraceSettings>,
    mut bodies: Query<&mut CelestialBody>,
) {
    if !settings.is_changed() {
        return;
    }
    for mut body in bodies.iter_mut() {
        // Skip bodies already in the requested state; set_traced clears
        // the buffer and a spurious change tick must not wipe history
        if body.mode == OrbitMode::Orbiting && body.is_traced != settings.enabled {
            body.set_traced(settings.enabled);
        }
    }
}

/// Draw each body's trace as a polyline.
pub fn draw_traces(mut gizmos: Gizmos, bodies: Query<&CelestialBody>) {
    for body in bodies.iter() {
        if body.trace.len() < 2 {
            continue;
        }
        let color = body.color.with_alpha(body.opacity * 0.8);
        gizmos.linestrip(body.trace.iter().map(|p| p.as_vec3()), color);
    }
}
