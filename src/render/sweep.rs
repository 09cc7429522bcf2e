//! Swept-area wedge overlay for the Kepler's-second-law demonstration.
//!
//! Draws every wedge accumulated over the current period as a Sun-centered
//! triangle fan, alternating color by phase parity so the eight phases
//! read as distinct sectors.

use bevy::prelude::*;

use crate::sweep::SweptAreaAccumulator;

const EVEN_PHASE_COLOR: Color = Color::srgba(1.0, 0.0, 1.0, 0.35);
const ODD_PHASE_COLOR: Color = Color::srgba(0.0, 1.0, 1.0, 0.35);

/// Draw the accumulated wedges for the tracked body.
pub fn draw_swept_wedges(mut gizmos: Gizmos, accumulator: Res<SweptAreaAccumulator>) {
    if accumulator.tracked().is_none() {
        return;
    }

    for wedge in &accumulator.wedges {
        let color = if wedge.phase % 2 == 0 {
            EVEN_PHASE_COLOR
        } else {
            ODD_PHASE_COLOR
        };
        let previous = wedge.previous.as_vec3();
        let current = wedge.current.as_vec3();

        gizmos.line(Vec3::ZERO, previous, color);
        gizmos.line(previous, current, color);
        gizmos.line(current, Vec3::ZERO, color);
    }
}
