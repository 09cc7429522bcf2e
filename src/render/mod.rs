//! Rendering systems for the orrery.
//!
//! Spawns the scene, mirrors simulation positions into transforms, and
//! draws the gizmo overlays (traces, orbit paths, swept-area wedges).
//! Transform sync is paced by the frame limiter; gizmo overlays are
//! immediate-mode and redraw every update from retained state.

pub mod bodies;
pub mod labels;
pub mod orbits;
pub mod sweep;
mod sync;
pub mod traces;

use bevy::prelude::*;

use crate::time::render_frame_ready;
use crate::types::ScheduleSet;

use self::bodies::spawn_solar_system;
use self::labels::LabelPlugin;
use self::orbits::OrbitPathPlugin;
use self::sweep::draw_swept_wedges;
use self::sync::sync_body_transforms;
use self::traces::{apply_trace_setting, draw_traces, TraceSettings};

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TraceSettings>()
            .add_plugins((OrbitPathPlugin, LabelPlugin))
            .insert_resource(AmbientLight {
                brightness: 120.0,
                ..default()
            })
            .add_systems(Startup, spawn_solar_system)
            .add_systems(
                Update,
                (
                    apply_trace_setting,
                    sync_body_transforms.run_if(render_frame_ready),
                    draw_traces,
                    draw_swept_wedges,
                )
                    .in_set(ScheduleSet::Render),
            );
    }
}
