//! Keyboard shortcuts for simulation control.
//!
//! Everything here is also reachable from the control panel; the shortcuts
//! just mutate the same resources directly.

use bevy::prelude::*;

use crate::render::labels::LabelSettings;
use crate::types::SimulationClock;

/// Slowest allowed time scale, in days per frame.
pub const MIN_TIME_SCALE: f64 = 0.125;

/// Fastest allowed time scale, in days per frame.
pub const MAX_TIME_SCALE: f64 = 128.0;

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, keyboard_shortcuts);
    }
}

/// Handle keyboard shortcuts for simulation control.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut clock: ResMut<SimulationClock>,
    mut labels: ResMut<LabelSettings>,
) {
    // Space: toggle play/pause
    if keys.just_pressed(KeyCode::Space) {
        clock.playing = !clock.playing;
        info!("Simulation {}", if clock.playing { "running" } else { "paused" });
    }

    // R: reverse time direction
    if keys.just_pressed(KeyCode::KeyR) {
        clock.direction = clock.direction.reversed();
        info!("Time direction: {:?}", clock.direction);
    }

    // L: toggle body labels
    if keys.just_pressed(KeyCode::KeyL) {
        labels.visible = !labels.visible;
    }

    // [ and ]: halve or double the time scale
    if keys.just_pressed(KeyCode::BracketLeft) {
        clock.scale = (clock.scale * 0.5).max(MIN_TIME_SCALE);
        info!("Time scale: {} days/frame", clock.scale);
    }
    if keys.just_pressed(KeyCode::BracketRight) {
        clock.scale = (clock.scale * 2.0).min(MAX_TIME_SCALE);
        info!("Time scale: {} days/frame", clock.scale);
    }

    // Quick time scale presets
    if keys.just_pressed(KeyCode::Digit1) {
        clock.scale = 1.0;
        info!("Time scale: 1 day/frame");
    }
    if keys.just_pressed(KeyCode::Digit2) {
        clock.scale = 5.0;
        info!("Time scale: 5 days/frame");
    }
    if keys.just_pressed(KeyCode::Digit3) {
        clock.scale = 30.0;
        info!("Time scale: 30 days/frame");
    }
    if keys.just_pressed(KeyCode::Digit4) {
        clock.scale = 100.0;
        info!("Time scale: 100 days/frame");
    }
}
