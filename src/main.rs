//! Orrery - Interactive Solar System Simulator
//!
//! A desktop orrery: Keplerian propagation of the planets and a small-body
//! catalog, with time controls, trace history, and an equal-areas overlay
//! demonstrating Kepler's second law.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orrery::camera::CameraPlugin;
use orrery::input::InputPlugin;
use orrery::render::RenderPlugin;
use orrery::sweep::SweptAreaPlugin;
use orrery::time::TimePlugin;
use orrery::types::SimulationClock;
use orrery::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // The clock starts at the wall-clock date, playing forward
        .insert_resource(SimulationClock::default())
        .add_plugins((
            TimePlugin,
            CameraPlugin,
            InputPlugin,
            RenderPlugin,
            SweptAreaPlugin,
            UiPlugin,
        ))
        .run();
}
