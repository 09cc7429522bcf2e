//! egui-based control surface.
//!
//! All panels run in `EguiPrimaryContextPass` after the Phosphor fonts are
//! loaded, so icon glyphs never render as tofu on the first frame.

pub mod alerts;
pub mod icons;
mod time_controls;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            .init_resource::<alerts::ActiveAlert>()
            .add_event::<alerts::AlertEvent>()
            .add_systems(Update, alerts::collect_alerts)
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    time_controls::control_panel,
                    time_controls::sweep_panel,
                    alerts::alert_modal,
                )
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}
