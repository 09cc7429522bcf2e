//! Body labels using egui for text rendering.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use crate::body::CelestialBody;
use crate::camera::{CameraRig, MainCamera};
use crate::types::BodyCategory;

/// Plugin providing body label rendering.
pub struct LabelPlugin;

impl Plugin for LabelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LabelSettings>()
            .add_systems(EguiPrimaryContextPass, draw_body_labels);
    }
}

/// Settings for label rendering.
#[derive(Resource, Debug)]
pub struct LabelSettings {
    /// Whether labels are visible (toggled with L or from the panel).
    pub visible: bool,
    /// Camera distance beyond which small-body labels are hidden; planet
    /// labels always show. Without this cutoff a large catalog turns the
    /// screen into a name cloud when zoomed out.
    pub neo_label_distance: f32,
    /// Offset from body center in screen pixels.
    pub offset: f32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            visible: true,
            neo_label_distance: 120.0,
            offset: 12.0,
        }
    }
}

/// Draw a name next to each body's projected screen position.
fn draw_body_labels(
    mut egui_ctx: EguiContexts,
    bodies: Query<(&CelestialBody, &Transform)>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    rig: Res<CameraRig>,
    settings: Res<LabelSettings>,
) {
    if !settings.visible {
        return;
    }
    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Ok(ctx) = egui_ctx.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("body_labels"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Background)
        .show(ctx, |ui| {
            let painter = ui.painter();

            for (body, transform) in bodies.iter() {
                if body.category == BodyCategory::NearEarthObject
                    && rig.distance > settings.neo_label_distance
                {
                    continue;
                }

                let Ok(screen_pos) =
                    camera.world_to_viewport(camera_transform, transform.translation)
                else {
                    continue;
                };

                let label_pos = egui::pos2(
                    screen_pos.x + settings.offset,
                    screen_pos.y + settings.offset,
                );
                let font = egui::FontId::proportional(14.0);

                // Shadow first for readability over bright bodies
                painter.text(
                    label_pos + egui::vec2(1.0, 1.0),
                    egui::Align2::LEFT_TOP,
                    &body.name,
                    font.clone(),
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180),
                );
                painter.text(
                    label_pos,
                    egui::Align2::LEFT_TOP,
                    &body.name,
                    font,
                    egui::Color32::from_rgba_unmultiplied(220, 220, 220, 230),
                );
            }
        });
}
