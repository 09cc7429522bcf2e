//! Control panel at the bottom of the screen, and the equal-areas window.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::body::CelestialBody;
use crate::grouping::group_by_category;
use crate::render::labels::LabelSettings;
use crate::render::orbits::OrbitPathSettings;
use crate::render::traces::TraceSettings;
use crate::sweep::SweptAreaAccumulator;
use crate::time::SetDateEvent;
use crate::types::{
    format_julian_date, julian_date_to_ymd, ymd_to_julian_date, SimulationClock, TimeDirection,
};

use super::icons;

/// Time scale presets in simulated days per tick, matching keys 1-4.
const SPEED_PRESETS: [f64; 4] = [1.0, 5.0, 30.0, 100.0];

/// Date entry fields, seeded from the clock on first show.
#[derive(Default)]
pub struct DateField {
    year: i32,
    month: u32,
    day: u32,
    seeded: bool,
}

/// Renders the bottom control panel.
pub fn control_panel(
    mut contexts: EguiContexts,
    mut clock: ResMut<SimulationClock>,
    mut date_field: Local<DateField>,
    mut set_date: EventWriter<SetDateEvent>,
    mut labels: ResMut<LabelSettings>,
    mut traces: ResMut<TraceSettings>,
    mut orbits: ResMut<OrbitPathSettings>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    if !date_field.seeded {
        let (year, month, day) = julian_date_to_ymd(clock.current_jd);
        *date_field = DateField {
            year,
            month,
            day,
            seeded: true,
        };
    }

    egui::TopBottomPanel::bottom("control_panel")
        .frame(
            egui::Frame::new()
                .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 30, 220))
                .inner_margin(egui::Margin::symmetric(16, 8)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                // Play/Pause
                let icon = if clock.playing { icons::PAUSE } else { icons::PLAY };
                if ui
                    .button(icon)
                    .on_hover_text(if clock.playing { "Pause (Space)" } else { "Play (Space)" })
                    .clicked()
                {
                    clock.playing = !clock.playing;
                }

                // Reverse direction
                let reversed = clock.direction == TimeDirection::Backward;
                if ui
                    .selectable_label(reversed, icons::REWIND)
                    .on_hover_text("Reverse time (R)")
                    .clicked()
                {
                    clock.direction = clock.direction.reversed();
                }

                ui.separator();

                // Date readout
                ui.label(
                    egui::RichText::new(format!(
                        "{} {}",
                        icons::CLOCK,
                        format_julian_date(clock.current_jd)
                    ))
                    .monospace(),
                );

                ui.separator();

                // Time scale presets (mutually exclusive)
                ui.label("Speed:");
                for (index, scale) in SPEED_PRESETS.iter().enumerate() {
                    let label = format!("{}d", *scale as i32);
                    let is_selected = (clock.scale - scale).abs() < 0.01;
                    if ui
                        .selectable_label(is_selected, label)
                        .on_hover_text(format!("{} days per tick ({})", scale, index + 1))
                        .clicked()
                    {
                        clock.scale = *scale;
                    }
                }

                ui.separator();

                // Date jump
                ui.label("Date:");
                ui.add(egui::DragValue::new(&mut date_field.year).range(1900..=2100));
                ui.add(egui::DragValue::new(&mut date_field.month).range(1..=12));
                ui.add(egui::DragValue::new(&mut date_field.day).range(1..=31));
                if ui.button("Go").on_hover_text("Jump to date").clicked() {
                    let jd =
                        ymd_to_julian_date(date_field.year, date_field.month, date_field.day);
                    set_date.write(SetDateEvent(jd));
                }

                ui.separator();

                // Overlay toggles. Copies avoid tripping resource change
                // detection on frames where nothing was clicked.
                let mut labels_visible = labels.visible;
                ui.checkbox(&mut labels_visible, "Labels")
                    .on_hover_text("Toggle body labels (L)");
                if labels_visible != labels.visible {
                    labels.visible = labels_visible;
                }

                let mut traces_enabled = traces.enabled;
                ui.checkbox(&mut traces_enabled, "Traces");
                if traces_enabled != traces.enabled {
                    traces.enabled = traces_enabled;
                }

                let mut orbits_visible = orbits.visible;
                ui.checkbox(&mut orbits_visible, "Orbits");
                if orbits_visible != orbits.visible {
                    orbits.visible = orbits_visible;
                }
            });
        });
}

/// Floating window demonstrating Kepler's second law.
///
/// Pick an orbiting body; the overlay accumulates the area its radius
/// vector sweeps in each eighth of the orbital period. The per-phase
/// numbers converging to the same value is the law.
pub fn sweep_panel(
    mut contexts: EguiContexts,
    mut accumulator: ResMut<SweptAreaAccumulator>,
    mut bodies: Query<(Entity, &mut CelestialBody)>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let tracked = accumulator.tracked();
    let tracked_name = tracked
        .and_then(|entity| bodies.get(entity).ok())
        .map(|(_, body)| body.name.clone())
        .unwrap_or_else(|| "None".to_string());

    // Only bodies with a known period can demonstrate the law
    let groups = group_by_category(
        bodies
            .iter()
            .filter(|(_, body)| body.period.is_some()),
    );

    let mut selection: Option<Option<Entity>> = None;

    egui::Window::new("Equal Areas")
        .default_open(false)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .show(ctx, |ui| {
            egui::ComboBox::from_label("Body")
                .selected_text(tracked_name)
                .show_ui(ui, |ui| {
                    if ui.selectable_label(tracked.is_none(), "None").clicked() {
                        selection = Some(None);
                    }
                    for (category, entries) in &groups {
                        ui.label(egui::RichText::new(category.name()).small().strong());
                        for entry in entries {
                            if ui
                                .selectable_label(tracked == Some(entry.entity), &entry.name)
                                .clicked()
                            {
                                selection = Some(Some(entry.entity));
                            }
                        }
                    }
                });

            if accumulator.tracked().is_some() {
                ui.add_space(4.0);
                for (phase, area) in accumulator.phase_area.iter().enumerate() {
                    ui.label(
                        egui::RichText::new(format!("phase {}: {:>10.3}", phase, area))
                            .monospace(),
                    );
                }
                ui.label(
                    egui::RichText::new(format!("total:   {:>10.3}", accumulator.total_area()))
                        .monospace(),
                );

                if ui
                    .button(format!("{} Reset", icons::RESET))
                    .on_hover_text("Clear accumulated areas")
                    .clicked()
                {
                    accumulator.reset();
                }
            }
        });

    if let Some(choice) = selection {
        accumulator.set_tracked(choice);
        // The accumulator samples trace points, so the tracked body must
        // record them
        if let Some(entity) = choice
            && let Ok((_, mut body)) = bodies.get_mut(entity)
            && !body.is_traced
        {
            body.set_traced(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::PHASE_COUNT;

    #[test]
    fn test_speed_presets_match_digit_shortcuts() {
        assert_eq!(SPEED_PRESETS, [1.0, 5.0, 30.0, 100.0]);
    }

    #[test]
    fn test_phase_count_is_stable_for_layout() {
        // The panel lays out one row per phase plus a total row
        assert_eq!(PHASE_COUNT, 8);
    }
}
