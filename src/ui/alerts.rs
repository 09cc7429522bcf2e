//! Blocking alert dialog for user-visible failures.
//!
//! Anything that wants the user's attention (an orbit that cannot be
//! drawn, a catalog that failed to load) raises an [`AlertEvent`]; the
//! latest message is shown in a centered modal until dismissed.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use super::icons;

/// A message for the user.
#[derive(Event, Debug, Clone)]
pub struct AlertEvent {
    pub message: String,
}

impl AlertEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The alert currently on screen, if any.
#[derive(Resource, Default, Debug)]
pub struct ActiveAlert(pub Option<String>);

/// Latch incoming alerts; a newer alert replaces the one on screen.
pub fn collect_alerts(mut events: EventReader<AlertEvent>, mut active: ResMut<ActiveAlert>) {
    if let Some(event) = events.read().last() {
        active.0 = Some(event.message.clone());
    }
}

/// Show the active alert as a centered modal window.
pub fn alert_modal(mut contexts: EguiContexts, mut active: ResMut<ActiveAlert>) {
    let Some(message) = active.0.clone() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new(format!("{} Alert", icons::WARNING))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label(&message);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    if dismissed {
        active.0 = None;
    }
}
