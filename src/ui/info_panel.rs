//! Bottom info panel: static body facts plus the live telemetry readout.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::telemetry::TelemetrySnapshot;
use crate::types::BodyKind;

/// Static facts shown alongside the live telemetry.
struct BodyFacts {
    mass: &'static str,
    radius: &'static str,
    orbital_period: &'static str,
}

fn facts(kind: BodyKind) -> BodyFacts {
    match kind {
        BodyKind::Earth => BodyFacts {
            mass: "5.97 x 10^24 kg",
            radius: "6,371 km",
            orbital_period: "365.26 days",
        },
        BodyKind::Moon => BodyFacts {
            mass: "7.34 x 10^22 kg",
            radius: "1,737.1 km",
            orbital_period: "27.32 days",
        },
    }
}

/// Render the bottom panel with one column per body.
pub fn info_panel(mut contexts: EguiContexts, snapshot: Res<TelemetrySnapshot>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let panel_frame = egui::Frame::NONE
        .fill(egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180))
        .inner_margin(egui::Margin::same(12));

    egui::TopBottomPanel::bottom("info_panel")
        .frame(panel_frame)
        .show(ctx, |ui| {
            ui.columns(2, |columns| {
                for (column, kind) in columns.iter_mut().zip([BodyKind::Earth, BodyKind::Moon]) {
                    body_column(column, kind, &snapshot);
                }
            });
        });
}

fn body_column(ui: &mut egui::Ui, kind: BodyKind, snapshot: &TelemetrySnapshot) {
    let facts = facts(kind);
    let telemetry = snapshot.get(kind);

    ui.heading(kind.name());
    ui.label(format!("Mass: {}", facts.mass));
    ui.label(format!("Radius: {}", facts.radius));
    ui.label(format!("Orbital Period: {}", facts.orbital_period));
    ui.label(format!("Rotation: {}", telemetry.rotation));
    ui.label(format!("Position: {}", telemetry.position));
}
