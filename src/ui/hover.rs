//! Hover tooltip showing the picked body's name at the cursor.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::picking::HoverState;

/// Pixel offset of the tooltip from the cursor.
const TOOLTIP_OFFSET: f32 = 12.0;

/// Render the tooltip for the currently hovered body, if any.
pub fn hover_tooltip(mut contexts: EguiContexts, hover: Res<HoverState>) {
    if !hover.visible {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("hover_tooltip"))
        .fixed_pos(egui::pos2(hover.x + TOOLTIP_OFFSET, hover.y + TOOLTIP_OFFSET))
        .order(egui::Order::Tooltip)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(&hover.label).color(egui::Color32::from_rgb(220, 220, 220)),
                    );
                });
        });
}
