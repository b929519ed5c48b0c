//! egui-based UI: telemetry info panel and hover tooltip.

mod hover;
mod info_panel;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPlugin, EguiPrimaryContextPass};

use crate::camera::PointerCapture;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin::default())
            .init_resource::<PointerCapture>()
            .add_systems(Update, track_pointer_capture)
            .add_systems(
                EguiPrimaryContextPass,
                (info_panel::info_panel, hover::hover_tooltip),
            );
    }
}

/// Record whether egui wants the pointer this frame, so the camera input
/// systems can yield to panel interaction.
fn track_pointer_capture(mut contexts: EguiContexts, mut capture: ResMut<PointerCapture>) {
    capture.captured = contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_pointer_input())
        .unwrap_or(false);
}
