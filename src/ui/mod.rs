pub mod loading;
pub mod settings;

use crate::config::Config;
use crate::layout::OverlayLayout;
use crate::view::LoadingActivityView;

#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    ConfigChanged,
}

#[derive(Default)]
pub struct UiState {
    pub show_settings: bool,
    pub show_overlay: bool,
    /// Overlay geometry from the last pass, for drawing underneath it.
    pub overlay_layout: Option<OverlayLayout>,
}

/// Build the entire egui UI. Returns a list of actions to process.
pub fn build_ui(
    ctx: &egui::Context,
    ui_state: &mut UiState,
    view: &mut LoadingActivityView,
    config: &mut Config,
) -> Vec<UiAction> {
    let mut actions = Vec::new();

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Axis: {}", view.stack().axis()));
            ui.separator();
            ui.label(format!("Opacity: {:.2}", view.background().opacity()));
            ui.separator();
            ui.label("A: axis | S: settings | Space: overlay | +/-: opacity | Q: quit");
        });
    });

    // Settings window
    actions.extend(settings::show_settings_window(
        ctx,
        &mut ui_state.show_settings,
        config,
    ));

    // Loading overlay over the remaining content rect
    ui_state.overlay_layout = if ui_state.show_overlay {
        view.set_frame(ctx.available_rect());
        Some(loading::show_loading_overlay(ctx, view))
    } else {
        None
    };

    actions
}
