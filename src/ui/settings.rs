use crate::config::Config;
use crate::style::{Axis, BLUR_STYLES, INDICATOR_STYLES};
use crate::ui::UiAction;

pub fn show_settings_window(ctx: &egui::Context, show: &mut bool, config: &mut Config) -> Vec<UiAction> {
    let mut actions = Vec::new();

    egui::Window::new("Settings")
        .open(show)
        .resizable(false)
        .default_width(300.0)
        // Above the overlay's foreground layer
        .order(egui::Order::Tooltip)
        .show(ctx, |ui| {
            ui.heading("Loading Overlay");
            ui.separator();

            let overlay = &mut config.overlay;
            let mut changed = false;

            ui.label("Message:");
            changed |= ui.text_edit_multiline(&mut overlay.message).changed();

            ui.horizontal(|ui| {
                ui.label("Font size:");
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut overlay.font.size)
                            .range(8.0..=48.0)
                            .speed(0.5)
                            .suffix(" pt"),
                    )
                    .changed();
            });

            ui.horizontal(|ui| {
                ui.label("Spacing:");
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut overlay.spacing)
                            .range(0.0..=64.0)
                            .speed(1.0),
                    )
                    .changed();
            });

            ui.horizontal(|ui| {
                ui.label("Overlay opacity:");
                changed |= ui
                    .add(egui::Slider::new(&mut overlay.overlay_opacity, 0.0..=1.0))
                    .changed();
            });

            ui.horizontal(|ui| {
                ui.label("Axis:");
                for axis in [Axis::Horizontal, Axis::Vertical] {
                    changed |= ui
                        .radio_value(&mut overlay.axis, axis, axis.to_string())
                        .changed();
                }
            });

            egui::ComboBox::from_label("Indicator")
                .selected_text(overlay.indicator_style.to_string())
                .show_ui(ui, |ui| {
                    for &style in INDICATOR_STYLES {
                        changed |= ui
                            .selectable_value(&mut overlay.indicator_style, style, style.to_string())
                            .changed();
                    }
                });

            egui::ComboBox::from_label("Blur")
                .selected_text(overlay.blur_style.to_string())
                .show_ui(ui, |ui| {
                    for &style in BLUR_STYLES {
                        changed |= ui
                            .selectable_value(&mut overlay.blur_style, style, style.to_string())
                            .changed();
                    }
                });

            ui.horizontal(|ui| {
                ui.label("Text colour:");
                changed |= ui.color_edit_button_srgba(&mut overlay.text_color).changed();
            });

            changed |= ui
                .checkbox(&mut config.backdrop_blur, "Blur host content")
                .changed();

            ui.add_space(8.0);
            if ui.button("Reset to Defaults").clicked() {
                *config = Config::default();
                changed = true;
            }

            if changed {
                config.save();
                actions.push(UiAction::ConfigChanged);
            }
        });

    actions
}
