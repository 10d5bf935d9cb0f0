use std::f32::consts::TAU;

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Stroke};

use crate::layout::{self, OverlayLayout};
use crate::view::{ActivityIndicator, LoadingActivityView};

const SPOKES: usize = 8;
/// Spoke steps per second; one full turn per second.
const STEPS_PER_SECOND: f64 = 8.0;

/// Lay out and paint the overlay on a foreground layer. Returns the layout
/// used so the host can line up anything drawn underneath (e.g. a backdrop blur).
pub fn show_loading_overlay(ctx: &egui::Context, view: &LoadingActivityView) -> OverlayLayout {
    let layout = view.layout(ctx);
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::from("loading_overlay"),
    ));
    let time = ctx.input(|i| i.time);

    paint_overlay(&painter, view, &layout, time);

    if view.is_animating() {
        ctx.request_repaint();
    }
    layout
}

pub fn paint_overlay(painter: &Painter, view: &LoadingActivityView, layout: &OverlayLayout, time: f64) {
    // Dimming layer
    painter.rect_filled(layout.frame, 0.0, view.background().color());

    // Panel material
    let panel = view.panel();
    painter.rect_filled(
        layout.panel,
        CornerRadius::same(panel.corner_radius().round() as u8),
        panel.style().tint(),
    );

    let content = if panel.clips_to_bounds() {
        let clip = layout::rounded_content_clip(layout.panel, panel.corner_radius());
        painter.with_clip_rect(clip.intersect(painter.clip_rect()))
    } else {
        painter.clone()
    };

    paint_indicator(&content, view.indicator(), layout.indicator, time);

    let label = view.label();
    if !label.text().is_empty() {
        let galley = content.layout(
            label.text().to_owned(),
            label.font().clone(),
            label.color(),
            layout.wrap_width,
        );
        content.galley(layout.label.min, galley, label.color());
    }
}

fn paint_indicator(painter: &Painter, indicator: &ActivityIndicator, rect: Rect, time: f64) {
    let style = indicator.style();
    let color = style.color();
    let head = if indicator.is_animating() {
        (time * STEPS_PER_SECOND).floor() as usize % SPOKES
    } else {
        0
    };

    let center = rect.center();
    let outer = rect.width() / 2.0;
    let inner = outer * 0.45;
    let width = outer * 0.22;

    for i in 0..SPOKES {
        let angle = i as f32 / SPOKES as f32 * TAU - TAU / 4.0;
        let dir = egui::vec2(angle.cos(), angle.sin());
        let behind = (head + SPOKES - i) % SPOKES;
        let alpha = 1.0 - behind as f32 / SPOKES as f32 * 0.85;
        painter.line_segment(
            [
                Pos2::new(center.x + dir.x * inner, center.y + dir.y * inner),
                Pos2::new(center.x + dir.x * outer, center.y + dir.y * outer),
            ],
            Stroke::new(width, spoke_color(color, alpha)),
        );
    }
}

fn spoke_color(color: Color32, alpha: f32) -> Color32 {
    color.gamma_multiply(alpha)
}
