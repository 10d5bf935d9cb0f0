use skia_safe::canvas::SaveLayerRec;
use skia_safe::{image_filters, Canvas, ClipOp, RRect, Rect, TileMode};

use crate::layout::{OverlayLayout, PANEL_CORNER_RADIUS};
use crate::style::BlurStyle;

/// Blur whatever has already been drawn on `canvas` inside the overlay panel.
///
/// `layout` is in egui points; the canvas is in physical pixels. Call this
/// after the host content and before egui paints the overlay on top.
pub fn blur_panel(
    canvas: &Canvas,
    layout: &OverlayLayout,
    style: BlurStyle,
    pixels_per_point: f32,
) {
    let panel = layout.panel;
    if panel.width() <= 0.0 || panel.height() <= 0.0 {
        return;
    }

    let sigma = style.sigma() * pixels_per_point;
    let Some(filter) = image_filters::blur((sigma, sigma), TileMode::Clamp, None, None) else {
        log::warn!("Failed to create backdrop blur filter (sigma {})", sigma);
        return;
    };

    let rect = Rect::from_ltrb(
        panel.left() * pixels_per_point,
        panel.top() * pixels_per_point,
        panel.right() * pixels_per_point,
        panel.bottom() * pixels_per_point,
    );
    let radius = PANEL_CORNER_RADIUS * pixels_per_point;
    let rrect = RRect::new_rect_xy(rect, radius, radius);

    canvas.save();
    canvas.clip_rrect(rrect, ClipOp::Intersect, true);
    canvas.save_layer(&SaveLayerRec::default().bounds(&rect).backdrop(&filter));
    canvas.restore();
    canvas.restore();
}

#[cfg(test)]
mod tests {
    use super::*;
    use skia_safe::{surfaces, Color, Paint};

    fn layout_with_panel(panel: egui::Rect) -> OverlayLayout {
        OverlayLayout {
            frame: egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(200.0, 200.0)),
            panel,
            stack: panel,
            indicator: panel,
            label_wrapper: panel,
            label: panel,
            wrap_width: 0.0,
        }
    }

    #[test]
    fn test_blur_softens_edges_inside_panel_only() {
        let mut surface = surfaces::raster_n32_premul((200, 200)).unwrap();
        let canvas = surface.canvas();
        canvas.clear(Color::WHITE);
        let mut black = Paint::default();
        black.set_color(Color::BLACK);
        // Hard vertical edge at x = 100 across the whole height
        canvas.draw_rect(Rect::from_ltrb(100.0, 0.0, 200.0, 200.0), &black);

        let panel = egui::Rect::from_min_max(egui::pos2(40.0, 60.0), egui::pos2(160.0, 140.0));
        blur_panel(canvas, &layout_with_panel(panel), BlurStyle::Regular, 1.0);

        let pixmap = surface.image_snapshot();
        let pixmap = pixmap.peek_pixels().unwrap();

        // Just left of the edge, inside the panel: pulled towards grey
        let inside = pixmap.get_color((97, 100));
        assert!(inside.r() < 250, "inside pixel {:?}", inside);

        // Same column, above the panel: untouched
        let outside = pixmap.get_color((97, 10));
        assert_eq!(outside, Color::WHITE);
    }

    #[test]
    fn test_empty_panel_is_noop() {
        let mut surface = surfaces::raster_n32_premul((50, 50)).unwrap();
        let canvas = surface.canvas();
        canvas.clear(Color::WHITE);
        let panel = egui::Rect::from_min_size(egui::pos2(10.0, 10.0), egui::Vec2::ZERO);
        blur_panel(canvas, &layout_with_panel(panel), BlurStyle::Prominent, 2.0);

        let image = surface.image_snapshot();
        let pixmap = image.peek_pixels().unwrap();
        assert_eq!(pixmap.get_color((10, 10)), Color::WHITE);
    }
}
