use egui::{pos2, vec2, Color32, FontId, Rect};
use loading_activity::ui::loading::show_loading_overlay;
use loading_activity::{Axis, LoadingActivityConfiguration, LoadingActivityView, OverlayLayout};

fn loading_view() -> LoadingActivityView {
    LoadingActivityView::new(
        Rect::from_min_size(pos2(0.0, 0.0), vec2(320.0, 480.0)),
        LoadingActivityConfiguration::new(
            "Loading…",
            FontId::proportional(17.0),
            Axis::Vertical,
            8.0,
            0.6,
            Color32::WHITE,
        ),
    )
}

fn layout_in_egui(view: &LoadingActivityView) -> OverlayLayout {
    let ctx = egui::Context::default();
    let mut layout = None;
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        layout = Some(show_loading_overlay(ctx, view));
    });
    layout.expect("overlay was shown")
}

#[test]
fn vertical_loading_overlay_on_phone_sized_frame() {
    let view = loading_view();

    assert_eq!(view.background().opacity(), 0.6);
    assert_eq!(view.background().color().a(), 153);
    assert_eq!(view.stack().axis(), Axis::Vertical);
    assert_eq!(view.stack().spacing(), 8.0);
    assert_eq!(view.label().text(), "Loading…");
    assert_eq!(view.label().color(), Color32::WHITE);
    assert!(view.is_animating());

    let layout = layout_in_egui(&view);
    assert!(layout.label.width() > 0.0 && layout.label.height() > 0.0);
    assert!(layout.panel.contains_rect(layout.label));
    assert!(layout.panel.contains_rect(layout.indicator));
    assert!((layout.label.top() - layout.indicator.bottom() - 8.0).abs() < 1e-3);
    assert!(layout.panel.width() <= 320.0 - 40.0);
    assert!((layout.panel.center() - pos2(160.0, 240.0)).length() < 1e-3);
}

#[test]
fn panel_stays_inside_frame_for_narrow_hosts() {
    let mut view = loading_view();
    for width in [80.0, 100.0, 150.0, 240.0] {
        view.set_frame(Rect::from_min_size(pos2(0.0, 0.0), vec2(width, 480.0)));
        let layout = layout_in_egui(&view);
        assert!(layout.panel.width() <= width - 40.0, "frame width {width}");
    }
}
