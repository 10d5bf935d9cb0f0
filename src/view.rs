use egui::{Color32, FontId, Rect};

use crate::configuration::LoadingActivityConfiguration;
use crate::layout::{self, LayoutInput, OverlayLayout, TextMeasure, PANEL_CORNER_RADIUS};
use crate::style::{Axis, BlurStyle, IndicatorStyle};

/// Full-bleed black layer that dims whatever is behind the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundLayer {
    opacity: f32,
}

impl BackgroundLayer {
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Fill colour; out-of-range opacity is clamped here and nowhere else.
    pub fn color(&self) -> Color32 {
        let alpha = (self.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color32::from_black_alpha(alpha)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityIndicator {
    style: IndicatorStyle,
    animating: bool,
}

impl ActivityIndicator {
    fn new(style: IndicatorStyle) -> Self {
        Self {
            style,
            animating: false,
        }
    }

    fn start_animating(&mut self) {
        self.animating = true;
    }

    pub fn style(&self) -> IndicatorStyle {
        self.style
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageLabel {
    text: String,
    font: FontId,
    color: Color32,
}

impl MessageLabel {
    /// Line cap of the message; `None` means unlimited.
    pub const MAX_LINES: Option<usize> = None;

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> &FontId {
        &self.font
    }

    pub fn color(&self) -> Color32 {
        self.color
    }
}

/// Holds the label with its edges pinned to the wrapper's edges.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelWrapper {
    label: MessageLabel,
}

impl LabelWrapper {
    pub fn label(&self) -> &MessageLabel {
        &self.label
    }

    pub fn insets(&self) -> egui::Margin {
        egui::Margin::ZERO
    }
}

/// Indicator followed by the label wrapper, centered on the cross axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack {
    axis: Axis,
    spacing: f32,
    indicator: ActivityIndicator,
    label_wrapper: LabelWrapper,
}

impl Stack {
    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn alignment(&self) -> egui::Align {
        egui::Align::Center
    }

    pub fn indicator(&self) -> &ActivityIndicator {
        &self.indicator
    }

    pub fn label_wrapper(&self) -> &LabelWrapper {
        &self.label_wrapper
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlurredPanel {
    style: BlurStyle,
    stack: Stack,
}

impl BlurredPanel {
    pub fn style(&self) -> BlurStyle {
        self.style
    }

    pub fn corner_radius(&self) -> f32 {
        PANEL_CORNER_RADIUS
    }

    pub fn clips_to_bounds(&self) -> bool {
        true
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }
}

/// A dimmed, full-bleed overlay with a blurred panel holding a spinner and a message.
///
/// The element tree is built once in [`LoadingActivityView::new`] and never
/// changes. Only the frame can be updated, which moves and resizes the
/// geometry on the next [`layout`](Self::layout).
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingActivityView {
    frame: Rect,
    background: BackgroundLayer,
    panel: BlurredPanel,
}

impl LoadingActivityView {
    pub fn new(frame: Rect, configuration: LoadingActivityConfiguration) -> Self {
        let LoadingActivityConfiguration {
            message,
            font,
            axis,
            spacing,
            overlay_opacity,
            text_color,
            indicator_style,
            blur_style,
        } = configuration;

        let mut indicator = ActivityIndicator::new(indicator_style);
        indicator.start_animating();

        let label_wrapper = LabelWrapper {
            label: MessageLabel {
                text: message,
                font,
                color: text_color,
            },
        };

        let stack = Stack {
            axis,
            spacing,
            indicator,
            label_wrapper,
        };

        log::debug!(
            "Built loading activity view: frame {:?}, axis {}, opacity {}",
            frame,
            axis,
            overlay_opacity
        );

        Self {
            frame,
            background: BackgroundLayer {
                opacity: overlay_opacity,
            },
            panel: BlurredPanel {
                style: blur_style,
                stack,
            },
        }
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Host resize. Structure is untouched.
    pub fn set_frame(&mut self, frame: Rect) {
        if frame != self.frame {
            log::debug!("Loading activity view frame {:?} -> {:?}", self.frame, frame);
            self.frame = frame;
        }
    }

    pub fn background(&self) -> &BackgroundLayer {
        &self.background
    }

    pub fn panel(&self) -> &BlurredPanel {
        &self.panel
    }

    pub fn stack(&self) -> &Stack {
        &self.panel.stack
    }

    pub fn indicator(&self) -> &ActivityIndicator {
        &self.panel.stack.indicator
    }

    pub fn label(&self) -> &MessageLabel {
        &self.panel.stack.label_wrapper.label
    }

    pub fn is_animating(&self) -> bool {
        self.indicator().is_animating()
    }

    pub fn layout(&self, measure: &impl TextMeasure) -> OverlayLayout {
        let stack = self.stack();
        let label = self.label();
        layout::compute_layout(
            &LayoutInput {
                frame: self.frame,
                axis: stack.axis,
                spacing: stack.spacing,
                alignment: stack.alignment(),
                indicator_size: stack.indicator.style.size(),
                label_insets: stack.label_wrapper.insets(),
                text: &label.text,
                font: &label.font,
            },
            measure,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tests::METRICS;
    use egui::{pos2, vec2};

    fn config(axis: Axis) -> LoadingActivityConfiguration {
        LoadingActivityConfiguration::new(
            "Loading…\nplease wait",
            FontId::proportional(17.0),
            axis,
            8.0,
            0.6,
            Color32::WHITE,
        )
    }

    fn frame() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(320.0, 480.0))
    }

    #[test]
    fn test_tree_reflects_configuration() {
        let view = LoadingActivityView::new(frame(), config(Axis::Vertical));
        assert_eq!(view.label().text(), "Loading…\nplease wait");
        assert_eq!(view.label().color(), Color32::WHITE);
        assert_eq!(view.label().font(), &FontId::proportional(17.0));
        assert_eq!(MessageLabel::MAX_LINES, None);
        assert_eq!(view.background().opacity(), 0.6);
        assert_eq!(view.stack().axis(), Axis::Vertical);
        assert_eq!(view.stack().spacing(), 8.0);
        assert_eq!(view.stack().alignment(), egui::Align::Center);
        assert_eq!(view.indicator().style(), IndicatorStyle::Light);
        assert_eq!(view.panel().corner_radius(), 12.0);
        assert!(view.panel().clips_to_bounds());
        assert_eq!(view.stack().label_wrapper().insets(), egui::Margin::ZERO);
    }

    #[test]
    fn test_label_fills_its_wrapper() {
        let view = LoadingActivityView::new(frame(), config(Axis::Vertical));
        let layout = view.layout(&METRICS);
        assert_eq!(layout.label, layout.label_wrapper);
    }

    #[test]
    fn test_indicator_spins_from_construction() {
        let view = LoadingActivityView::new(frame(), config(Axis::Horizontal));
        assert!(view.is_animating());
    }

    #[test]
    fn test_background_color_clamps_opacity() {
        let mut cfg = config(Axis::Horizontal);
        cfg.overlay_opacity = 2.5;
        let view = LoadingActivityView::new(frame(), cfg.clone());
        assert_eq!(view.background().opacity(), 2.5);
        assert_eq!(view.background().color(), Color32::from_black_alpha(255));

        cfg.overlay_opacity = -1.0;
        let view = LoadingActivityView::new(frame(), cfg);
        assert_eq!(view.background().color(), Color32::TRANSPARENT);
    }

    #[test]
    fn test_axis_swap_changes_only_arrangement() {
        let horizontal = LoadingActivityView::new(frame(), config(Axis::Horizontal));
        let vertical = LoadingActivityView::new(frame(), config(Axis::Vertical));
        assert_eq!(horizontal.label(), vertical.label());
        assert_eq!(horizontal.indicator(), vertical.indicator());

        let h = horizontal.layout(&METRICS);
        let v = vertical.layout(&METRICS);
        assert_eq!(h.indicator.size(), v.indicator.size());
        assert!(h.label.left() >= h.indicator.right());
        assert!(v.label.top() >= v.indicator.bottom());
    }

    #[test]
    fn test_equal_configurations_build_equal_views() {
        let a = LoadingActivityView::new(frame(), config(Axis::Vertical));
        let b = LoadingActivityView::new(frame(), config(Axis::Vertical));
        assert_eq!(a, b);
        assert_eq!(a.layout(&METRICS), b.layout(&METRICS));
    }

    #[test]
    fn test_resize_moves_panel_only() {
        let mut view = LoadingActivityView::new(frame(), config(Axis::Horizontal));
        let before = view.clone();
        view.set_frame(Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0)));

        let layout = view.layout(&METRICS);
        assert_eq!(layout.panel.center(), pos2(400.0, 300.0));
        assert_eq!(view.stack(), before.stack());
        assert_eq!(view.background(), before.background());
    }
}
