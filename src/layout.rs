//! Geometry pass for the loading overlay.
//!
//! The element tree is fixed, so layout is a single top-down measurement
//! followed by centering. Text measurement is abstracted behind
//! [`TextMeasure`] so the pass runs without a live egui frame.

use egui::{Pos2, Rect, Vec2};

use crate::style::Axis;

/// Padding added around the stack to size the panel.
pub const PANEL_PADDING: Vec2 = Vec2::new(65.0, 40.0);
/// The panel never gets closer than this to the overlay's width.
pub const PANEL_WIDTH_INSET: f32 = 40.0;
pub const PANEL_CORNER_RADIUS: f32 = 12.0;

/// Measures wrapped text.
pub trait TextMeasure {
    /// Size of `text` laid out in `font`, wrapped at `wrap_width`.
    fn measure(&self, text: &str, font: &egui::FontId, wrap_width: f32) -> Vec2;
}

impl TextMeasure for egui::Context {
    fn measure(&self, text: &str, font: &egui::FontId, wrap_width: f32) -> Vec2 {
        if text.is_empty() {
            return Vec2::ZERO;
        }
        self.fonts(|fonts| {
            fonts
                .layout(
                    text.to_owned(),
                    font.clone(),
                    egui::Color32::PLACEHOLDER,
                    wrap_width,
                )
                .size()
        })
    }
}

/// Resolved rectangles for every node of the overlay, in the host's coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLayout {
    /// The overlay itself; also the extent of the dimming layer.
    pub frame: Rect,
    pub panel: Rect,
    pub stack: Rect,
    pub indicator: Rect,
    pub label_wrapper: Rect,
    /// Measured size of the wrapped message; the painted galley fills it exactly.
    pub label: Rect,
    /// Width the label was wrapped at.
    pub wrap_width: f32,
}

/// Inputs of the geometry pass, borrowed from the element tree.
pub struct LayoutInput<'a> {
    pub frame: Rect,
    pub axis: Axis,
    pub spacing: f32,
    /// Cross-axis alignment of the stack's items.
    pub alignment: egui::Align,
    pub indicator_size: f32,
    /// Gap between the label wrapper's edges and the label.
    pub label_insets: egui::Margin,
    pub text: &'a str,
    pub font: &'a egui::FontId,
}

pub fn compute_layout(input: &LayoutInput<'_>, measure: &impl TextMeasure) -> OverlayLayout {
    let frame = input.frame;
    let spacing = input.spacing.max(0.0);
    let indicator = Vec2::splat(input.indicator_size);
    let insets = input.label_insets;
    let inset_size = Vec2::new(
        f32::from(insets.left) + f32::from(insets.right),
        f32::from(insets.top) + f32::from(insets.bottom),
    );

    let panel_max_width = (frame.width() - PANEL_WIDTH_INSET).max(0.0);
    let stack_max_width = (panel_max_width - PANEL_PADDING.x).max(0.0);
    let wrapper_max_width = match input.axis {
        Axis::Horizontal => stack_max_width - indicator.x - spacing,
        Axis::Vertical => stack_max_width,
    };
    // At least an em, so hosts too narrow for the stack don't get one glyph per row
    let wrap_width = (wrapper_max_width - inset_size.x).max(input.font.size);

    let label = measure.measure(input.text, input.font, wrap_width);
    let wrapper = label + inset_size;

    let stack = match input.axis {
        Axis::Horizontal => Vec2::new(
            indicator.x + spacing + wrapper.x,
            indicator.y.max(wrapper.y),
        ),
        Axis::Vertical => Vec2::new(
            indicator.x.max(wrapper.x),
            indicator.y + spacing + wrapper.y,
        ),
    };

    // Only the panel is capped; a stack wider than the cap overflows it evenly and is clipped.
    let panel_size = Vec2::new(
        (stack.x + PANEL_PADDING.x).min(panel_max_width),
        stack.y + PANEL_PADDING.y,
    );
    let panel = Rect::from_center_size(frame.center(), panel_size);
    let stack_rect = Rect::from_center_size(panel.center(), stack);

    let (indicator_rect, wrapper_rect) = match input.axis {
        Axis::Horizontal => {
            let along = |size: f32| align(stack_rect.top(), stack_rect.height(), size, input.alignment);
            let ind = Rect::from_min_size(Pos2::new(stack_rect.left(), along(indicator.y)), indicator);
            let wrp = Rect::from_min_size(Pos2::new(ind.right() + spacing, along(wrapper.y)), wrapper);
            (ind, wrp)
        }
        Axis::Vertical => {
            let along = |size: f32| align(stack_rect.left(), stack_rect.width(), size, input.alignment);
            let ind = Rect::from_min_size(Pos2::new(along(indicator.x), stack_rect.top()), indicator);
            let wrp = Rect::from_min_size(Pos2::new(along(wrapper.x), ind.bottom() + spacing), wrapper);
            (ind, wrp)
        }
    };
    let label_rect = Rect::from_min_size(
        wrapper_rect.min + Vec2::new(f32::from(insets.left), f32::from(insets.top)),
        label,
    );

    OverlayLayout {
        frame,
        panel,
        stack: stack_rect,
        indicator: indicator_rect,
        label_wrapper: wrapper_rect,
        label: label_rect,
        wrap_width,
    }
}

fn align(start: f32, available: f32, size: f32, alignment: egui::Align) -> f32 {
    match alignment {
        egui::Align::Min => start,
        egui::Align::Center => start + (available - size) / 2.0,
        egui::Align::Max => start + available - size,
    }
}

/// An axis-aligned rect whose corners sit on or inside the rounded outline of `rect`.
///
/// egui clips to rectangles only; clipping to this keeps content out of the
/// cut-off corners.
pub fn rounded_content_clip(rect: Rect, radius: f32) -> Rect {
    let radius = radius.min(rect.width() / 2.0).min(rect.height() / 2.0).max(0.0);
    rect.shrink(radius * (1.0 - std::f32::consts::FRAC_1_SQRT_2))
}
