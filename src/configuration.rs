use crate::style::{Axis, BlurStyle, IndicatorStyle};
use serde::{Deserialize, Serialize};

/// Display parameters for a [`LoadingActivityView`](crate::view::LoadingActivityView).
///
/// The value is consumed when the view is built; nothing reads it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadingActivityConfiguration {
    pub message: String,
    pub font: egui::FontId,
    /// Direction of the indicator + message stack.
    pub axis: Axis,
    /// Gap between the indicator and the message.
    pub spacing: f32,
    /// Alpha of the black dimming layer (0.0–1.0). Not validated.
    pub overlay_opacity: f32,
    pub text_color: egui::Color32,
    #[serde(default)]
    pub indicator_style: IndicatorStyle,
    #[serde(default)]
    pub blur_style: BlurStyle,
}

impl LoadingActivityConfiguration {
    pub fn new(
        message: impl Into<String>,
        font: egui::FontId,
        axis: Axis,
        spacing: f32,
        overlay_opacity: f32,
        text_color: egui::Color32,
    ) -> Self {
        Self {
            message: message.into(),
            font,
            axis,
            spacing,
            overlay_opacity,
            text_color,
            indicator_style: IndicatorStyle::default(),
            blur_style: BlurStyle::default(),
        }
    }

    pub fn with_indicator_style(mut self, style: IndicatorStyle) -> Self {
        self.indicator_style = style;
        self
    }

    pub fn with_blur_style(mut self, style: BlurStyle) -> Self {
        self.blur_style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_default_when_not_given() {
        let config = LoadingActivityConfiguration::new(
            "Loading",
            egui::FontId::proportional(17.0),
            Axis::Horizontal,
            8.0,
            0.5,
            egui::Color32::WHITE,
        );
        assert_eq!(config.indicator_style, IndicatorStyle::Light);
        assert_eq!(config.blur_style, BlurStyle::Prominent);
    }

    #[test]
    fn test_deserialize_without_styles() {
        let json = r#"{
            "message": "Syncing\nplease wait",
            "font": { "size": 15.0, "family": "Proportional" },
            "axis": "Vertical",
            "spacing": 4.0,
            "overlay_opacity": 0.3,
            "text_color": [255, 255, 255, 255]
        }"#;
        let config: LoadingActivityConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(config.message, "Syncing\nplease wait");
        assert_eq!(config.axis, Axis::Vertical);
        assert_eq!(config.font.size, 15.0);
        assert_eq!(config.indicator_style, IndicatorStyle::Light);
        assert_eq!(config.blur_style, BlurStyle::Prominent);
    }

    #[test]
    fn test_out_of_range_opacity_is_kept() {
        let config = LoadingActivityConfiguration::new(
            "",
            egui::FontId::proportional(17.0),
            Axis::Horizontal,
            0.0,
            1.7,
            egui::Color32::BLACK,
        );
        assert_eq!(config.overlay_opacity, 1.7);
    }
}
