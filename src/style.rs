use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction in which the indicator and the message are stacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn toggled(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "Horizontal"),
            Axis::Vertical => write!(f, "Vertical"),
        }
    }
}

/// Visual variant of the spinning activity indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IndicatorStyle {
    #[default]
    Light,
    Gray,
    LargeLight,
}

impl IndicatorStyle {
    /// Edge length of the indicator's square bounds, in points.
    pub fn size(&self) -> f32 {
        match self {
            IndicatorStyle::Light | IndicatorStyle::Gray => 20.0,
            IndicatorStyle::LargeLight => 37.0,
        }
    }

    pub fn color(&self) -> egui::Color32 {
        match self {
            IndicatorStyle::Light | IndicatorStyle::LargeLight => egui::Color32::WHITE,
            IndicatorStyle::Gray => egui::Color32::GRAY,
        }
    }
}

impl fmt::Display for IndicatorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorStyle::Light => write!(f, "Light"),
            IndicatorStyle::Gray => write!(f, "Gray"),
            IndicatorStyle::LargeLight => write!(f, "Large Light"),
        }
    }
}

pub const INDICATOR_STYLES: &[IndicatorStyle] = &[
    IndicatorStyle::Light,
    IndicatorStyle::Gray,
    IndicatorStyle::LargeLight,
];

/// Frosted-glass material of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlurStyle {
    Light,
    Regular,
    #[default]
    Prominent,
    Dark,
}

impl BlurStyle {
    /// Tint painted over the blurred backdrop.
    pub fn tint(&self) -> egui::Color32 {
        match self {
            BlurStyle::Light => egui::Color32::from_rgba_unmultiplied(250, 250, 250, 150),
            BlurStyle::Regular => egui::Color32::from_rgba_unmultiplied(200, 200, 205, 170),
            BlurStyle::Prominent => egui::Color32::from_rgba_unmultiplied(150, 150, 158, 205),
            BlurStyle::Dark => egui::Color32::from_rgba_unmultiplied(28, 28, 30, 190),
        }
    }

    /// Gaussian sigma of the backdrop blur, in points.
    pub fn sigma(&self) -> f32 {
        match self {
            BlurStyle::Light | BlurStyle::Dark => 10.0,
            BlurStyle::Regular => 12.0,
            BlurStyle::Prominent => 15.0,
        }
    }
}

impl fmt::Display for BlurStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlurStyle::Light => write!(f, "Light"),
            BlurStyle::Regular => write!(f, "Regular"),
            BlurStyle::Prominent => write!(f, "Prominent"),
            BlurStyle::Dark => write!(f, "Dark"),
        }
    }
}

pub const BLUR_STYLES: &[BlurStyle] = &[
    BlurStyle::Light,
    BlurStyle::Regular,
    BlurStyle::Prominent,
    BlurStyle::Dark,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(IndicatorStyle::default(), IndicatorStyle::Light);
        assert_eq!(BlurStyle::default(), BlurStyle::Prominent);
    }

    #[test]
    fn test_large_indicator_is_bigger() {
        assert!(IndicatorStyle::LargeLight.size() > IndicatorStyle::Light.size());
        assert_eq!(IndicatorStyle::Gray.size(), IndicatorStyle::Light.size());
    }

    #[test]
    fn test_axis_toggle() {
        assert_eq!(Axis::Horizontal.toggled(), Axis::Vertical);
        assert_eq!(Axis::Vertical.toggled().toggled(), Axis::Vertical);
    }
}
