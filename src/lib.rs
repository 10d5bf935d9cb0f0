//! A dimmed, blurred "loading" overlay for egui hosts.
//!
//! Build a [`LoadingActivityView`] from a frame and a
//! [`LoadingActivityConfiguration`], then paint it each frame with
//! [`ui::loading::show_loading_overlay`]. Hosts that draw with skia underneath
//! egui can blur their content behind the panel with [`backdrop::blur_panel`].

pub mod backdrop;
pub mod config;
pub mod configuration;
pub mod egui_integration;
pub mod layout;
pub mod style;
pub mod ui;
pub mod view;

pub use configuration::LoadingActivityConfiguration;
pub use layout::{OverlayLayout, TextMeasure};
pub use style::{Axis, BlurStyle, IndicatorStyle};
pub use view::LoadingActivityView;
