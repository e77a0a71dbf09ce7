use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `bettery.toml`.
///
/// Only appearance is configurable; the poll interval is fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WidgetConfig {
    pub window: WindowConfig,
    pub font: FontConfig,
}

/// Window geometry and stacking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Where on the screen the window first appears.
    pub position: ScreenPosition,
    /// Initial always-on-top state (the button toggles it at runtime).
    pub always_on_top: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 104,
            height: 54,
            position: ScreenPosition::Center,
            always_on_top: true,
        }
    }
}

/// Initial window placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenPosition {
    #[default]
    Center,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Font size in points, used by the label and both buttons.
    pub size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self { size: 14.0 }
    }
}
