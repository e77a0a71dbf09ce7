use bettery_core::{event::Message, state::AppState};
use iced::{
    widget::{mouse_area, text},
    Element,
};

/// Shows the estimator's two-line text (charge, then runtime or charging).
///
/// Pressing anywhere on the label starts a window drag, since the window
/// has no title bar.
#[derive(Debug, Default)]
pub struct BatteryWidget;

impl BatteryWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, font_size: f32) -> Element<'a, Message> {
        mouse_area(text(state.display.as_str()).size(font_size))
            .on_press(Message::DragWindow)
            .into()
    }
}
