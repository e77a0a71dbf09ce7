use bettery_core::{event::Message, state::AppState};
use iced::{
    widget::{button, text},
    Element,
};

/// Label for the always-on-top toggle in the given state.
pub fn on_top_label(on_top: bool) -> &'static str {
    if on_top { "On Top: ON" } else { "On Top: OFF" }
}

/// Button text runs a little smaller than the label, never below 1 px.
pub fn button_text_size(font_size: f32) -> f32 {
    (font_size - 2.0).max(1.0)
}

/// The "On Top" toggle and the custom close button.
#[derive(Debug, Default)]
pub struct ControlsWidget;

impl ControlsWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn toggle<'a>(&'a self, state: &'a AppState, font_size: f32) -> Element<'a, Message> {
        button(text(on_top_label(state.on_top)).size(button_text_size(font_size)))
            .padding([1, 4])
            .on_press(Message::ToggleOnTop)
            .into()
    }

    pub fn close<'a>(&'a self, font_size: f32) -> Element<'a, Message> {
        button(text("X").size(button_text_size(font_size)))
            .padding([1, 5])
            .style(iced::widget::button::danger)
            .on_press(Message::Close)
            .into()
    }
}
