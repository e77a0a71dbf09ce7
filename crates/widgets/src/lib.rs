pub mod battery;
pub mod controls;

pub use battery::BatteryWidget;
pub use controls::{button_text_size, on_top_label, ControlsWidget};
