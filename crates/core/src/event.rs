/// All messages (events) that can flow through the widget's update loop.
///
/// Sources:
/// - Timer subscription → `Tick`
/// - Buttons            → `ToggleOnTop`, `Close`
/// - Label mouse press  → `DragWindow`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Poll-interval timer fired: sample the battery and refresh the label.
    Tick,
    /// Flip the always-on-top window level.
    ToggleOnTop,
    /// Start an interactive window move (the label acts as a caption).
    DragWindow,
    /// Stop the timer and exit.
    Close,
}
