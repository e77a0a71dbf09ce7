/// Label text shown before the first reading arrives.
pub const INITIAL_TEXT: &str = "Initializing...";

/// Central application state — the widgets read from this snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Text currently shown in the battery label.
    pub display: String,
    /// Whether the window sits above all others.
    pub on_top: bool,
    /// Set once the close button is pressed; stops the poll timer.
    pub closing: bool,
}

impl AppState {
    pub fn new(on_top: bool) -> Self {
        Self {
            display: INITIAL_TEXT.to_string(),
            on_top,
            closing: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Remaining runtime as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remaining {
    /// Discharging, with this many seconds left.
    Seconds(u32),
    /// Charging, full, on AC, or no estimate available yet.
    Charging,
}

/// A single point-in-time battery reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerSnapshot {
    /// Battery charge level (0–100).
    pub charge_percent: u8,
    pub remaining: Remaining,
}

impl PowerSnapshot {
    /// Build a discharging reading. `charge_percent` is clamped to 100.
    #[must_use]
    pub fn discharging(charge_percent: u8, seconds: u32) -> Self {
        Self {
            charge_percent: charge_percent.min(100),
            remaining: Remaining::Seconds(seconds),
        }
    }

    /// Build a charging reading. `charge_percent` is clamped to 100.
    #[must_use]
    pub fn charging(charge_percent: u8) -> Self {
        Self {
            charge_percent: charge_percent.min(100),
            remaining: Remaining::Charging,
        }
    }

    #[must_use]
    pub fn is_charging(&self) -> bool {
        self.remaining == Remaining::Charging
    }
}
