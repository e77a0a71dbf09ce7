//! Desktop window for `bettery`.
//!
//! Owns the Iced application loop: one recurring poll timer that samples the
//! battery and feeds the estimator, plus the always-on-top toggle and the
//! close button. All mutable state lives in [`App`].

use bettery_config::{default_path, load as load_config, ScreenPosition, WidgetConfig, WindowConfig};
use bettery_core::{AppState, Message, RuntimeEstimator};
use bettery_system::{default_sampler, PowerSampler};
use bettery_widgets::{BatteryWidget, ControlsWidget};
use iced::{
    widget::{column, container, row},
    window::{self, Level},
    Alignment, Element, Length, Point, Size, Subscription, Task,
};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Battery poll interval.
pub const POLL_INTERVAL: Duration = Duration::from_millis(2_000);

/// Gap between a corner-placed window and the screen edge.
const EDGE_MARGIN: f32 = 8.0;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the widget window and run until the close button is pressed.
pub fn run() -> iced::Result {
    let config = load_settings();
    let window = window_settings(&config.window);

    iced::application(move || App::boot(&config), App::update, App::view)
        .title("bettery")
        .subscription(App::subscription)
        .window(window)
        .run()
}

fn load_settings() -> WidgetConfig {
    match load_config(default_path()) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("{e}; using defaults");
            WidgetConfig::default()
        }
    }
}

// ── State ─────────────────────────────────────────────────────────────────────

pub struct App {
    state:     AppState,
    estimator: RuntimeEstimator,
    sampler:   Box<dyn PowerSampler>,
    font_size: f32,
    battery:   BatteryWidget,
    controls:  ControlsWidget,
}

impl App {
    fn boot(config: &WidgetConfig) -> (Self, Task<Message>) {
        let app = Self::with_sampler(default_sampler(), config);

        // Take a reading right away instead of waiting a full interval.
        (app, Task::done(Message::Tick))
    }

    /// Build the application around an explicit sampler.
    pub fn with_sampler(sampler: Box<dyn PowerSampler>, config: &WidgetConfig) -> Self {
        Self {
            state:     AppState::new(config.window.always_on_top),
            estimator: RuntimeEstimator::new(),
            sampler,
            font_size: config.font.size,
            battery:   BatteryWidget::new(),
            controls:  ControlsWidget::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn estimator(&self) -> &RuntimeEstimator {
        &self.estimator
    }

    // ── Update ────────────────────────────────────────────────────────────────

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                // A tick can still be queued when the timer is cancelled.
                if !self.state.closing {
                    self.refresh();
                }
                Task::none()
            }
            Message::ToggleOnTop => {
                self.state.on_top = !self.state.on_top;
                let level = if self.state.on_top { Level::AlwaysOnTop } else { Level::Normal };
                debug!("always-on-top: {}", self.state.on_top);
                window::latest().and_then(move |id| window::set_level(id, level))
            }
            Message::DragWindow => window::latest().and_then(window::drag),
            Message::Close => {
                info!("close requested; stopping poll timer");
                self.state.closing = true;
                iced::exit()
            }
        }
    }

    fn refresh(&mut self) {
        let sample = self.sampler.sample();
        if let Err(e) = &sample {
            debug!("battery sample failed: {e}");
        }
        self.state.display = self.estimator.record_and_format(sample);
    }

    // ── View ──────────────────────────────────────────────────────────────────

    pub fn view(&self) -> Element<'_, Message> {
        let fs = self.font_size;

        let top = row![
            container(self.battery.view(&self.state, fs)).width(Length::Fill),
            self.controls.close(fs),
        ]
        .align_y(Alignment::Start);

        column![top, self.controls.toggle(&self.state, fs)]
            .spacing(2)
            .padding(2)
            .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    pub fn subscription(&self) -> Subscription<Message> {
        if self.state.closing {
            return Subscription::none();
        }
        iced::time::every(POLL_INTERVAL).map(|_| Message::Tick)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn window_settings(cfg: &WindowConfig) -> window::Settings {
    window::Settings {
        size: Size::new(cfg.width as f32, cfg.height as f32),
        position: screen_position(cfg.position),
        resizable: false,
        decorations: false,
        level: if cfg.always_on_top { Level::AlwaysOnTop } else { Level::Normal },
        ..Default::default()
    }
}

fn screen_position(pos: ScreenPosition) -> window::Position {
    match pos {
        ScreenPosition::Center      => window::Position::Centered,
        ScreenPosition::TopLeft     => window::Position::SpecificWith(top_left),
        ScreenPosition::TopRight    => window::Position::SpecificWith(top_right),
        ScreenPosition::BottomLeft  => window::Position::SpecificWith(bottom_left),
        ScreenPosition::BottomRight => window::Position::SpecificWith(bottom_right),
    }
}

fn top_left(_window: Size, _monitor: Size) -> Point {
    Point::new(EDGE_MARGIN, EDGE_MARGIN)
}

fn top_right(window: Size, monitor: Size) -> Point {
    Point::new(monitor.width - window.width - EDGE_MARGIN, EDGE_MARGIN)
}

fn bottom_left(window: Size, monitor: Size) -> Point {
    Point::new(EDGE_MARGIN, monitor.height - window.height - EDGE_MARGIN)
}

fn bottom_right(window: Size, monitor: Size) -> Point {
    Point::new(
        monitor.width - window.width - EDGE_MARGIN,
        monitor.height - window.height - EDGE_MARGIN,
    )
}
