pub mod schema;

pub use schema::{FontConfig, ScreenPosition, WidgetConfig, WindowConfig};

use bettery_core::{BetteryError, Result};
use std::path::{Path, PathBuf};

/// Smallest font size the widget can still render legibly.
pub const MIN_FONT_SIZE: f32 = 6.0;

/// Load configuration from a TOML file.  Returns `WidgetConfig::default()` if
/// the file doesn't exist so the widget always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<WidgetConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(WidgetConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| BetteryError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse and validate a TOML document.
pub fn parse(raw: &str) -> Result<WidgetConfig> {
    let config: WidgetConfig =
        toml::from_str(raw).map_err(|e| BetteryError::Config(format!("TOML parse error: {e}")))?;
    validate(&config)?;
    Ok(config)
}

/// Reject values the window cannot be built from.
pub fn validate(config: &WidgetConfig) -> Result<()> {
    if config.window.width == 0 || config.window.height == 0 {
        return Err(BetteryError::Config(format!(
            "window size must be non-zero, got {}x{}",
            config.window.width, config.window.height
        )));
    }
    if !(config.font.size.is_finite() && config.font.size >= MIN_FONT_SIZE) {
        return Err(BetteryError::Config(format!(
            "font size must be at least {MIN_FONT_SIZE}, got {}",
            config.font.size
        )));
    }
    Ok(())
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("bettery").join("bettery.toml")
}
