//! Battery widget binary: a small borderless window showing charge and a
//! smoothed runtime estimate. Appearance is read from
//! `~/.config/bettery/bettery.toml` when present; log output follows `RUST_LOG`.

#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("bettery v{} starting", env!("CARGO_PKG_VERSION"));

    bettery_shell::run().map_err(Into::into)
}
