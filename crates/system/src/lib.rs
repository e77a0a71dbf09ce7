//! Power-status sources for the widget.
//!
//! Every platform backend implements [`PowerSampler`]; the shell only ever
//! holds a `Box<dyn PowerSampler>`, so tests can swap in a scripted one.

pub mod sysfs;
#[cfg(windows)]
pub mod win32;

pub use sysfs::SysfsSampler;
#[cfg(windows)]
pub use win32::Win32Sampler;

use bettery_core::{PowerSnapshot, SamplerError};

/// A synchronous, fast query of the current battery state.
pub trait PowerSampler: Send + std::fmt::Debug {
    fn sample(&mut self) -> Result<PowerSnapshot, SamplerError>;
}

/// Fallback for platforms without a backend; every sample fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedSampler;

impl PowerSampler for UnsupportedSampler {
    fn sample(&mut self) -> Result<PowerSnapshot, SamplerError> {
        Err(SamplerError::Unavailable(format!(
            "no power backend for {}",
            std::env::consts::OS
        )))
    }
}

/// The sampler for the platform we were built for.
pub fn default_sampler() -> Box<dyn PowerSampler> {
    #[cfg(windows)]
    {
        Box::new(Win32Sampler::new())
    }
    #[cfg(target_os = "linux")]
    {
        Box::new(SysfsSampler::new())
    }
    #[cfg(not(any(windows, target_os = "linux")))]
    {
        Box::new(UnsupportedSampler)
    }
}
