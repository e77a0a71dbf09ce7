use crate::PowerSampler;
use bettery_core::{PowerSnapshot, SamplerError};
use windows::Win32::System::Power::{GetSystemPowerStatus, SYSTEM_POWER_STATUS};

/// `BatteryLifePercent` value meaning "unknown".
const PERCENT_UNKNOWN: u8 = 255;
/// `BatteryLifeTime` value meaning "unknown" (charging or on AC).
const LIFETIME_UNKNOWN: u32 = u32::MAX;

/// Reads battery state via `GetSystemPowerStatus`.
#[derive(Debug, Clone, Default)]
pub struct Win32Sampler;

impl Win32Sampler {
    pub fn new() -> Self {
        Self
    }
}

impl PowerSampler for Win32Sampler {
    fn sample(&mut self) -> Result<PowerSnapshot, SamplerError> {
        let mut status = SYSTEM_POWER_STATUS::default();
        // SAFETY: `status` is a valid, writable SYSTEM_POWER_STATUS.
        unsafe { GetSystemPowerStatus(&mut status) }
            .map_err(|e| SamplerError::Unavailable(e.to_string()))?;

        snapshot_from(status.BatteryLifePercent, status.BatteryLifeTime)
    }
}

fn snapshot_from(percent: u8, lifetime: u32) -> Result<PowerSnapshot, SamplerError> {
    if percent == PERCENT_UNKNOWN {
        return Err(SamplerError::Malformed {
            field: "BatteryLifePercent",
            value: percent.to_string(),
        });
    }
    if lifetime == LIFETIME_UNKNOWN {
        return Ok(PowerSnapshot::charging(percent));
    }
    Ok(PowerSnapshot::discharging(percent, lifetime))
}
