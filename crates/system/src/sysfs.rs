use crate::PowerSampler;
use bettery_core::{PowerSnapshot, SamplerError};
use std::path::{Path, PathBuf};

/// Where the kernel exposes power-supply devices.
pub const POWER_SUPPLY_ROOT: &str = "/sys/class/power_supply";

/// Reads battery state from the Linux sysfs power-supply interface.
///
/// Uses the first `BAT*` device in name order. Runtime is derived from the
/// energy (µWh / µW) or charge (µAh / µA) counters, whichever pair the
/// driver exposes.
#[derive(Debug, Clone)]
pub struct SysfsSampler {
    root: PathBuf,
}

impl SysfsSampler {
    pub fn new() -> Self {
        Self::with_root(POWER_SUPPLY_ROOT)
    }

    /// Read from an alternate power-supply directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn find_battery(&self) -> Result<PathBuf, SamplerError> {
        let entries = std::fs::read_dir(&self.root).map_err(|e| {
            SamplerError::Unavailable(format!("cannot list '{}': {e}", self.root.display()))
        })?;

        let mut batteries: Vec<PathBuf> = entries
            .flatten()
            .filter(|e| e.file_name().to_string_lossy().starts_with("BAT"))
            .map(|e| e.path())
            .collect();
        batteries.sort();

        batteries.into_iter().next().ok_or(SamplerError::NoBattery)
    }
}

impl Default for SysfsSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerSampler for SysfsSampler {
    fn sample(&mut self) -> Result<PowerSnapshot, SamplerError> {
        let base = self.find_battery()?;
        tracing::trace!("sampling {}", base.display());

        let capacity = read_trimmed(&base.join("capacity"))?;
        let percent = capacity
            .parse::<u8>()
            .map_err(|_| SamplerError::Malformed { field: "capacity", value: capacity.clone() })?;

        let status = read_trimmed(&base.join("status"))?;
        if matches!(status.as_str(), "Charging" | "Full" | "Not charging") {
            return Ok(PowerSnapshot::charging(percent));
        }

        match seconds_remaining(&base) {
            Some(secs) => Ok(PowerSnapshot::discharging(percent, secs)),
            // Discharging but no rate yet (common right after unplugging).
            None => Ok(PowerSnapshot::charging(percent)),
        }
    }
}

/// Remaining seconds from the `*_now` / rate counters, `None` when the
/// driver doesn't report a usable discharge rate.
///
/// Some drivers report `power_now` / `current_now` as negative while
/// discharging, so only the magnitude of the rate is used.
fn seconds_remaining(base: &Path) -> Option<u32> {
    let (left, rate) = read_u64(&base.join("energy_now"))
        .zip(read_rate(&base.join("power_now")))
        .or_else(|| read_u64(&base.join("charge_now")).zip(read_rate(&base.join("current_now"))))?;

    if rate == 0 {
        return None;
    }
    let secs = left.saturating_mul(3600) / rate;
    Some(u32::try_from(secs).unwrap_or(u32::MAX))
}

fn read_trimmed(path: &Path) -> Result<String, SamplerError> {
    Ok(std::fs::read_to_string(path)?.trim().to_string())
}

fn read_u64(path: &Path) -> Option<u64> {
    std::fs::read_to_string(path).ok()?.trim().parse().ok()
}

fn read_rate(path: &Path) -> Option<u64> {
    let raw: i64 = std::fs::read_to_string(path).ok()?.trim().parse().ok()?;
    Some(raw.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bettery_core::Remaining;
    use tempfile::TempDir;

    fn battery(root: &TempDir, name: &str, files: &[(&str, &str)]) {
        let dir = root.path().join(name);
        std::fs::create_dir_all(&dir).unwrap();
        for (file, contents) in files {
            std::fs::write(dir.join(file), format!("{contents}\n")).unwrap();
        }
    }

    #[test]
    fn discharging_from_energy_counters() {
        let root = TempDir::new().unwrap();
        // 30 Wh left at 15 W: two hours.
        battery(&root, "BAT0", &[
            ("capacity", "57"),
            ("status", "Discharging"),
            ("energy_now", "30000000"),
            ("power_now", "15000000"),
        ]);

        let snap = SysfsSampler::with_root(root.path()).sample().unwrap();
        assert_eq!(snap, PowerSnapshot::discharging(57, 7200));
    }

    #[test]
    fn discharging_from_charge_counters() {
        let root = TempDir::new().unwrap();
        battery(&root, "BAT1", &[
            ("capacity", "20"),
            ("status", "Discharging"),
            ("charge_now", "1000000"),
            ("current_now", "4000000"),
        ]);

        let snap = SysfsSampler::with_root(root.path()).sample().unwrap();
        assert_eq!(snap.remaining, Remaining::Seconds(900));
    }

    #[test]
    fn negative_discharge_rate_is_used_as_magnitude() {
        let root = TempDir::new().unwrap();
        battery(&root, "BAT0", &[
            ("capacity", "40"),
            ("status", "Discharging"),
            ("charge_now", "2000000"),
            ("current_now", "-1000000"),
        ]);

        let snap = SysfsSampler::with_root(root.path()).sample().unwrap();
        assert_eq!(snap, PowerSnapshot::discharging(40, 7200));
    }

    #[test]
    fn negative_power_now_is_used_as_magnitude() {
        let root = TempDir::new().unwrap();
        battery(&root, "BAT0", &[
            ("capacity", "75"),
            ("status", "Discharging"),
            ("energy_now", "10000000"),
            ("power_now", "-10000000"),
        ]);

        let snap = SysfsSampler::with_root(root.path()).sample().unwrap();
        assert_eq!(snap.remaining, Remaining::Seconds(3600));
    }

    #[test]
    fn charging_and_full_map_to_charging() {
        for status in ["Charging", "Full", "Not charging"] {
            let root = TempDir::new().unwrap();
            battery(&root, "BAT0", &[("capacity", "99"), ("status", status)]);

            let snap = SysfsSampler::with_root(root.path()).sample().unwrap();
            assert!(snap.is_charging(), "{status}");
        }
    }

    #[test]
    fn zero_rate_has_no_estimate() {
        let root = TempDir::new().unwrap();
        battery(&root, "BAT0", &[
            ("capacity", "80"),
            ("status", "Discharging"),
            ("energy_now", "30000000"),
            ("power_now", "0"),
        ]);

        let snap = SysfsSampler::with_root(root.path()).sample().unwrap();
        assert!(snap.is_charging());
    }

    #[test]
    fn first_battery_wins_and_mains_are_ignored() {
        let root = TempDir::new().unwrap();
        battery(&root, "AC", &[("online", "0")]);
        battery(&root, "BAT1", &[("capacity", "10"), ("status", "Full")]);
        battery(&root, "BAT0", &[("capacity", "42"), ("status", "Full")]);

        let snap = SysfsSampler::with_root(root.path()).sample().unwrap();
        assert_eq!(snap.charge_percent, 42);
    }

    #[test]
    fn no_battery_is_an_error() {
        let root = TempDir::new().unwrap();
        battery(&root, "AC", &[("online", "1")]);

        let err = SysfsSampler::with_root(root.path()).sample().unwrap_err();
        assert!(matches!(err, SamplerError::NoBattery));
    }

    #[test]
    fn missing_root_is_unavailable() {
        let root = TempDir::new().unwrap();
        let err = SysfsSampler::with_root(root.path().join("gone")).sample().unwrap_err();
        assert!(matches!(err, SamplerError::Unavailable(_)));
    }

    #[test]
    fn garbage_capacity_is_malformed() {
        let root = TempDir::new().unwrap();
        battery(&root, "BAT0", &[("capacity", "lots"), ("status", "Discharging")]);

        let err = SysfsSampler::with_root(root.path()).sample().unwrap_err();
        assert!(matches!(err, SamplerError::Malformed { field: "capacity", .. }));
    }
}
