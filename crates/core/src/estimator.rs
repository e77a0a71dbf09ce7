//! Moving-average smoothing of the platform's "time remaining" figure.
//!
//! Platforms report remaining runtime in coarse, jittery steps. The estimator
//! keeps the last [`HISTORY_CAPACITY`] *distinct* readings (in whole minutes)
//! and displays their integer mean. A reading equal to the previous one is
//! skipped, and charging periods never enter the history.

use crate::error::SamplerError;
use crate::state::{PowerSnapshot, Remaining};
use std::collections::VecDeque;
use std::fmt;

/// Number of runtime samples kept for averaging.
pub const HISTORY_CAPACITY: usize = 10;

/// Text shown when the power status cannot be read.
pub const UNAVAILABLE_TEXT: &str = "Unable to retrieve info";

/// Bounded, oldest-first window of runtime samples with a running sum.
///
/// Invariants held after every mutation:
/// - `len() <= capacity()`
/// - `sum() == entries().sum()`
/// - no two adjacent entries appended through [`record`](Self::record) are equal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeHistory {
    entries:  VecDeque<u32>,
    sum:      u64,
    capacity: usize,
}

impl RuntimeHistory {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// A zero capacity is bumped to one so the average is always defined
    /// after the first recorded sample.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            sum: 0,
            capacity,
        }
    }

    /// Seed a history with `entries` exactly as given, oldest first.
    ///
    /// Unlike [`record`](Self::record) this does not skip repeated values, so
    /// it can rebuild any window state. Entries beyond `capacity` evict the
    /// oldest ones.
    pub fn from_entries(capacity: usize, entries: impl IntoIterator<Item = u32>) -> Self {
        let mut history = Self::with_capacity(capacity);
        for minutes in entries {
            history.push(minutes);
        }
        history
    }

    /// Record a sample unless it equals the most recent one.
    ///
    /// Returns `true` when the sample was appended.
    pub fn record(&mut self, minutes: u32) -> bool {
        if self.entries.back() == Some(&minutes) {
            return false;
        }
        self.push(minutes);
        true
    }

    /// Append, evicting the oldest sample first if at capacity.
    fn push(&mut self, minutes: u32) {
        if self.entries.len() == self.capacity {
            if let Some(oldest) = self.entries.pop_front() {
                self.sum -= u64::from(oldest);
            }
        }
        self.entries.push_back(minutes);
        self.sum += u64::from(minutes);
    }

    /// Integer mean of the window, `None` while empty.
    pub fn average(&self) -> Option<u32> {
        if self.entries.is_empty() {
            return None;
        }
        // The mean never exceeds the largest entry, so it fits in u32.
        Some((self.sum / self.entries.len() as u64) as u32)
    }

    pub fn last(&self) -> Option<u32> {
        self.entries.back().copied()
    }

    pub fn entries(&self) -> impl ExactSizeIterator<Item = u32> + '_ {
        self.entries.iter().copied()
    }

    pub fn sum(&self) -> u64 {
        self.sum
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for RuntimeHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// What the label should say after one sample has been processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    /// The sampler failed.
    Unavailable,
    /// On AC power; no runtime estimate.
    Charging { charge_percent: u8 },
    /// On battery, with the smoothed runtime in minutes.
    Discharging { charge_percent: u8, avg_minutes: u32 },
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Reading::Unavailable => f.write_str(UNAVAILABLE_TEXT),
            Reading::Charging { charge_percent } => {
                write!(f, "Charge: {charge_percent}%\n(Charging)")
            }
            Reading::Discharging { charge_percent, avg_minutes } => {
                write!(
                    f,
                    "Charge: {charge_percent}%\nTime: {}",
                    format_runtime(avg_minutes)
                )
            }
        }
    }
}

/// Format minutes as `"{h}h {m}m"`, always with both parts (e.g. `"1h 0m"`).
pub fn format_runtime(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Turns raw power snapshots into smoothed display text.
#[derive(Debug, Clone, Default)]
pub struct RuntimeEstimator {
    history: RuntimeHistory,
}

impl RuntimeEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(history: RuntimeHistory) -> Self {
        Self { history }
    }

    pub fn history(&self) -> &RuntimeHistory {
        &self.history
    }

    /// Feed one sampler result through the record policy.
    ///
    /// Failures and charging readings leave the history untouched; a
    /// discharge reading is recorded (minus consecutive repeats) before the
    /// average is taken.
    pub fn record(&mut self, sample: Result<PowerSnapshot, SamplerError>) -> Reading {
        let snapshot = match sample {
            Ok(s) => s,
            Err(_) => return Reading::Unavailable,
        };

        let charge_percent = snapshot.charge_percent;
        let seconds = match snapshot.remaining {
            Remaining::Charging => return Reading::Charging { charge_percent },
            Remaining::Seconds(s) => s,
        };

        self.history.record(seconds / 60);

        match self.history.average() {
            Some(avg_minutes) => Reading::Discharging { charge_percent, avg_minutes },
            // record() above guarantees at least one entry.
            None => Reading::Unavailable,
        }
    }

    /// [`record`](Self::record), rendered as the two-line label text.
    pub fn record_and_format(&mut self, sample: Result<PowerSnapshot, SamplerError>) -> String {
        self.record(sample).to_string()
    }
}
