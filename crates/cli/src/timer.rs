// SPDX-License-Identifier: MIT

//! Lap timer for coarse phase timings.
//!
//! Accumulates elapsed time across start/stop laps; `Display` shows
//! the mean lap. Durations format at the finest unit that keeps the
//! value above five of the next coarser one, so 3s prints as 3000ms.

use std::fmt;
use std::time::{Duration, Instant};

/// A restartable lap timer.
#[derive(Debug)]
pub struct Timer {
    total: Duration,
    laps: u32,
    started: Instant,
}

impl Timer {
    /// Starts a new timer with its first lap running.
    pub fn start() -> Self {
        Self {
            total: Duration::ZERO,
            laps: 0,
            started: Instant::now(),
        }
    }

    /// Restarts the current lap without touching the accumulated
    /// total.
    pub fn restart(&mut self) {
        self.started = Instant::now();
    }

    /// Stops the current lap, adding its elapsed time to the total.
    pub fn stop(&mut self) {
        self.total += self.started.elapsed();
        self.laps += 1;
    }

    /// Number of completed laps.
    pub fn laps(&self) -> u32 {
        self.laps
    }

    /// Total accumulated time across all laps, formatted.
    pub fn total(&self) -> String {
        format_duration(self.total)
    }

    fn mean(&self) -> Duration {
        if self.laps > 0 {
            self.total / self.laps
        } else {
            Duration::ZERO
        }
    }
}

impl fmt::Display for Timer {
    /// Formats the mean lap time.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_duration(self.mean()))
    }
}

fn format_duration(d: Duration) -> String {
    const US: u128 = 1_000;
    const MS: u128 = 1_000_000;
    const SEC: u128 = 1_000_000_000;
    const MIN: u128 = 60 * SEC;
    const HOUR: u128 = 60 * MIN;

    let nanos = d.as_nanos();
    if nanos < 5 * US {
        format!("{}ns", nanos)
    } else if nanos < 5 * MS {
        // 'u' standing in for micro
        format!("{}us", nanos / US)
    } else if nanos < 5 * SEC {
        format!("{}ms", nanos / MS)
    } else if nanos < 5 * MIN {
        format!("{}s", nanos / SEC)
    } else if nanos < 5 * HOUR {
        format!("{}m", nanos / MIN)
    } else {
        format!("{}h", nanos / HOUR)
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod tests;
