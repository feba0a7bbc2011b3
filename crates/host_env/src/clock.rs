//! Wall-clock source abstraction.

use std::cell::Cell;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// One local wall-clock reading.
pub struct ClockSnapshot {
    /// Four-digit year.
    pub year: u32,
    /// Month, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
    /// Hour, 0-23.
    pub hour: u32,
    /// Minute, 0-59.
    pub minute: u32,
    /// Second, 0-59.
    pub second: u32,
}

impl Default for ClockSnapshot {
    fn default() -> Self {
        Self {
            year: 1970,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }
}

/// Source of wall-clock readings.
pub trait Clock {
    /// Returns the current local time.
    fn now(&self) -> ClockSnapshot;
}

#[derive(Debug, Clone, Copy, Default)]
/// Real wall clock backed by the browser `Date` object.
///
/// Outside wasm (unit tests, tooling builds) readings collapse to the epoch;
/// the shell never renders a clock there.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ClockSnapshot {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return ClockSnapshot {
                year: date.get_full_year(),
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
                second: date.get_seconds(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            ClockSnapshot::default()
        }
    }
}

#[derive(Debug)]
/// Deterministic clock for tests; readings come from a settable cell.
pub struct FixedClock {
    snapshot: Cell<ClockSnapshot>,
}

impl FixedClock {
    /// Creates a clock pinned to `snapshot`.
    pub fn new(snapshot: ClockSnapshot) -> Self {
        Self {
            snapshot: Cell::new(snapshot),
        }
    }

    /// Replaces the pinned reading.
    pub fn set(&self, snapshot: ClockSnapshot) {
        self.snapshot.set(snapshot);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> ClockSnapshot {
        self.snapshot.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_pinned_reading_until_reset() {
        let clock = FixedClock::new(ClockSnapshot {
            year: 2026,
            month: 8,
            day: 30,
            hour: 14,
            minute: 5,
            second: 0,
        });
        assert_eq!(clock.now().hour, 14);

        clock.set(ClockSnapshot {
            hour: 15,
            ..clock.now()
        });
        assert_eq!(clock.now().hour, 15);
        assert_eq!(clock.now().day, 30);
    }
}
