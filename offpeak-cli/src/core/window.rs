use std::fmt::{Display, Formatter};

use chrono::{NaiveTime, ParseResult, TimeDelta, Timelike};
use serde::Serialize;

/// Durations are floored to whole slots of this many seconds.
const SLOT_SECONDS: i64 = 30 * 60;

/// Daily off-peak window, possibly crossing midnight.
///
/// Only the time of day matters: the window repeats every calendar day.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct OffPeakWindow {
    /// Inclusive.
    pub start: NaiveTime,

    /// Exclusive.
    pub end: NaiveTime,
}

impl Display for OffPeakWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}–{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

impl OffPeakWindow {
    pub const fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Whether the window runs over midnight into the next day.
    ///
    /// A window starting and ending at the same time also counts: it covers the whole day.
    #[must_use]
    pub fn crosses_midnight(self) -> bool {
        self.start >= self.end
    }

    #[must_use]
    pub fn contains(self, time: NaiveTime) -> bool {
        if self.crosses_midnight() {
            time >= self.start || time < self.end
        } else {
            self.start <= time && time < self.end
        }
    }

    /// Window length floored to whole half-hours.
    #[must_use]
    pub fn duration(self) -> TimeDelta {
        let raw = if self.crosses_midnight() {
            self.end - self.start + TimeDelta::days(1)
        } else {
            self.end - self.start
        };
        TimeDelta::seconds(raw.num_seconds().div_euclid(SLOT_SECONDS) * SLOT_SECONDS)
    }

    #[must_use]
    pub fn hours(self) -> f64 {
        #[expect(clippy::cast_precision_loss)]
        let n_slots = (self.duration().num_seconds() / SLOT_SECONDS) as f64;
        n_slots / 2.0
    }

    /// Whether both ends fall on a half-hour boundary, the granularity tariffs are sold in.
    #[must_use]
    pub fn is_aligned(self) -> bool {
        [self.start, self.end].into_iter().all(|time| {
            time.nanosecond() == 0
                && i64::from(time.num_seconds_from_midnight()) % SLOT_SECONDS == 0
        })
    }
}

/// Parse `HH:MM` or `HH:MM:SS`.
pub fn parse_time_of_day(text: &str) -> ParseResult<NaiveTime> {
    NaiveTime::parse_from_str(text, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn every_minute() -> impl Iterator<Item = NaiveTime> {
        (0..24 * 60).map(|minute| time(minute / 60, minute % 60))
    }

    #[test]
    fn test_same_day_window() {
        let window = OffPeakWindow::new(time(1, 0), time(5, 30));
        for t in every_minute() {
            assert_eq!(window.contains(t), time(1, 0) <= t && t < time(5, 30), "{t}");
        }
    }

    #[test]
    fn test_midnight_crossing_window() {
        let window = OffPeakWindow::new(time(23, 30), time(5, 30));
        for t in every_minute() {
            assert_eq!(window.contains(t), !(time(5, 30) <= t && t < time(23, 30)), "{t}");
        }
    }

    #[test]
    fn test_degenerate_window_is_always_off_peak() {
        let window = OffPeakWindow::new(time(6, 0), time(6, 0));
        assert!(every_minute().all(|t| window.contains(t)));
    }

    #[test]
    fn test_boundaries() {
        let window = OffPeakWindow::new(time(22, 0), time(6, 0));
        assert!(window.contains(time(22, 0)));
        assert!(!window.contains(time(6, 0)));
        assert!(window.contains(time(0, 0)));
        assert!(!window.contains(time(21, 59)));
    }

    #[test]
    fn test_hours_overnight() {
        assert_abs_diff_eq!(OffPeakWindow::new(time(22, 0), time(6, 0)).hours(), 8.0);
    }

    #[test]
    fn test_hours_full_day() {
        assert_abs_diff_eq!(OffPeakWindow::new(time(6, 0), time(6, 0)).hours(), 24.0);
    }

    #[test]
    fn test_hours_below_resolution() {
        let window = OffPeakWindow::new(time(0, 0), time(0, 15));
        assert_abs_diff_eq!(window.hours(), 0.0);
        assert!(window.duration().is_zero());
    }

    #[test]
    fn test_hours_floored() {
        assert_abs_diff_eq!(OffPeakWindow::new(time(23, 30), time(5, 45)).hours(), 6.0);
        assert_abs_diff_eq!(OffPeakWindow::new(time(0, 30), time(4, 30)).hours(), 4.0);
    }

    #[test]
    fn test_is_aligned() {
        assert!(OffPeakWindow::new(time(23, 30), time(5, 30)).is_aligned());
        assert!(!OffPeakWindow::new(time(23, 30), time(5, 45)).is_aligned());
    }

    #[test]
    fn test_parse_time_of_day() {
        assert_eq!(parse_time_of_day("23:30").unwrap(), time(23, 30));
        assert_eq!(parse_time_of_day("05:30:00").unwrap(), time(5, 30));
        assert!(parse_time_of_day("25:00").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(OffPeakWindow::new(time(23, 30), time(5, 30)).to_string(), "23:30–05:30");
    }
}
