//! Wall clock sampling.
//!
//! The clock loop only needs "what time is it now", so the source sits
//! behind [`WallClock`]: [`SystemClock`] reads the host clock through
//! `chrono`, [`FixedClock`] returns a canned reading for tests.

use std::time::Duration;

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Utc};

use crate::types::{CalendarDate, ClockReading};

/// A reading plus the instant it was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub reading: ClockReading,
    /// Milliseconds since the Unix epoch.
    pub epoch_ms: u64,
}

pub trait WallClock {
    fn sample(&self) -> Sample;
}

/// Host wall clock, in local time or UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    utc: bool,
}

impl SystemClock {
    pub fn new(utc: bool) -> Self {
        Self { utc }
    }
}

impl WallClock for SystemClock {
    fn sample(&self) -> Sample {
        if self.utc {
            sample_from(&Utc::now())
        } else {
            sample_from(&Local::now())
        }
    }
}

/// Always returns the same sample.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Sample);

impl WallClock for FixedClock {
    fn sample(&self) -> Sample {
        self.0
    }
}

/// Break a calendar timestamp into clock fields.
///
/// Years before 1 CE are clamped to 0.
pub fn reading_from<T: Datelike + Timelike>(t: &T) -> ClockReading {
    ClockReading::new(
        t.hour(),
        t.minute(),
        // chrono folds a leap second into the nanoseconds of second 59.
        t.second(),
        CalendarDate::new(
            t.weekday().num_days_from_sunday(),
            t.day(),
            t.month0(),
            u32::try_from(t.year()).unwrap_or(0),
        ),
    )
}

fn sample_from<Tz: TimeZone>(t: &DateTime<Tz>) -> Sample {
    Sample {
        reading: reading_from(t),
        epoch_ms: u64::try_from(t.timestamp_millis()).unwrap_or(0),
    }
}

/// Time left until the next multiple of `tick_ms` after `epoch_ms`.
///
/// Aligning wakeups to the tick keeps a 1-second clock from drifting across
/// second boundaries and skipping a displayed second.
pub fn until_next_tick(epoch_ms: u64, tick_ms: u32) -> Duration {
    let tick = u64::from(tick_ms.max(1));
    Duration::from_millis(tick - epoch_ms % tick)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn reading_uses_zero_based_month_and_sunday_weekday() {
        // 2024-01-15 was a Monday.
        let t = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(7, 5, 9)
            .unwrap();
        let r = reading_from(&t);
        assert_eq!((r.hour, r.minute, r.second), (7, 5, 9));
        assert_eq!(r.date, CalendarDate::new(1, 15, 0, 2024));
    }

    #[test]
    fn sunday_is_weekday_zero() {
        let t = NaiveDate::from_ymd_opt(2024, 1, 14)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(reading_from(&t).date.weekday, 0);
    }

    #[test]
    fn leap_second_reads_as_fifty_nine() {
        let t = NaiveDate::from_ymd_opt(2016, 12, 31)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 1_500)
            .unwrap();
        assert_eq!(reading_from(&t).second, 59);
    }

    #[test]
    fn negative_years_clamp_to_zero() {
        let t = NaiveDate::from_ymd_opt(-44, 3, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(reading_from(&t).date.year, 0);
    }

    #[test]
    fn utc_sample_carries_epoch_millis() {
        let t = Utc.with_ymd_and_hms(2024, 1, 15, 7, 5, 9).unwrap();
        let s = sample_from(&t);
        assert_eq!(s.epoch_ms, 1_705_302_309_000);
        assert_eq!(s.reading.second, 9);
    }

    #[test]
    fn next_tick_is_aligned() {
        assert_eq!(until_next_tick(10_250, 1000), Duration::from_millis(750));
        assert_eq!(until_next_tick(10_000, 1000), Duration::from_millis(1000));
        assert_eq!(until_next_tick(7, 0), Duration::from_millis(1));
    }

    #[test]
    fn fixed_clock_repeats_itself() {
        let s = Sample {
            reading: ClockReading::default(),
            epoch_ms: 42,
        };
        let clock = FixedClock(s);
        assert_eq!(clock.sample(), clock.sample());
    }
}
