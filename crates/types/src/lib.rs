//! Core types module - shared data structures and constants
//!
//! This module defines the plain data passed between the wall clock, the
//! transliteration core, and the terminal view. Nothing here has external
//! dependencies, so the same types work in the runner, in tests, and in
//! headless output.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 1000 | Wall clock sampling cadence |
//! | `MIN_TICK_MS` | 50 | Lowest accepted cadence |
//! | `MAX_TICK_MS` | 60000 | Highest accepted cadence |
//! | `MIN_REDRAW_INTERVAL_MS` | 5000 | Redraw at least this often when nothing changed |
//!
//! # Dial Geometry
//!
//! The analog dial is drawn with two terminal columns per unit of radius,
//! which roughly compensates for the height/width ratio of terminal glyphs.
//!
//! # Examples
//!
//! ```
//! use klingon_clock_types::{CalendarDate, ClockReading};
//!
//! let reading = ClockReading::new(7, 5, 9, CalendarDate::new(1, 15, 0, 2024));
//! assert_eq!(reading.hour, 7);
//! assert_eq!(reading.date.month, 0);
//! ```

/// Wall clock sampling cadence in milliseconds (1 second).
pub const TICK_MS: u32 = 1000;

/// Lowest sampling cadence accepted from configuration.
pub const MIN_TICK_MS: u32 = 50;

/// Highest sampling cadence accepted from configuration.
pub const MAX_TICK_MS: u32 = 60_000;

/// Upper bound between two redraws of an unchanged frame.
pub const MIN_REDRAW_INTERVAL_MS: u64 = 5000;

/// Terminal columns per unit of dial radius.
pub const DIAL_ASPECT: f32 = 2.0;

/// Largest dial radius in terminal rows.
pub const DIAL_MAX_RADIUS: u16 = 10;

/// Smallest dial radius worth drawing.
pub const DIAL_MIN_RADIUS: u16 = 4;

/// Hand lengths as a fraction of the dial radius.
pub const HOUR_HAND_RATIO: f32 = 0.5;
pub const MINUTE_HAND_RATIO: f32 = 0.75;
pub const SECOND_HAND_RATIO: f32 = 0.85;

/// Calendar fields of a wall clock sample.
///
/// `weekday` counts from Sunday (0) and `month` from January (0); `day` is
/// the 1-based day of the month. Values are not validated here: lookups
/// downstream degrade to sentinel tokens when a field is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CalendarDate {
    pub weekday: u32,
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl CalendarDate {
    pub const fn new(weekday: u32, day: u32, month: u32, year: u32) -> Self {
        Self {
            weekday,
            day,
            month,
            year,
        }
    }
}

/// One sample of the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClockReading {
    /// Hour of the day (0-23).
    pub hour: u32,
    /// Minute of the hour (0-59).
    pub minute: u32,
    /// Second of the minute (0-59). A leap second is reported as 59.
    pub second: u32,
    pub date: CalendarDate,
}

impl ClockReading {
    pub const fn new(hour: u32, minute: u32, second: u32, date: CalendarDate) -> Self {
        Self {
            hour,
            minute,
            second,
            date,
        }
    }

    /// Pack every displayed field into one value.
    ///
    /// Two readings share a fingerprint exactly when they would draw the same
    /// frame, so the renderer can skip redundant flushes.
    pub fn fingerprint(&self) -> u64 {
        let d = &self.date;
        let mut h = u64::from(d.year);
        h = h.wrapping_mul(16).wrapping_add(u64::from(d.month & 0xF));
        h = h.wrapping_mul(32).wrapping_add(u64::from(d.day & 0x1F));
        h = h.wrapping_mul(8).wrapping_add(u64::from(d.weekday & 0x7));
        h = h.wrapping_mul(32).wrapping_add(u64::from(self.hour & 0x1F));
        h = h.wrapping_mul(64).wrapping_add(u64::from(self.minute & 0x3F));
        h.wrapping_mul(64).wrapping_add(u64::from(self.second & 0x3F))
    }
}

/// Terminal session actions.
///
/// The clock is a passive display; the only keys it reacts to end the
/// session or repaint the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionAction {
    Quit,
    Redraw,
}
