//! Core clock logic module - pure, deterministic, and testable
//!
//! This crate turns wall clock readings into Klingon text. It has **no
//! dependencies** on terminals or I/O:
//!
//! - **Total**: every function returns a value for every input. Unknown
//!   phrases pass through unchanged, out-of-range calendar indices map to
//!   sentinel tokens, large numbers fall back to digit-by-digit rendering.
//! - **Table-driven**: all vocabulary lives in `const` tables in [`lexicon`].
//! - **Deterministic**: the same reading always produces the same snapshot.
//!
//! # Module Structure
//!
//! - [`lexicon`]: digit, phrase, day and month tables, phrase lookup
//! - [`numerals`]: digit-wise and natural number rendering
//! - [`calendar`]: month and weekday lookups with sentinels
//! - [`format`]: time, date, title and footer lines
//! - [`dial`]: analog hand angles and dial geometry
//! - [`snapshot`]: everything one frame needs, serializable for headless output
//!
//! # Example
//!
//! ```
//! use klingon_clock_core::{time_to_tokens, natural_number_to_tokens, ClockSnapshot, SnapshotOptions};
//! use klingon_clock_types::{CalendarDate, ClockReading};
//!
//! assert_eq!(time_to_tokens(7, 5, 9), "Soch:pagh vagh:pagh Hut");
//! assert_eq!(natural_number_to_tokens(23), "cha'maH wej");
//!
//! let reading = ClockReading::new(7, 5, 9, CalendarDate::new(0, 15, 0, 2024));
//! let snap = ClockSnapshot::from_reading(&reading, &SnapshotOptions::default());
//! assert_eq!(snap.plain_time, "07:05:09");
//! ```

pub mod calendar;
pub mod dial;
pub mod format;
pub mod lexicon;
pub mod numerals;
pub mod snapshot;

pub use klingon_clock_types as types;

// Re-export commonly used items for convenience
pub use calendar::{day_token, month_token, UNKNOWN_DAY, UNKNOWN_MONTH};
pub use dial::{hand_angles, polar_offset, HandAngles, HourMarker, DIAL_NUMERALS, HOUR_MARKERS};
pub use format::{
    date_to_tokens, footer_line, plain_time, time_to_tokens, title_line, TimeTokens,
};
pub use lexicon::phrase;
pub use numerals::{
    digit_string_to_tokens, digit_to_token, natural_number_to_tokens, number_to_tokens,
    padded_number_to_tokens,
};
pub use snapshot::{ClockSnapshot, SnapshotOptions};
