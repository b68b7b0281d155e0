//! Calendar lookups for month and weekday names.

use crate::lexicon::{DAY_TOKENS, MONTH_TOKENS};

/// Returned for a month index outside 0-11.
pub const UNKNOWN_MONTH: &str = "Sovbe'lu'bogh jar";

/// Returned for a weekday index outside 0-6.
pub const UNKNOWN_DAY: &str = "Sovbe'lu'bogh jaj";

/// Klingon name of a month (0 = January).
pub fn month_token(index: u32) -> &'static str {
    usize::try_from(index)
        .ok()
        .and_then(|i| MONTH_TOKENS.get(i))
        .copied()
        .unwrap_or(UNKNOWN_MONTH)
}

/// Klingon name of a weekday (0 = Sunday).
pub fn day_token(index: u32) -> &'static str {
    usize::try_from(index)
        .ok()
        .and_then(|i| DAY_TOKENS.get(i))
        .copied()
        .unwrap_or(UNKNOWN_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_month_has_a_name() {
        for i in 0..12 {
            assert_ne!(month_token(i), UNKNOWN_MONTH);
        }
    }

    #[test]
    fn every_weekday_has_a_name() {
        assert_eq!(day_token(0), "DaSjaj");
        assert_eq!(day_token(6), "lojmItjaj");
        for i in 0..7 {
            assert_ne!(day_token(i), UNKNOWN_DAY);
        }
    }

    #[test]
    fn out_of_range_indices_use_sentinels() {
        assert_eq!(month_token(12), UNKNOWN_MONTH);
        assert_eq!(month_token(u32::MAX), UNKNOWN_MONTH);
        assert_eq!(day_token(7), UNKNOWN_DAY);
        assert_eq!(day_token(u32::MAX), UNKNOWN_DAY);
    }
}
