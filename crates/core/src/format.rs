//! Composite formatters for the clock face.
//!
//! These functions assemble the lines the clock actually shows. None of them
//! validate their input: an hour of 99 is transliterated like any other
//! number.

use crate::calendar::{day_token, month_token};
use crate::lexicon::phrase;
use crate::numerals::{natural_number_to_tokens, number_to_tokens, padded_number_to_tokens};
use crate::types::CalendarDate;

/// Separator between the fields of the digital time.
pub const TIME_SEPARATOR: char = ':';

/// Width of the minute and second fields of the digital time.
pub const TIME_FIELD_WIDTH: usize = 2;

/// The three transliterated fields of a time of day.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimeTokens {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

impl TimeTokens {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours: number_to_tokens(u64::from(hours)),
            minutes: padded_number_to_tokens(u64::from(minutes), TIME_FIELD_WIDTH),
            seconds: padded_number_to_tokens(u64::from(seconds), TIME_FIELD_WIDTH),
        }
    }

    /// Fields joined by [`TIME_SEPARATOR`].
    pub fn joined(&self) -> String {
        let mut out =
            String::with_capacity(self.hours.len() + self.minutes.len() + self.seconds.len() + 2);
        out.push_str(&self.hours);
        out.push(TIME_SEPARATOR);
        out.push_str(&self.minutes);
        out.push(TIME_SEPARATOR);
        out.push_str(&self.seconds);
        out
    }
}

/// Klingon time of day, e.g. `Soch:pagh vagh:pagh Hut` for 7:05:09.
///
/// The hour is transliterated as is; minutes and seconds keep their
/// leading zero the way a digital clock shows them.
pub fn time_to_tokens(hours: u32, minutes: u32, seconds: u32) -> String {
    TimeTokens::new(hours, minutes, seconds).joined()
}

/// Klingon date sentence: `<day-name>, <day> <month> <year>`.
///
/// ```
/// use klingon_clock_core::date_to_tokens;
/// use klingon_clock_core::types::CalendarDate;
///
/// assert_eq!(
///     date_to_tokens(&CalendarDate::new(0, 15, 0, 2024)),
///     "DaSjaj, wa'maH vagh jar wa' cha' pagh cha' loS"
/// );
/// ```
pub fn date_to_tokens(date: &CalendarDate) -> String {
    format!(
        "{}, {} {} {}",
        day_token(date.weekday),
        natural_number_to_tokens(u64::from(date.day)),
        month_token(date.month),
        natural_number_to_tokens(u64::from(date.year)),
    )
}

/// `HH:MM:SS` in Arabic digits, shown next to the Klingon time for readers
/// who do not speak the language.
pub fn plain_time(hours: u32, minutes: u32, seconds: u32) -> String {
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Heading shown above the clock.
pub fn title_line() -> String {
    format!("{} {}", phrase("Welcome to"), phrase("Klingon Clock"))
}

/// Copyright line shown below the clock.
///
/// `owner` is omitted when blank.
pub fn footer_line(owner: &str, year: u32) -> String {
    let owner = owner.trim();
    if owner.is_empty() {
        format!(
            "{} {} - {}",
            phrase("Copyright"),
            year,
            phrase("May the force be with you")
        )
    } else {
        format!(
            "{} {} - {} - {}",
            phrase("Copyright"),
            owner,
            year,
            phrase("May the force be with you")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_fields_are_transliterated_independently() {
        assert_eq!(time_to_tokens(7, 5, 9), "Soch:pagh vagh:pagh Hut");
        assert_eq!(time_to_tokens(23, 59, 0), "cha' wej:vagh Hut:pagh pagh");
    }

    #[test]
    fn time_is_not_range_checked() {
        assert_eq!(time_to_tokens(99, 100, 61), "Hut Hut:wa' pagh pagh:jav wa'");
    }

    #[test]
    fn time_tokens_expose_each_field() {
        let t = TimeTokens::new(0, 0, 0);
        assert_eq!(t.hours, "pagh");
        assert_eq!(t.minutes, "pagh pagh");
        assert_eq!(t.seconds, "pagh pagh");
        assert_eq!(t.joined().matches(TIME_SEPARATOR).count(), 2);
    }

    #[test]
    fn date_uses_sentinels_for_bad_indices() {
        let s = date_to_tokens(&CalendarDate::new(7, 1, 12, 2000));
        assert_eq!(s, "Sovbe'lu'bogh jaj, wa' Sovbe'lu'bogh jar cha' pagh pagh pagh");
    }

    #[test]
    fn plain_time_is_zero_padded() {
        assert_eq!(plain_time(7, 5, 9), "07:05:09");
    }

    #[test]
    fn title_and_footer_use_phrases() {
        assert_eq!(title_line(), "yI'el tlhIngan rep");
        assert_eq!(
            footer_line("", 2026),
            "ghItlh Soj 2026 - Heghlu'meH QaQ jajvam"
        );
        assert_eq!(
            footer_line(" Kor ", 2026),
            "ghItlh Soj Kor - 2026 - Heghlu'meH QaQ jajvam"
        );
    }
}
