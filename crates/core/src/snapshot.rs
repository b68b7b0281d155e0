//! Snapshot types for rendering and headless output.
//!
//! A [`ClockSnapshot`] holds every string and angle one frame shows, so the
//! view layer never calls into the transliteration tables itself.

use serde::Serialize;

use crate::dial::{hand_angles, HandAngles};
use crate::format::{date_to_tokens, footer_line, plain_time, title_line, TimeTokens};
use crate::types::ClockReading;

/// Per-session inputs that are not part of the wall clock reading.
#[derive(Debug, Clone, Default)]
pub struct SnapshotOptions {
    /// Name shown in the footer; blank hides it.
    pub owner: String,
}

/// Everything needed to draw one frame of the clock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockSnapshot {
    pub title: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    /// `hours:minutes:seconds` in Klingon.
    pub time: String,
    /// `HH:MM:SS` in Arabic digits.
    pub plain_time: String,
    pub date: String,
    pub footer: String,
    pub hands: HandAngles,
    /// True on odd seconds; the view dims the time separators then.
    pub blink: bool,
    #[serde(skip)]
    pub fingerprint: u64,
}

impl ClockSnapshot {
    pub fn from_reading(reading: &ClockReading, options: &SnapshotOptions) -> Self {
        let tokens = TimeTokens::new(reading.hour, reading.minute, reading.second);
        let time = tokens.joined();
        let TimeTokens {
            hours,
            minutes,
            seconds,
        } = tokens;

        Self {
            title: title_line(),
            hours,
            minutes,
            seconds,
            time,
            plain_time: plain_time(reading.hour, reading.minute, reading.second),
            date: date_to_tokens(&reading.date),
            footer: footer_line(&options.owner, reading.date.year),
            hands: hand_angles(reading.hour, reading.minute, reading.second),
            blink: reading.second % 2 == 1,
            fingerprint: reading.fingerprint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CalendarDate;

    fn reading() -> ClockReading {
        ClockReading::new(7, 5, 9, CalendarDate::new(0, 15, 0, 2024))
    }

    #[test]
    fn snapshot_carries_transliterated_fields() {
        let snap = ClockSnapshot::from_reading(&reading(), &SnapshotOptions::default());
        assert_eq!(snap.hours, "Soch");
        assert_eq!(snap.minutes, "pagh vagh");
        assert_eq!(snap.seconds, "pagh Hut");
        assert_eq!(snap.time, "Soch:pagh vagh:pagh Hut");
        assert_eq!(snap.plain_time, "07:05:09");
        assert_eq!(snap.date, "DaSjaj, wa'maH vagh jar wa' cha' pagh cha' loS");
        assert_eq!(snap.title, "yI'el tlhIngan rep");
        assert!(snap.footer.contains("2024"));
        assert!(snap.blink);
    }

    #[test]
    fn footer_includes_owner() {
        let opts = SnapshotOptions {
            owner: "Martok".to_string(),
        };
        let snap = ClockSnapshot::from_reading(&reading(), &opts);
        assert!(snap.footer.contains("Martok"));
    }

    #[test]
    fn fingerprint_follows_the_reading() {
        let opts = SnapshotOptions::default();
        let a = ClockSnapshot::from_reading(&reading(), &opts);
        let mut next = reading();
        next.second += 1;
        let b = ClockSnapshot::from_reading(&next, &opts);
        assert_ne!(a.fingerprint, b.fingerprint);
        assert!(!b.blink);
    }

    #[test]
    fn json_output_omits_fingerprint() {
        let snap = ClockSnapshot::from_reading(&reading(), &SnapshotOptions::default());
        let v = serde_json::to_value(&snap).unwrap();
        assert_eq!(v["time"], "Soch:pagh vagh:pagh Hut");
        assert!(v.get("fingerprint").is_none());
        assert!(v["hands"]["second"].is_number());
    }
}
